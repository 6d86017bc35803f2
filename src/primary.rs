//! Primary constants for the L*u*v* lookup table.
//!
//! These are the literal inputs the color table is derived from.
//! All values are stored in f64; derived constants (the breakpoint, the
//! 8-bit-normalized matrix rows, the calibration scalars) are computed from
//! these by `color_table`.
//!
//! Sources:
//! - CIE 15:2004 (L* curve, u'v' chromaticity)
//! - ITU-R BT.709-6 / IEC 61966-2-1 (RGB → XYZ coefficients)

// =============================================================================
// CIE L* CURVE
// =============================================================================

/// CIE L* curve parameters.
///
/// The curve is linear below `(6/29)^3` and a cube root above it:
///   L* = 116 * Y^(1/3) - 16      for Y >  (6/29)^3
///   L* = (29/3)^3 * Y            otherwise
pub mod cie_l {
    /// Breakpoint ratio: epsilon = (DELTA_NUMERATOR / DELTA_DENOMINATOR)^3
    pub const DELTA_NUMERATOR: f64 = 6.0;
    pub const DELTA_DENOMINATOR: f64 = 29.0;
    /// Linear slope ratio: kappa = (KAPPA_NUMERATOR / KAPPA_DENOMINATOR)^3
    pub const KAPPA_NUMERATOR: f64 = 29.0;
    pub const KAPPA_DENOMINATOR: f64 = 3.0;
    /// Cube-root branch scale
    pub const SCALE: f64 = 116.0;
    /// Cube-root branch offset
    pub const OFFSET: f64 = 16.0;
}

// =============================================================================
// REFERENCE WHITE
// =============================================================================

/// Reference white u'v' chromaticity.
///
/// Fixed literals, not derived from an illuminant.
pub mod white {
    pub const UN: f64 = 0.197833;
    pub const VN: f64 = 0.468331;
}

// =============================================================================
// RGB → XYZ
// =============================================================================

/// Linear RGB → XYZ coefficients, one row per input channel.
///
/// `MR` holds the (X, Y, Z) contribution of red, `MG` of green, `MB` of blue.
/// They are divided by `CHANNEL_MAX` before use so the matrix operates on raw
/// 8-bit channel values.
pub mod rgb_xyz {
    pub const MR: [f64; 3] = [0.430574, 0.222015, 0.020183];
    pub const MG: [f64; 3] = [0.341550, 0.706655, 0.129553];
    pub const MB: [f64; 3] = [0.178325, 0.071330, 0.939180];
    pub const CHANNEL_MAX: f64 = 255.0;
}

// =============================================================================
// CALIBRATION
// =============================================================================

/// Normalization of L, u and v into the kernel's working range.
///
/// `maxi = 1 / RANGE`, `minu = U_MIN * maxi`, `minv = V_MIN * maxi`.
pub mod calibration {
    pub const RANGE: f64 = 270.0;
    pub const U_MIN: f64 = -88.0;
    pub const V_MIN: f64 = -134.0;
}

// =============================================================================
// TABLE GEOMETRY
// =============================================================================

/// Lightness table dimensions.
pub mod table {
    /// Entries computed from the curve (index i samples Y = i / COMPUTED)
    pub const COMPUTED: usize = 1024;
    /// Trailing entries that repeat the last computed value
    pub const PADDING: usize = 40;
    pub const LEN: usize = COMPUTED + PADDING;
}
