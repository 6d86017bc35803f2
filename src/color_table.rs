//! CIE L*u*v* lookup table generator.
//!
//! Computes the lightness curve and the RGB → XYZ / u'v' constants used by the
//! `luv_from_rgb8uc4` kernel, and renders them as a C header fragment:
//!
//! - `color_consts_t`: a struct typedef (4 scalars, three `cl_float4` matrix
//!   rows, 3 calibration scalars)
//! - `color_ltable`: 1064 lightness values, already multiplied by `maxi`
//! - `color_consts`: the struct instance holding the derived constants
//!
//! All arithmetic is f64; values are rendered with six decimals and an `f`
//! suffix so the C compiler stores them as single precision.

use std::path::Path;

use crate::error::GenError;
use crate::output::write_text_atomic;
use crate::primary;

// ============================================================================
// Constants
// ============================================================================

/// Scalar and vector constants consumed by the L*u*v* conversion kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorConstants {
    /// Breakpoint between the linear and cube-root branches, (6/29)^3
    pub y0: f64,
    /// Slope of the linear branch, (29/3)^3
    pub a: f64,
    /// Reference white u'
    pub un: f64,
    /// Reference white v'
    pub vn: f64,
    /// Red contribution to (X, Y, Z) per 8-bit unit, 4th lane always zero
    pub mr: [f64; 4],
    /// Green contribution to (X, Y, Z) per 8-bit unit, 4th lane always zero
    pub mg: [f64; 4],
    /// Blue contribution to (X, Y, Z) per 8-bit unit, 4th lane always zero
    pub mb: [f64; 4],
    /// Lightness scale, 1/270
    pub maxi: f64,
    /// u offset, -88 * maxi
    pub minu: f64,
    /// v offset, -134 * maxi
    pub minv: f64,
}

/// Divide an RGB → XYZ row by the 8-bit channel maximum and pad to 4 lanes.
fn normalize_row(row: [f64; 3]) -> [f64; 4] {
    let nrm = 1.0 / primary::rgb_xyz::CHANNEL_MAX;
    [row[0] * nrm, row[1] * nrm, row[2] * nrm, 0.0]
}

impl ColorConstants {
    /// Derive every constant from the literals in [`primary`].
    pub fn derive() -> Self {
        let delta = primary::cie_l::DELTA_NUMERATOR / primary::cie_l::DELTA_DENOMINATOR;
        let kappa = primary::cie_l::KAPPA_NUMERATOR / primary::cie_l::KAPPA_DENOMINATOR;
        let maxi = 1.0 / primary::calibration::RANGE;

        ColorConstants {
            y0: delta * delta * delta,
            a: kappa * kappa * kappa,
            un: primary::white::UN,
            vn: primary::white::VN,
            mr: normalize_row(primary::rgb_xyz::MR),
            mg: normalize_row(primary::rgb_xyz::MG),
            mb: normalize_row(primary::rgb_xyz::MB),
            maxi,
            minu: primary::calibration::U_MIN * maxi,
            minv: primary::calibration::V_MIN * maxi,
        }
    }

    /// CIE L* for relative luminance `y`, before calibration.
    pub fn lightness(&self, y: f64) -> f64 {
        if y > self.y0 {
            primary::cie_l::SCALE * y.powf(1.0 / 3.0) - primary::cie_l::OFFSET
        } else {
            y * self.a
        }
    }
}

// ============================================================================
// Lightness Table
// ============================================================================

/// Calibrated lightness lookup table.
///
/// Entry `i < 1024` holds `L*(i / 1024) * maxi`; entries 1024..1064 repeat
/// entry 1023 so the kernel can read past the end of the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct LightnessTable {
    values: Vec<f64>,
}

impl LightnessTable {
    pub fn build(consts: &ColorConstants) -> Self {
        let computed = primary::table::COMPUTED;
        let mut values = Vec::with_capacity(primary::table::LEN);

        for i in 0..computed {
            let y = i as f64 / computed as f64;
            values.push(consts.lightness(y) * consts.maxi);
        }

        let last = values[computed - 1];
        values.resize(primary::table::LEN, last);

        LightnessTable { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Format a value as a six-decimal single-precision C literal.
fn fmt_float(v: f64) -> String {
    format!("{:.6}f", v)
}

/// Format a padded matrix row as a `cl_float4` initializer.
fn fmt_float4(row: &[f64; 4]) -> String {
    format!(
        "{{ {}, {}, {}, 0 }}",
        fmt_float(row[0]),
        fmt_float(row[1]),
        fmt_float(row[2]),
    )
}

/// Render the typedef, the lightness table and the constant instance.
pub fn render_color_consts(consts: &ColorConstants, table: &LightnessTable) -> String {
    let mut out = String::new();

    out.push_str("typedef struct color_consts_s {\n");
    out.push_str("    float y0, a, un, vn;\n");
    out.push_str("    cl_float4 mr, mg, mb;\n");
    out.push_str("    float maxi, minu, minv;\n");
    out.push_str("} color_consts_t;\n\n");

    out.push_str("static const float color_ltable[] = {\n");
    for &v in table.values() {
        out.push_str(&format!("    {},\n", fmt_float(v)));
    }
    out.push_str("};\n\n");

    out.push_str("static const color_consts_t color_consts = {\n");
    out.push_str(&format!(
        "    {}, {}, {}, {},\n",
        fmt_float(consts.y0),
        fmt_float(consts.a),
        fmt_float(consts.un),
        fmt_float(consts.vn),
    ));
    out.push_str(&format!("    {},\n", fmt_float4(&consts.mr)));
    out.push_str(&format!("    {},\n", fmt_float4(&consts.mg)));
    out.push_str(&format!("    {},\n", fmt_float4(&consts.mb)));
    out.push_str(&format!(
        "    {}, {}, {}\n",
        fmt_float(consts.maxi),
        fmt_float(consts.minu),
        fmt_float(consts.minv),
    ));
    out.push_str("};\n");

    out
}

/// Generate the header fragment and write it to `path`.
pub fn write_color_table(path: &Path) -> Result<(), GenError> {
    let consts = ColorConstants::derive();
    let table = LightnessTable::build(&consts);
    write_text_atomic(path, &render_color_consts(&consts, &table))
}
