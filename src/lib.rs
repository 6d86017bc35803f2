//! Build-time code generators for embedding data into C/OpenCL sources.
//!
//! - [`color_table`]: CIE L*u*v* lightness table and conversion constants
//!   (`gen_color_consts` binary)
//! - [`byte_array`]: arbitrary file → `static uint8_t[]` literal
//!   (`xxd` binary)
//!
//! Both write plain text fragments meant to be `#include`d by a later build
//! step. Outputs are replaced atomically.

pub mod byte_array;
pub mod color_table;
pub mod error;
pub mod output;
pub mod primary;

pub use byte_array::{array_identifier, embed_file, render_byte_array};
pub use color_table::{render_color_consts, write_color_table, ColorConstants, LightnessTable};
pub use error::GenError;
