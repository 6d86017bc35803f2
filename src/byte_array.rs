//! File → C byte array embedding.
//!
//! Produces an `xxd -i` style fragment:
//!
//! ```text
//! static uint8_t logo_png[] = {
//!   0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d,
//!   0x49, 0x48, 0x44, 0x52, 0x00
//! };
//! ```
//!
//! Every array carries one extra trailing `0x00` so text resources can be
//! consumed as NUL-terminated strings.

use std::fs;
use std::path::Path;

use crate::error::GenError;
use crate::output::write_text_atomic;

/// Bytes per output line.
pub const CHUNK_LEN: usize = 12;

/// Derive the array name from a file path.
///
/// The name is `<stem>_<extension>` where only the last extension of the
/// file name counts (`foo.bar.png` → `foo.bar_png`). A file without an
/// extension yields `<stem>_`. Characters that are not valid in a C identifier
/// are passed through unchanged.
pub fn array_identifier(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    // Leading dots belong to the stem, so `.hidden` and `..bashrc` have no extension
    let lead = file_name.len() - file_name.trim_start_matches('.').len();
    let (stem, ext) = match file_name[lead..].rfind('.') {
        Some(dot) => (&file_name[..lead + dot], &file_name[lead + dot + 1..]),
        None => (&file_name[..], ""),
    };

    format!("{}_{}", stem, ext)
}

/// Render `bytes` as a `static uint8_t` array named `name`.
pub fn render_byte_array(name: &str, bytes: &[u8]) -> String {
    let mut out = format!("static uint8_t {}[] = {{", name);

    for chunk in bytes.chunks(CHUNK_LEN) {
        out.push_str("\n  ");
        for b in chunk {
            out.push_str(&format!("0x{:02x}, ", b));
        }
    }

    // Sentinel goes on the last data line; an empty file gets a line of its own
    if bytes.is_empty() {
        out.push_str("\n  ");
    }
    out.push_str("0x00\n};\n");

    out
}

/// Embed the file at `input` as a byte array written to `output`.
///
/// The input is checked before anything else happens, so a missing input
/// never creates or touches `output`. Returns the number of data bytes
/// embedded (not counting the sentinel).
pub fn embed_file(input: &Path, output: &Path) -> Result<usize, GenError> {
    if !input.is_file() {
        return Err(GenError::InputNotFound(input.to_path_buf()));
    }

    let bytes = fs::read(input).map_err(|source| GenError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let name = array_identifier(input);
    write_text_atomic(output, &render_byte_array(&name, &bytes))?;

    Ok(bytes.len())
}
