//! Byte Array Embedder
//!
//! Converts any file into a `static uint8_t name[]` C array, `xxd -i` style,
//! with a trailing `0x00` sentinel. The array name is derived from the input
//! file name (`shader.cl` → `shader_cl`).

use clap::Parser;
use std::path::PathBuf;
use std::process;

use embedgen::byte_array::{array_identifier, embed_file};
use embedgen::GenError;

// ============================================================================
// Command Line Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "xxd")]
#[command(author, version, about = "Embed a file as a C byte array", long_about = None)]
struct Args {
    /// Input file to embed (read as raw bytes)
    input: PathBuf,

    /// Output source fragment path (overwritten if it exists)
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

// ============================================================================
// Main
// ============================================================================

fn run(args: &Args) -> Result<(), GenError> {
    if args.verbose {
        eprintln!("Loading: {}", args.input.display());
    }

    let len = embed_file(&args.input, &args.output)?;

    if args.verbose {
        eprintln!(
            "Embedded {} bytes as {} in {}",
            len,
            array_identifier(&args.input),
            args.output.display()
        );
        eprintln!("Done!");
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
