//! Color Constants Generator
//!
//! Writes the CIE L*u*v* lightness lookup table and RGB → XYZ constants as a
//! C header fragment (`color_consts.h`).

use clap::Parser;
use std::path::PathBuf;
use std::process;

use embedgen::color_table::write_color_table;
use embedgen::GenError;

// ============================================================================
// Command Line Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "gen_color_consts")]
#[command(author, version, about = "Generate the L*u*v* lookup table header", long_about = None)]
struct Args {
    /// Output header path (overwritten if it exists)
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
        eprintln!("Writing: {}", args.output.display());
    }

    write_color_table(&args.output)?;

    if args.verbose {
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
