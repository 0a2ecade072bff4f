//! vtags CLI — extracts declaration tags from Verilog sources.
//!
//! `vtags [PATHS]...` scans the given files (and directories, walked
//! recursively for `.v` files) and writes a tag file in classic ctags or
//! JSON-lines format.

#![warn(missing_docs)]

mod output;
mod scan;

use std::process;

use clap::{Parser, ValueEnum};

/// vtags — Verilog declaration tag extractor.
#[derive(Parser, Debug)]
#[command(name = "vtags", version, about = "Verilog declaration tag extractor")]
pub struct Cli {
    /// Files or directories to scan. Directories are walked recursively for
    /// `.v` files; explicitly listed files are always scanned.
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Path of the tag file to write (`-` for standard output).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Tag file format.
    #[arg(short, long, value_enum)]
    pub format: Option<TagFileFormat>,

    /// Kind names to record (e.g. `--kinds net port module`).
    #[arg(long, num_args = 1..)]
    pub kinds: Vec<String>,

    /// Path to a custom `vtags.toml` configuration file.
    #[arg(long)]
    pub config: Option<String>,

    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Tag file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TagFileFormat {
    /// Classic sorted ctags format.
    Ctags,
    /// One JSON object per line.
    Json,
}

fn main() {
    let cli = Cli::parse();
    let code = match scan::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    };
    process::exit(code);
}
