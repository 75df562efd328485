//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! msgunfmt - decompile message catalog from binary format
//!
//! Converts a machine object (.mo) file back into portable object (.po)
//! text, written to standard output unless an output file is given.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use gettext_catalog::Catalog;

/// msgunfmt - decompile message catalog from binary format
#[derive(Parser)]
#[command(
    version,
    about = "msgunfmt - decompile message catalog from binary format",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(short = 'o', long = "output-file", help = "Output file name (default: standard output)")]
    output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = "Print help")]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[arg(help = "Input .mo file")]
    file: PathBuf,
}

fn decompile(args: &Args) -> Result<(), String> {
    let data = fs::read(&args.file).map_err(|e| format!("{}: {}", args.file.display(), e))?;
    let catalog =
        Catalog::from_mo_bytes(&data).map_err(|e| format!("{}: {}", args.file.display(), e))?;
    let text = catalog.to_po_string();

    match &args.output {
        Some(path) => fs::write(path, text).map_err(|e| format!("{}: {}", path.display(), e)),
        None => io::stdout()
            .write_all(text.as_bytes())
            .map_err(|e| format!("stdout: {}", e)),
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = decompile(&args) {
        eprintln!("msgunfmt: {}", e);
        exit(1);
    }
}
