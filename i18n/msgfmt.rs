//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! msgfmt - compile message catalog to binary format
//!
//! Compiles a portable object (.po) file into a machine object (.mo)
//! file for use by gettext lookups.

use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use gettext_catalog::gettext_lib::mo_file::{self, Endianness};
use gettext_catalog::Catalog;
use log::debug;

/// msgfmt - compile message catalog to binary format
#[derive(Parser)]
#[command(
    version,
    about = "msgfmt - compile message catalog to binary format",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(
        short = 'o',
        long = "output-file",
        default_value = "messages.mo",
        help = "Output file name"
    )]
    output: PathBuf,

    #[arg(short = 'f', long = "use-fuzzy", help = "Include fuzzy entries in the output")]
    include_fuzzy: bool,

    #[arg(short = 'v', long = "verbose", help = "Print the number of messages written")]
    verbose: bool,

    #[arg(long = "big-endian", help = "Write the .mo file in big-endian byte order")]
    big_endian: bool,

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = "Print help")]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[arg(help = "Input .po file")]
    file: PathBuf,
}

fn compile(args: &Args) -> Result<usize, String> {
    let text = fs::read_to_string(&args.file)
        .map_err(|e| format!("{}: {}", args.file.display(), e))?;
    let mut catalog =
        Catalog::from_po_str(&text).map_err(|e| format!("{}: {}", args.file.display(), e))?;

    if !args.include_fuzzy {
        let before = catalog.len();
        catalog.retain(|m| !m.comments.is_fuzzy());
        debug!("skipped {} fuzzy entries", before - catalog.len());
    }

    let endianness = if args.big_endian {
        Endianness::Big
    } else {
        Endianness::Little
    };
    fs::write(&args.output, mo_file::encode_with(&catalog, endianness))
        .map_err(|e| format!("{}: {}", args.output.display(), e))?;

    Ok(catalog.len())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    match compile(&args) {
        Ok(count) => {
            if args.verbose {
                eprintln!("{} translated messages.", count);
            }
        }
        Err(e) => {
            eprintln!("msgfmt: {}", e);
            exit(1);
        }
    }
}
