//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! gettext - retrieve text string from message catalog
//!
//! Binds the text domain at the catalog directory, selects the locale and
//! prints the translation of each MSGID.

use std::path::PathBuf;

use clap::Parser;
use gettext_catalog::TranslationTable;
use log::warn;

/// gettext - retrieve text string from message catalog
#[derive(Parser)]
#[command(
    version,
    about = "gettext - retrieve text string from message catalog",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    #[arg(
        short = 'd',
        long = "domain",
        env = "TEXTDOMAIN",
        default_value = "messages",
        help = "Text domain to look MSGID up in"
    )]
    domain: String,

    #[arg(
        short = 'p',
        long = "dir",
        env = "TEXTDOMAINDIR",
        default_value = ".",
        help = "Directory containing <locale>/LC_MESSAGES/<domain>.mo catalogs"
    )]
    dir: PathBuf,

    #[arg(short = 'l', long = "locale", help = "Locale to translate into (default: LC_MESSAGES, then LANG)")]
    locale: Option<String>,

    #[arg(short = 'c', long = "context", help = "Message context (msgctxt)")]
    context: Option<String>,

    #[arg(short = 'n', help = "Suppress trailing newline")]
    no_newline: bool,

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = "Print help")]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[arg(required = true, help = "Messages to translate")]
    msgids: Vec<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let table = TranslationTable::from_env();
    if let Some(locale) = &args.locale {
        table.set_locale(locale);
    }

    // an unusable catalog directory leaves every message untranslated
    if let Err(e) = table.bind_domain(&args.domain, &args.dir) {
        warn!("gettext: {}", e);
    }

    let context = args.context.as_deref().unwrap_or("");
    let translated: Vec<String> = args
        .msgids
        .iter()
        .map(|msgid| table.dpgettext(&args.domain, context, msgid))
        .collect();

    print!("{}", translated.join(" "));
    if !args.no_newline {
        println!();
    }
}
