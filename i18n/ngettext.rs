//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! ngettext - translate message and choose plural form
//!
//! Like gettext, but selects the plural form of the translation that
//! matches COUNT under the catalog's plural rule.

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use gettext_catalog::gettext_lib::locale::locale_variants;
use gettext_catalog::{Catalog, TranslationTable};
use log::warn;

/// ngettext - translate message and choose plural form
#[derive(Parser)]
#[command(
    version,
    about = "ngettext - translate message and choose plural form",
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

    #[arg(short, long, action = clap::ArgAction::HelpLong, help = "Print help")]
    help: Option<bool>,

    #[arg(short = 'V', long, action = clap::ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[arg(help = "Singular form (MSGID)")]
    msgid: String,

    #[arg(help = "Plural form (MSGID_PLURAL)")]
    msgid_plural: String,

    #[arg(help = "Count for plural selection")]
    count: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let count: u64 = match args.count.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("ngettext: invalid count: {}", args.count);
            exit(1);
        }
    };

    let table = TranslationTable::from_env();
    if let Some(locale) = &args.locale {
        table.set_locale(locale);
    }

    if let Err(e) = table.bind_domain(&args.domain, &args.dir) {
        warn!("ngettext: {}", e);
    }

    let context = args.context.as_deref().unwrap_or("");
    let bound = table.bound_locales(&args.domain);
    let has_catalog = locale_variants(&table.locale())
        .iter()
        .any(|locale| bound.contains(locale));

    let translated = if has_catalog {
        table.dpngettext(&args.domain, context, &args.msgid, &args.msgid_plural, count)
    } else {
        // no catalog: pick between the two msgids with the default plural rule
        Catalog::new()
            .npgettext(context, &args.msgid, &args.msgid_plural, count)
            .to_string()
    };
    println!("{}", translated);
}
