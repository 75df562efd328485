//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Locale name handling
//!
//! Locale names have the form `language[_territory][.codeset][@modifier]`.

use std::env;

/// Reduce an environment locale value to a catalog directory name
///
/// `LANGUAGE`-style lists (`de_DE:de`) keep their first element, and any
/// `@modifier` is dropped.
pub fn normalize_env_locale(value: &str) -> String {
    let value = value.split(':').next().unwrap_or("");
    let value = value.split('@').next().unwrap_or("");
    value.trim().to_string()
}

/// Locale for message lookup taken from the environment
///
/// `LC_MESSAGES` wins over `LANG`; unset and empty variables are ignored.
/// Returns an empty string when neither is set.
pub fn default_locale() -> String {
    ["LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| normalize_env_locale(&value))
        .find(|locale| !locale.is_empty())
        .unwrap_or_default()
}

/// Locale names to try, most specific first
///
/// For "es_ES.UTF-8@valencia":
/// es_ES.UTF-8@valencia, es_ES@valencia, es_ES.UTF-8, es_ES, es@valencia, es
pub fn locale_variants(locale: &str) -> Vec<String> {
    let (base, modifier) = match locale.split_once('@') {
        Some((base, modifier)) => (base, Some(modifier)),
        None => (locale, None),
    };
    let (without_codeset, codeset) = match base.split_once('.') {
        Some((name, codeset)) => (name, Some(codeset)),
        None => (base, None),
    };
    let (language, territory) = match without_codeset.split_once('_') {
        Some((language, territory)) => (language, Some(territory)),
        None => (without_codeset, None),
    };

    let mut variants = vec![locale.to_string()];

    if let (Some(_), Some(m)) = (codeset, modifier) {
        variants.push(format!("{}@{}", without_codeset, m));
    }
    if let (Some(c), Some(_)) = (codeset, modifier) {
        variants.push(format!("{}.{}", without_codeset, c));
    }
    if codeset.is_some() || modifier.is_some() {
        variants.push(without_codeset.to_string());
    }
    if let (Some(_), Some(m)) = (territory, modifier) {
        variants.push(format!("{}@{}", language, m));
    }
    if territory.is_some() {
        variants.push(language.to_string());
    }

    let mut unique: Vec<String> = Vec::with_capacity(variants.len());
    for variant in variants {
        if !variant.is_empty() && !unique.contains(&variant) {
            unique.push(variant);
        }
    }
    unique
}
