//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Plural form rules
//!
//! GNU gettext selects one of several translated strings based on a count
//! `n`. The selection function depends on the language of the catalog. This
//! module holds the standard gettext plural-form table and maps a language
//! tag such as `pt_BR`, `el_GR@euro` or `ru_RU.UTF-8` to its rule.
//!
//! The formulas, written in the C syntax used by `Plural-Forms:` headers:
//! - one form: `0`
//! - Germanic: `(n != 1)`
//! - French: `(n > 1)`
//! - Latvian: `(n%10==1 && n%100!=11 ? 0 : n != 0 ? 1 : 2)`
//! - Irish: `n==1 ? 0 : n==2 ? 1 : 2`
//! - Romanian: `n==1 ? 0 : (n==0 || (n%100 > 0 && n%100 < 20)) ? 1 : 2`
//! - Lithuanian: `(n%10==1 && n%100!=11 ? 0 : n%10>=2 && (n%100<10 || n%100>=20) ? 1 : 2)`
//! - Russian: `(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2)`
//! - Czech: `(n==1) ? 0 : (n>=2 && n<=4) ? 1 : 2`
//! - Polish: `(n==1 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2)`
//! - Slovenian: `(n%100==1 ? 0 : n%100==2 ? 1 : n%100==3 || n%100==4 ? 2 : 3)`
//! - Arabic: `(n==0 ? 0 : n==1 ? 1 : n==2 ? 2 : n%100>=3 && n%100<=10 ? 3 : n%100>=11 ? 4 : 5)`

/// A plural-form rule from the gettext table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form: East Asian languages, Turkic languages, ...
    Only,
    /// Two forms, singular for one: Germanic and most Romance languages
    Germanic,
    /// Two forms, singular for zero and one: French, Brazilian Portuguese
    French,
    /// Three forms, special case for zero
    Latvian,
    /// Three forms, special cases for one and two
    Irish,
    /// Three forms, special case for numbers ending in 00 or [2-9][0-9]
    Romanian,
    /// Three forms, special case for numbers ending in 1[2-9]
    Lithuanian,
    /// Three forms, special cases for numbers ending in 1 and 2, 3, 4,
    /// except those ending in 1[1-4]
    Russian,
    /// Three forms, special cases for 1 and 2, 3, 4
    Czech,
    /// Three forms, special case for one and some numbers ending in 2, 3, or 4
    Polish,
    /// Four forms, special case for one and all numbers ending in 02, 03, or 04
    Slovenian,
    /// Six forms
    Arabic,
}

impl PluralRule {
    /// Number of plural forms a catalog using this rule carries
    pub fn forms(self) -> usize {
        match self {
            PluralRule::Only => 1,
            PluralRule::Germanic | PluralRule::French => 2,
            PluralRule::Latvian
            | PluralRule::Irish
            | PluralRule::Romanian
            | PluralRule::Lithuanian
            | PluralRule::Russian
            | PluralRule::Czech
            | PluralRule::Polish => 3,
            PluralRule::Slovenian => 4,
            PluralRule::Arabic => 6,
        }
    }

    /// Select the plural-form index for the count `n`
    ///
    /// The result is always less than [`PluralRule::forms`].
    pub fn index(self, n: u64) -> usize {
        let n10 = n % 10;
        let n100 = n % 100;

        match self {
            PluralRule::Only => 0,
            PluralRule::Germanic => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::Latvian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n != 0 {
                    1
                } else {
                    2
                }
            }
            PluralRule::Irish => match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            PluralRule::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (n100 > 0 && n100 < 20) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Lithuanian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n10 >= 2 && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Russian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            PluralRule::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&n100) => 3,
                _ if n100 >= 11 => 4,
                _ => 5,
            },
        }
    }
}

/// Rule used for a tag the table does not know
pub const DEFAULT_RULE: PluralRule = PluralRule::Germanic;

// Full language_TERRITORY tags are listed before bare languages so that
// regional exceptions such as pt_BR win.
const PLURAL_TABLE: &[(&str, PluralRule)] = &[
    ("pt_BR", PluralRule::French),
    // one form
    ("ay", PluralRule::Only),
    ("bo", PluralRule::Only),
    ("cgg", PluralRule::Only),
    ("dz", PluralRule::Only),
    ("fa", PluralRule::Only),
    ("id", PluralRule::Only),
    ("ja", PluralRule::Only),
    ("jbo", PluralRule::Only),
    ("ka", PluralRule::Only),
    ("kk", PluralRule::Only),
    ("km", PluralRule::Only),
    ("ko", PluralRule::Only),
    ("ky", PluralRule::Only),
    ("lo", PluralRule::Only),
    ("ms", PluralRule::Only),
    ("my", PluralRule::Only),
    ("sah", PluralRule::Only),
    ("su", PluralRule::Only),
    ("th", PluralRule::Only),
    ("tt", PluralRule::Only),
    ("ug", PluralRule::Only),
    ("vi", PluralRule::Only),
    ("wo", PluralRule::Only),
    ("zh", PluralRule::Only),
    // two forms, singular for one
    ("af", PluralRule::Germanic),
    ("an", PluralRule::Germanic),
    ("as", PluralRule::Germanic),
    ("ast", PluralRule::Germanic),
    ("az", PluralRule::Germanic),
    ("bg", PluralRule::Germanic),
    ("bn", PluralRule::Germanic),
    ("ca", PluralRule::Germanic),
    ("da", PluralRule::Germanic),
    ("de", PluralRule::Germanic),
    ("el", PluralRule::Germanic),
    ("en", PluralRule::Germanic),
    ("eo", PluralRule::Germanic),
    ("es", PluralRule::Germanic),
    ("et", PluralRule::Germanic),
    ("eu", PluralRule::Germanic),
    ("fi", PluralRule::Germanic),
    ("fo", PluralRule::Germanic),
    ("fur", PluralRule::Germanic),
    ("fy", PluralRule::Germanic),
    ("gl", PluralRule::Germanic),
    ("gu", PluralRule::Germanic),
    ("ha", PluralRule::Germanic),
    ("he", PluralRule::Germanic),
    ("hi", PluralRule::Germanic),
    ("hu", PluralRule::Germanic),
    ("hy", PluralRule::Germanic),
    ("ia", PluralRule::Germanic),
    ("it", PluralRule::Germanic),
    ("kn", PluralRule::Germanic),
    ("ku", PluralRule::Germanic),
    ("lb", PluralRule::Germanic),
    ("ml", PluralRule::Germanic),
    ("mn", PluralRule::Germanic),
    ("mr", PluralRule::Germanic),
    ("nah", PluralRule::Germanic),
    ("nap", PluralRule::Germanic),
    ("nb", PluralRule::Germanic),
    ("ne", PluralRule::Germanic),
    ("nl", PluralRule::Germanic),
    ("nn", PluralRule::Germanic),
    ("no", PluralRule::Germanic),
    ("nso", PluralRule::Germanic),
    ("or", PluralRule::Germanic),
    ("pa", PluralRule::Germanic),
    ("pap", PluralRule::Germanic),
    ("pms", PluralRule::Germanic),
    ("ps", PluralRule::Germanic),
    ("pt", PluralRule::Germanic),
    ("rm", PluralRule::Germanic),
    ("sco", PluralRule::Germanic),
    ("se", PluralRule::Germanic),
    ("si", PluralRule::Germanic),
    ("so", PluralRule::Germanic),
    ("son", PluralRule::Germanic),
    ("sq", PluralRule::Germanic),
    ("sv", PluralRule::Germanic),
    ("sw", PluralRule::Germanic),
    ("ta", PluralRule::Germanic),
    ("te", PluralRule::Germanic),
    ("tk", PluralRule::Germanic),
    ("tr", PluralRule::Germanic),
    ("ur", PluralRule::Germanic),
    ("yo", PluralRule::Germanic),
    // two forms, singular for zero and one
    ("ach", PluralRule::French),
    ("ak", PluralRule::French),
    ("am", PluralRule::French),
    ("arn", PluralRule::French),
    ("br", PluralRule::French),
    ("fil", PluralRule::French),
    ("fr", PluralRule::French),
    ("gun", PluralRule::French),
    ("ln", PluralRule::French),
    ("mfe", PluralRule::French),
    ("mg", PluralRule::French),
    ("mi", PluralRule::French),
    ("oc", PluralRule::French),
    ("tg", PluralRule::French),
    ("ti", PluralRule::French),
    ("tl", PluralRule::French),
    ("uz", PluralRule::French),
    ("wa", PluralRule::French),
    // three forms
    ("lv", PluralRule::Latvian),
    ("ga", PluralRule::Irish),
    ("ro", PluralRule::Romanian),
    ("lt", PluralRule::Lithuanian),
    ("be", PluralRule::Russian),
    ("bs", PluralRule::Russian),
    ("hr", PluralRule::Russian),
    ("ru", PluralRule::Russian),
    ("sr", PluralRule::Russian),
    ("uk", PluralRule::Russian),
    ("cs", PluralRule::Czech),
    ("sk", PluralRule::Czech),
    ("pl", PluralRule::Polish),
    // four forms
    ("sl", PluralRule::Slovenian),
    // six forms
    ("ar", PluralRule::Arabic),
];

/// Strip `@modifier`, `:suffix` and `.codeset` parts from a language tag
///
/// `el_GR@euro` becomes `el_GR`, `ru_RU.UTF-8` becomes `ru_RU`.
pub fn normalize_tag(tag: &str) -> &str {
    let end = tag.find(['@', ':', '.']).unwrap_or(tag.len());
    tag[..end].trim()
}

/// Look up the plural rule for a language tag
///
/// The full `language_TERRITORY` tag is tried first, then the bare language.
/// Unknown tags get [`DEFAULT_RULE`], the two-form `n == 1 ? 0 : 1` rule.
pub fn formula(tag: &str) -> PluralRule {
    let tag = normalize_tag(tag).replace('-', "_");
    let language = tag.split('_').next().unwrap_or("");

    PLURAL_TABLE
        .iter()
        .find(|(name, _)| *name == tag)
        .or_else(|| PLURAL_TABLE.iter().find(|(name, _)| *name == language))
        .map(|(_, rule)| *rule)
        .unwrap_or(DEFAULT_RULE)
}
