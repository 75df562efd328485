//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! In-memory message catalog
//!
//! A `Catalog` is what both the .mo and the .po codecs decode into: the
//! metadata header plus a map of messages keyed by context and msgid. It
//! also implements the runtime lookup used by every gettext-family call.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::gettext_lib::mo_file::{self, MoError};
use crate::gettext_lib::plural::{self, PluralRule};
use crate::gettext_lib::po_file::{self, Comments, PoError};

/// Separator between msgctxt and msgid in catalog keys and .mo msgids
pub const EOT_SEPARATOR: char = '\x04';

/// Separator between singular and plural forms in .mo strings
pub const NUL_SEPARATOR: char = '\0';

/// Build the message map key for a context and msgid
pub fn make_key(context: &str, id: &str) -> String {
    if context.is_empty() {
        id.to_string()
    } else {
        format!("{}{}{}", context, EOT_SEPARATOR, id)
    }
}

/// One translatable message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Disambiguating context (msgctxt), empty when absent
    pub context: String,
    /// Untranslated singular string (msgid)
    pub id: String,
    /// Untranslated plural string (msgid_plural), empty for singular-only messages
    pub id_plural: String,
    /// Translation of a singular message
    pub str: String,
    /// Translations of a plural message, indexed by plural form
    pub str_plural: Vec<String>,
    /// Comment lines from the .po source
    pub comments: Comments,
}

impl Message {
    /// Create a singular message
    pub fn new(context: &str, id: &str, translation: &str) -> Self {
        Message {
            context: context.to_string(),
            id: id.to_string(),
            str: translation.to_string(),
            ..Default::default()
        }
    }

    /// Create a plural message
    pub fn plural(context: &str, id: &str, id_plural: &str, forms: &[&str]) -> Self {
        Message {
            context: context.to_string(),
            id: id.to_string(),
            id_plural: id_plural.to_string(),
            str_plural: forms.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Whether `str_plural` rather than `str` carries the translation
    pub fn is_plural(&self) -> bool {
        !self.id_plural.is_empty()
    }

    /// Catalog key of this message
    pub fn key(&self) -> String {
        make_key(&self.context, &self.id)
    }

    /// Ordering used by both encoders: context, then msgid, then msgid_plural
    pub(crate) fn sort_key(&self) -> (&str, &str, &str) {
        (&self.context, &self.id, &self.id_plural)
    }
}

/// Metadata header carried by the message with an empty msgid
///
/// Fields keep the order in which they were parsed so that re-encoding a
/// catalog reproduces the header as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MimeHeader {
    fields: Vec<(String, String)>,
}

impl MimeHeader {
    /// Parse `Key: Value` lines; lines without a colon are skipped
    pub fn parse(text: &str) -> Self {
        let mut header = MimeHeader::default();
        for line in text.split('\n') {
            if let Some((key, value)) = line.split_once(':') {
                header.set(key.trim(), value.trim());
            }
        }
        header
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a field, replacing an existing value in place
    pub fn set(&mut self, key: &str, value: &str) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some(field) => field.1 = value.to_string(),
            None => self.fields.push((key.to_string(), value.to_string())),
        }
    }

    /// Iterate over the fields in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Display for MimeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.fields {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

/// Decoded set of translations for one domain and locale
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Header metadata (`Language`, `Content-Type`, ...)
    pub mime_header: MimeHeader,
    /// Comment lines preceding the header entry in .po text
    pub header_comments: Comments,
    messages: HashMap<String, Message>,
    plural_rule: PluralRule,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Catalog {
            mime_header: MimeHeader::default(),
            header_comments: Comments::default(),
            messages: HashMap::new(),
            plural_rule: plural::DEFAULT_RULE,
        }
    }

    /// Create an empty catalog with the given header
    ///
    /// The plural rule is selected from the `Language` field.
    pub fn with_header(mime_header: MimeHeader) -> Self {
        let plural_rule = plural::formula(mime_header.get("Language").unwrap_or(""));
        Catalog {
            mime_header,
            header_comments: Comments::default(),
            messages: HashMap::new(),
            plural_rule,
        }
    }

    /// Decode a catalog from .mo data
    pub fn from_mo_bytes(data: &[u8]) -> Result<Self, MoError> {
        mo_file::decode(data)
    }

    /// Decode a catalog from .po text
    pub fn from_po_str(text: &str) -> Result<Self, PoError> {
        po_file::decode(text)
    }

    /// Encode the catalog in little-endian .mo format
    pub fn to_mo_bytes(&self) -> Vec<u8> {
        mo_file::encode(self)
    }

    /// Encode the catalog as .po text
    pub fn to_po_string(&self) -> String {
        po_file::encode(self)
    }

    /// Write the catalog to `path`, as .po text when the extension is
    /// `po` and as .mo data otherwise
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let is_po = path.extension().is_some_and(|ext| ext == "po");
        if is_po {
            fs::write(path, self.to_po_string())
        } else {
            fs::write(path, self.to_mo_bytes())
        }
    }

    /// Insert a message; an existing message with the same context and msgid
    /// is replaced
    ///
    /// A message with empty context and msgid is the header entry: its
    /// translation replaces `mime_header` and the plural rule is reselected
    /// from the new `Language` field. It is never stored as a message.
    pub fn insert(&mut self, message: Message) {
        if message.context.is_empty() && message.id.is_empty() {
            self.mime_header = MimeHeader::parse(&message.str);
            self.header_comments = message.comments;
            self.plural_rule = plural::formula(self.mime_header.get("Language").unwrap_or(""));
            return;
        }
        self.messages.insert(message.key(), message);
    }

    /// Keep only the messages for which `keep` returns true
    pub fn retain<F: FnMut(&Message) -> bool>(&mut self, mut keep: F) {
        self.messages.retain(|_, message| keep(message));
    }

    /// Find a message by context and msgid
    pub fn get(&self, context: &str, id: &str) -> Option<&Message> {
        self.messages.get(&make_key(context, id))
    }

    /// Iterate over all messages in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.values()
    }

    /// Messages sorted by context, msgid and msgid_plural
    pub fn sorted_messages(&self) -> Vec<&Message> {
        let mut messages: Vec<&Message> = self.messages.values().collect();
        messages.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The `Language` header field
    pub fn language(&self) -> Option<&str> {
        self.mime_header.get("Language")
    }

    /// Character set from the `Content-Type` header field
    pub fn charset(&self) -> Option<&str> {
        self.mime_header.get("Content-Type").and_then(|ct| {
            ct.split(';')
                .find_map(|part| part.trim().strip_prefix("charset="))
                .map(|cs| cs.trim())
        })
    }

    /// Plural rule in effect for this catalog
    pub fn plural_rule(&self) -> PluralRule {
        self.plural_rule
    }

    /// Override the plural rule selected from the header
    pub fn set_plural_rule(&mut self, rule: PluralRule) {
        self.plural_rule = rule;
    }

    /// Resolve a message to its translation
    ///
    /// Untranslated messages fall back to `id_plural` when it is non-empty
    /// and the plural rule selects a form other than the first, and to `id`
    /// otherwise. A plural message with fewer translations than the rule
    /// selects yields its last translation.
    pub fn resolve<'a>(
        &'a self,
        context: &str,
        id: &'a str,
        id_plural: &'a str,
        n: u64,
    ) -> &'a str {
        let idx = self.plural_rule.index(n);

        let translated = self
            .messages
            .get(&make_key(context, id))
            .and_then(|msg| {
                if msg.is_plural() {
                    let last = msg.str_plural.len().checked_sub(1)?;
                    Some(msg.str_plural[idx.min(last)].as_str())
                } else if msg.str.is_empty() {
                    None
                } else {
                    Some(msg.str.as_str())
                }
            });

        match translated {
            Some(s) => s,
            None if !id_plural.is_empty() && idx > 0 => id_plural,
            None => id,
        }
    }

    /// Look up a singular message
    pub fn gettext<'a>(&'a self, id: &'a str) -> &'a str {
        self.resolve("", id, "", 0)
    }

    /// Look up a singular message with context
    pub fn pgettext<'a>(&'a self, context: &str, id: &'a str) -> &'a str {
        self.resolve(context, id, "", 0)
    }

    /// Look up a plural message
    pub fn ngettext<'a>(&'a self, id: &'a str, id_plural: &'a str, n: u64) -> &'a str {
        self.resolve("", id, id_plural, n)
    }

    /// Look up a plural message with context
    pub fn npgettext<'a>(
        &'a self,
        context: &str,
        id: &'a str,
        id_plural: &'a str,
        n: u64,
    ) -> &'a str {
        self.resolve(context, id, id_plural, n)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
