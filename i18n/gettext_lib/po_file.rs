//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! .po (Portable Object) file reader and writer
//!
//! The .po file format is the human-readable format for translated message
//! catalogs. Entries are separated by blank lines:
//! - Comments: lines starting with #
//!   - #  - translator comments
//!   - #. - extracted comments
//!   - #: - reference (file:line)
//!   - #, - flags (fuzzy, c-format, etc.)
//!   - #| - previous msgid
//!   - #~ - obsolete entry
//! - msgctxt "context" - message context (optional)
//! - msgid "original" - original string
//! - msgid_plural "plural" - plural original (optional)
//! - msgstr "translation" - translation (for singular)
//! - msgstr[N] "translation" - plural translations
//!
//! Any keyword may be followed by further quoted-string lines which are
//! concatenated to its value.

use std::fmt::Write as _;

use thiserror::Error;

use crate::gettext_lib::catalog::{Catalog, Message, MimeHeader};

/// Upper bound on `msgstr[N]` indices; no language uses more than six forms
const MAX_PLURAL_FORMS: usize = 64;

/// Error type for .po file parsing
#[derive(Debug, Error)]
pub enum PoError {
    /// A line that does not fit the entry grammar
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {0}: unterminated string")]
    UnterminatedString(usize),
    #[error("invalid UTF-8 in .po data")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Raw comment lines attached to an entry
///
/// Lines are kept verbatim (including the leading `#`) so that a decoded
/// catalog re-encodes with its comments intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comments {
    lines: Vec<String>,
}

impl Comments {
    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Content of the comment lines of one kind (the char after `#`)
    fn of_kind(&self, kind: char) -> impl Iterator<Item = &str> {
        self.lines().filter_map(move |line| {
            line.strip_prefix('#')
                .and_then(|rest| rest.strip_prefix(kind))
                .map(|content| content.trim())
        })
    }

    /// Translator comments (`# ...`)
    pub fn translator(&self) -> Vec<&str> {
        self.lines()
            .filter_map(|line| line.strip_prefix('#'))
            .filter(|rest| rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t'))
            .map(|rest| rest.trim())
            .collect()
    }

    /// Extracted comments (`#. ...`)
    pub fn extracted(&self) -> Vec<&str> {
        self.of_kind('.').collect()
    }

    /// Source references (`#: file:line ...`), one item per reference
    pub fn references(&self) -> Vec<&str> {
        self.of_kind(':').flat_map(|s| s.split_whitespace()).collect()
    }

    /// Flags (`#, fuzzy, c-format`)
    pub fn flags(&self) -> Vec<&str> {
        self.of_kind(',')
            .flat_map(|s| s.split(','))
            .map(|flag| flag.trim())
            .filter(|flag| !flag.is_empty())
            .collect()
    }

    pub fn is_fuzzy(&self) -> bool {
        self.flags().contains(&"fuzzy")
    }

    /// Previous-msgid comments (`#| msgid "..."`)
    pub fn previous(&self) -> Vec<&str> {
        self.of_kind('|').collect()
    }
}

/// Line reader that can step back one line
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        LineCursor {
            lines: text.lines().map(|line| line.trim_end()).collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    fn unread(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    /// 1-based number of the most recently read line
    fn line_number(&self) -> usize {
        self.pos
    }
}

/// Fields read so far for one entry
#[derive(Debug, Default)]
struct PoEntry {
    comments: Comments,
    context: Option<String>,
    id: Option<String>,
    id_plural: Option<String>,
    str: Option<String>,
    str_plural: Vec<String>,
}

impl PoEntry {
    fn has_fields(&self) -> bool {
        self.context.is_some() || self.id.is_some() || self.has_translation()
    }

    fn has_translation(&self) -> bool {
        self.str.is_some() || !self.str_plural.is_empty()
    }

    fn is_header(&self) -> bool {
        self.context.is_none() && self.id.as_deref().is_none_or(|id| id.is_empty())
    }

    fn into_message(self) -> Message {
        let mut message = Message {
            context: self.context.unwrap_or_default(),
            id: self.id.unwrap_or_default(),
            id_plural: self.id_plural.unwrap_or_default(),
            comments: self.comments,
            ..Default::default()
        };

        if message.is_plural() {
            message.str_plural = self.str_plural;
            if message.str_plural.is_empty() {
                message.str_plural.extend(self.str);
            }
            // a lone empty msgstr[0] is how an untranslated plural is written
            if message.str_plural.len() == 1 && message.str_plural[0].is_empty() {
                message.str_plural.clear();
            }
        } else {
            message.str = self
                .str
                .or_else(|| self.str_plural.into_iter().next())
                .unwrap_or_default();
        }
        message
    }
}

/// Parser for .po text
struct PoParser<'a> {
    cursor: LineCursor<'a>,
}

impl<'a> PoParser<'a> {
    fn new(text: &'a str) -> Self {
        PoParser {
            cursor: LineCursor::new(text),
        }
    }

    fn error(&self, message: String) -> PoError {
        PoError::Parse {
            line: self.cursor.line_number(),
            message,
        }
    }

    /// Parse the next entry; `None` at end of input
    ///
    /// Comment lines separated from an entry by blank lines still belong to
    /// it. Trailing comments with no entry after them are dropped.
    fn parse_entry(&mut self) -> Result<Option<PoEntry>, PoError> {
        let mut entry = PoEntry::default();

        while let Some(line) = self.cursor.next_line() {
            let trimmed = line.trim_start();

            if trimmed.is_empty() {
                if entry.has_fields() {
                    break;
                }
                continue;
            }

            if trimmed.starts_with('#') {
                if entry.has_fields() {
                    self.cursor.unread();
                    break;
                }
                entry.comments.push(trimmed);
                continue;
            }

            let (keyword, rest) = split_keyword(trimmed);
            match keyword {
                "msgctxt" | "msgid" if entry.has_translation() => {
                    // next entry without a separating blank line
                    self.cursor.unread();
                    break;
                }
                "msgctxt" => {
                    if entry.context.is_some() || entry.id.is_some() {
                        return Err(self.error(format!("unexpected msgctxt: {}", line)));
                    }
                    entry.context = Some(self.read_string(rest)?);
                }
                "msgid" => {
                    if entry.id.is_some() {
                        return Err(self.error(format!("duplicate msgid: {}", line)));
                    }
                    entry.id = Some(self.read_string(rest)?);
                }
                "msgid_plural" => {
                    if entry.id.is_none() || entry.id_plural.is_some() || entry.has_translation() {
                        return Err(self.error(format!("unexpected msgid_plural: {}", line)));
                    }
                    entry.id_plural = Some(self.read_string(rest)?);
                }
                "msgstr" => {
                    if entry.id.is_none() || entry.has_translation() {
                        return Err(self.error(format!("unexpected msgstr: {}", line)));
                    }
                    entry.str = Some(self.read_string(rest)?);
                }
                _ if keyword.starts_with("msgstr[") => {
                    if entry.id.is_none() || entry.str.is_some() {
                        return Err(self.error(format!("unexpected msgstr[]: {}", line)));
                    }
                    let index = parse_plural_index(keyword)
                        .ok_or_else(|| self.error(format!("invalid msgstr index: {}", line)))?;
                    let value = self.read_string(rest)?;
                    if entry.str_plural.len() <= index {
                        entry.str_plural.resize(index + 1, String::new());
                    }
                    entry.str_plural[index] = value;
                }
                _ if trimmed.starts_with('"') => {
                    return Err(self.error(format!("string without keyword: {}", line)));
                }
                _ => {
                    return Err(self.error(format!("invalid line: {}", line)));
                }
            }
        }

        if entry.has_fields() {
            Ok(Some(entry))
        } else {
            Ok(None)
        }
    }

    /// Read a keyword's value: the quoted string on the keyword line plus
    /// any quoted continuation lines
    fn read_string(&mut self, rest: &str) -> Result<String, PoError> {
        let mut value = self.parse_quoted(rest)?;

        while let Some(line) = self.cursor.peek() {
            let line = line.trim_start();
            if !line.starts_with('"') {
                break;
            }
            self.cursor.next_line();
            value.push_str(&self.parse_quoted(line)?);
        }

        Ok(value)
    }

    /// Parse one quoted string, unescaping its content
    fn parse_quoted(&self, s: &str) -> Result<String, PoError> {
        let s = s.trim();
        let body = s
            .strip_prefix('"')
            .ok_or_else(|| self.error(format!("expected quoted string: {}", s)))?;

        let mut result = String::new();
        let mut chars = body.chars();
        loop {
            match chars.next() {
                None => return Err(PoError::UnterminatedString(self.cursor.line_number())),
                Some('"') => break,
                Some('\\') => match chars.next() {
                    None => return Err(PoError::UnterminatedString(self.cursor.line_number())),
                    Some('n') => result.push('\n'),
                    Some('t') => result.push('\t'),
                    Some('r') => result.push('\r'),
                    Some('a') => result.push('\x07'),
                    Some('b') => result.push('\x08'),
                    Some('f') => result.push('\x0c'),
                    Some('v') => result.push('\x0b'),
                    Some('\\') => result.push('\\'),
                    Some('"') => result.push('"'),
                    Some(c) => {
                        // unknown escape, kept as written
                        result.push('\\');
                        result.push(c);
                    }
                },
                Some(c) => result.push(c),
            }
        }

        let trailing = chars.as_str().trim();
        if !trailing.is_empty() {
            return Err(self.error(format!("unexpected text after string: {}", trailing)));
        }
        Ok(result)
    }
}

/// Split a line into its leading keyword and the remainder
fn split_keyword(line: &str) -> (&str, &str) {
    let end = line
        .find(|c: char| c.is_whitespace() || c == '"')
        .unwrap_or(line.len());
    (&line[..end], &line[end..])
}

/// Index N of a `msgstr[N]` keyword, below `MAX_PLURAL_FORMS`
fn parse_plural_index(keyword: &str) -> Option<usize> {
    keyword
        .strip_prefix("msgstr[")?
        .strip_suffix(']')?
        .trim()
        .parse()
        .ok()
        .filter(|&index| index < MAX_PLURAL_FORMS)
}

/// Decode .po text into a catalog
///
/// The entry with an empty msgid and no context is the header; its msgstr
/// is parsed into the catalog's `MimeHeader`. Later duplicates of a
/// context/msgid pair replace earlier ones.
pub fn decode(text: &str) -> Result<Catalog, PoError> {
    let mut parser = PoParser::new(text);
    let mut header = None;
    let mut messages = Vec::new();

    while let Some(entry) = parser.parse_entry()? {
        if entry.is_header() {
            header = Some(entry);
        } else {
            messages.push(entry.into_message());
        }
    }

    let mut catalog = match header {
        Some(entry) => {
            let mime_header = MimeHeader::parse(entry.str.as_deref().unwrap_or(""));
            let mut catalog = Catalog::with_header(mime_header);
            catalog.header_comments = entry.comments;
            catalog
        }
        None => Catalog::new(),
    };
    for message in messages {
        catalog.insert(message);
    }
    Ok(catalog)
}

/// Decode .po data from raw bytes, which must be UTF-8
pub fn decode_bytes(data: &[u8]) -> Result<Catalog, PoError> {
    decode(std::str::from_utf8(data)?)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

/// Write `keyword "value"`, splitting the value after each embedded newline
/// into one quoted line per segment
fn write_field(out: &mut String, keyword: &str, value: &str, force_split: bool) {
    let segments: Vec<&str> = value.split_inclusive('\n').collect();

    if segments.len() > 1 || (force_split && !value.is_empty()) {
        let _ = writeln!(out, "{} \"\"", keyword);
        for segment in segments {
            let _ = writeln!(out, "\"{}\"", escape(segment));
        }
    } else {
        let _ = writeln!(out, "{} \"{}\"", keyword, escape(value));
    }
}

fn write_message(out: &mut String, message: &Message) {
    for line in message.comments.lines() {
        out.push_str(line);
        out.push('\n');
    }
    if !message.context.is_empty() {
        write_field(out, "msgctxt", &message.context, false);
    }
    write_field(out, "msgid", &message.id, false);

    if message.is_plural() {
        write_field(out, "msgid_plural", &message.id_plural, false);
        if message.str_plural.is_empty() {
            write_field(out, "msgstr[0]", "", false);
        }
        for (i, form) in message.str_plural.iter().enumerate() {
            write_field(out, &format!("msgstr[{}]", i), form, false);
        }
    } else {
        write_field(out, "msgstr", &message.str, false);
    }
}

/// Encode a catalog as .po text
///
/// The header entry comes first, followed by all messages sorted by
/// context, msgid and msgid_plural.
pub fn encode(catalog: &Catalog) -> String {
    let mut out = String::new();

    for line in catalog.header_comments.lines() {
        out.push_str(line);
        out.push('\n');
    }
    write_field(&mut out, "msgid", "", false);
    write_field(&mut out, "msgstr", &catalog.mime_header.to_string(), true);

    for message in catalog.sorted_messages() {
        out.push('\n');
        write_message(&mut out, message);
    }

    out
}
