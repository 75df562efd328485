//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! GNU .mo file format reader and writer
//!
//! The .mo (Machine Object) file format is the binary format produced by
//! `msgfmt`. Layout, in the byte order given by the magic number:
//!
//! ```text
//! offset  0: u32 magic
//! offset  4: u16 major version, u16 minor version
//! offset  8: u32 number of strings N
//! offset 12: u32 offset of the msgid descriptor table
//! offset 16: u32 offset of the msgstr descriptor table
//! offset 20: u32 hash table size
//! offset 24: u32 hash table offset
//! ```
//!
//! Each descriptor table holds N (length, offset) pairs pointing at the raw
//! string bytes. A msgid is `msgctxt EOT msgid [NUL msgid_plural]`, a msgstr
//! is either the translation or the plural translations joined by NUL. The
//! hash table is not needed for lookup; it is ignored on read and written
//! empty.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use thiserror::Error;

use crate::gettext_lib::catalog::{Catalog, Message, MimeHeader, EOT_SEPARATOR, NUL_SEPARATOR};

/// Magic number for little-endian .mo files
pub const MO_MAGIC_LE: u32 = 0x950412de;

/// Magic number for big-endian .mo files, as read in little-endian order
pub const MO_MAGIC_BE: u32 = 0xde120495;

/// Size of the fixed header in bytes
pub const MO_HEADER_SIZE: usize = 28;

/// Size of a (length, offset) string descriptor in bytes
const DESCRIPTOR_SIZE: usize = 8;

/// Error type for .mo file operations
#[derive(Debug, Error)]
pub enum MoError {
    /// Bad magic number or unsupported version
    #[error("invalid .mo format: {0}")]
    InvalidFormat(String),
    /// A read ran past the end of the data
    #[error("truncated .mo data: need {wanted} bytes at offset {offset}, data is {len} bytes")]
    Truncated {
        offset: usize,
        wanted: usize,
        len: usize,
    },
    /// String bytes are not valid UTF-8
    #[error("invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },
}

/// Byte order of an encoded .mo file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

/// Header of a .mo file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoHeader {
    pub major_version: u16,
    pub minor_version: u16,
    /// Number of strings
    pub nstrings: u32,
    /// Offset of table with original strings
    pub orig_tab_offset: u32,
    /// Offset of table with translation strings
    pub trans_tab_offset: u32,
    /// Size of hashing table
    pub hash_tab_size: u32,
    /// Offset of hashing table
    pub hash_tab_offset: u32,
}

/// Bounds-checked view over .mo data in one byte order
struct MoReader<'a, B> {
    data: &'a [u8],
    order: std::marker::PhantomData<B>,
}

impl<'a, B: ByteOrder> MoReader<'a, B> {
    fn new(data: &'a [u8]) -> Self {
        MoReader {
            data,
            order: std::marker::PhantomData,
        }
    }

    fn bytes(&self, offset: usize, wanted: usize) -> Result<&'a [u8], MoError> {
        offset
            .checked_add(wanted)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(MoError::Truncated {
                offset,
                wanted,
                len: self.data.len(),
            })
    }

    fn u16_at(&self, offset: usize) -> Result<u16, MoError> {
        Ok(B::read_u16(self.bytes(offset, 2)?))
    }

    fn u32_at(&self, offset: usize) -> Result<u32, MoError> {
        Ok(B::read_u32(self.bytes(offset, 4)?))
    }

    fn header(&self) -> Result<MoHeader, MoError> {
        Ok(MoHeader {
            major_version: self.u16_at(4)?,
            minor_version: self.u16_at(6)?,
            nstrings: self.u32_at(8)?,
            orig_tab_offset: self.u32_at(12)?,
            trans_tab_offset: self.u32_at(16)?,
            hash_tab_size: self.u32_at(20)?,
            hash_tab_offset: self.u32_at(24)?,
        })
    }

    /// Read the string described by entry `index` of the table at `table`
    fn string(&self, table: u32, index: usize) -> Result<String, MoError> {
        let desc = (table as usize)
            .checked_add(index * DESCRIPTOR_SIZE)
            .ok_or(MoError::Truncated {
                offset: table as usize,
                wanted: DESCRIPTOR_SIZE,
                len: self.data.len(),
            })?;
        let length = self.u32_at(desc)? as usize;
        let offset = self.u32_at(desc + 4)? as usize;
        let raw = self.bytes(offset, length)?;

        String::from_utf8(raw.to_vec()).map_err(|_| MoError::InvalidUtf8 { offset })
    }
}

/// Read the header of a .mo file, detecting its byte order
pub fn read_header(data: &[u8]) -> Result<(MoHeader, Endianness), MoError> {
    if data.len() < MO_HEADER_SIZE {
        return Err(MoError::Truncated {
            offset: 0,
            wanted: MO_HEADER_SIZE,
            len: data.len(),
        });
    }

    let endianness = match LittleEndian::read_u32(&data[0..4]) {
        MO_MAGIC_LE => Endianness::Little,
        MO_MAGIC_BE => Endianness::Big,
        magic => {
            return Err(MoError::InvalidFormat(format!(
                "bad magic number 0x{:08x}",
                magic
            )))
        }
    };

    let header = match endianness {
        Endianness::Little => MoReader::<LittleEndian>::new(data).header()?,
        Endianness::Big => MoReader::<BigEndian>::new(data).header()?,
    };

    if header.major_version > 1 || header.minor_version > 1 {
        return Err(MoError::InvalidFormat(format!(
            "unsupported version {}.{}",
            header.major_version, header.minor_version
        )));
    }

    Ok((header, endianness))
}

/// Decode .mo data into a catalog
pub fn decode(data: &[u8]) -> Result<Catalog, MoError> {
    let (header, endianness) = read_header(data)?;
    match endianness {
        Endianness::Little => decode_entries(&MoReader::<LittleEndian>::new(data), &header),
        Endianness::Big => decode_entries(&MoReader::<BigEndian>::new(data), &header),
    }
}

fn decode_entries<B: ByteOrder>(
    reader: &MoReader<B>,
    header: &MoHeader,
) -> Result<Catalog, MoError> {
    let mut mime_header = MimeHeader::default();
    let mut messages = Vec::new();

    for i in 0..header.nstrings as usize {
        let msgid = reader.string(header.orig_tab_offset, i)?;
        let msgstr = reader.string(header.trans_tab_offset, i)?;

        if msgid.is_empty() {
            mime_header = MimeHeader::parse(&msgstr);
        } else {
            messages.push(split_message(&msgid, msgstr));
        }
    }

    let mut catalog = Catalog::with_header(mime_header);
    for message in messages {
        catalog.insert(message);
    }
    Ok(catalog)
}

/// Split a raw msgid/msgstr pair into its context and plural parts
fn split_message(msgid: &str, msgstr: String) -> Message {
    let (context, rest) = msgid.split_once(EOT_SEPARATOR).unwrap_or(("", msgid));

    match rest.split_once(NUL_SEPARATOR) {
        Some((id, id_plural)) => Message {
            context: context.to_string(),
            id: id.to_string(),
            id_plural: id_plural.to_string(),
            // an untranslated plural is encoded as an empty msgstr
            str_plural: if msgstr.is_empty() {
                Vec::new()
            } else {
                msgstr.split(NUL_SEPARATOR).map(|s| s.to_string()).collect()
            },
            ..Default::default()
        },
        None => Message {
            context: context.to_string(),
            id: rest.to_string(),
            str: msgstr,
            ..Default::default()
        },
    }
}

fn encode_msgid(message: &Message) -> String {
    let mut msgid = String::new();
    if !message.context.is_empty() {
        msgid.push_str(&message.context);
        msgid.push(EOT_SEPARATOR);
    }
    msgid.push_str(&message.id);
    if message.is_plural() {
        msgid.push(NUL_SEPARATOR);
        msgid.push_str(&message.id_plural);
    }
    msgid
}

fn encode_msgstr(message: &Message) -> String {
    if message.is_plural() {
        message.str_plural.join("\0")
    } else {
        message.str.clone()
    }
}

fn put_u32<B: ByteOrder>(out: &mut Vec<u8>, value: u32) {
    let mut buf = [0u8; 4];
    B::write_u32(&mut buf, value);
    out.extend_from_slice(&buf);
}

fn put_u16<B: ByteOrder>(out: &mut Vec<u8>, value: u16) {
    let mut buf = [0u8; 2];
    B::write_u16(&mut buf, value);
    out.extend_from_slice(&buf);
}

/// Encode a catalog as little-endian .mo data
pub fn encode(catalog: &Catalog) -> Vec<u8> {
    encode_with(catalog, Endianness::Little)
}

/// Encode a catalog as .mo data in the given byte order
///
/// The header message comes first, followed by all other messages sorted by
/// context, msgid and msgid_plural.
pub fn encode_with(catalog: &Catalog, endianness: Endianness) -> Vec<u8> {
    match endianness {
        Endianness::Little => encode_ordered::<LittleEndian>(catalog),
        Endianness::Big => encode_ordered::<BigEndian>(catalog),
    }
}

fn encode_ordered<B: ByteOrder>(catalog: &Catalog) -> Vec<u8> {
    let mut entries = vec![(String::new(), catalog.mime_header.to_string())];
    entries.extend(
        catalog
            .sorted_messages()
            .into_iter()
            .map(|m| (encode_msgid(m), encode_msgstr(m))),
    );

    let nstrings = entries.len();
    let orig_tab_offset = MO_HEADER_SIZE;
    let trans_tab_offset = orig_tab_offset + nstrings * DESCRIPTOR_SIZE;
    let strings_offset = trans_tab_offset + nstrings * DESCRIPTOR_SIZE;

    // String bodies are laid out first so that every descriptor offset is known
    let mut strings = Vec::new();
    let mut orig_descriptors = Vec::with_capacity(nstrings);
    for (msgid, _) in &entries {
        orig_descriptors.push((msgid.len(), strings_offset + strings.len()));
        strings.extend_from_slice(msgid.as_bytes());
        strings.push(0);
    }
    let mut trans_descriptors = Vec::with_capacity(nstrings);
    for (_, msgstr) in &entries {
        trans_descriptors.push((msgstr.len(), strings_offset + strings.len()));
        strings.extend_from_slice(msgstr.as_bytes());
        strings.push(0);
    }

    let mut data = Vec::with_capacity(strings_offset + strings.len());
    put_u32::<B>(&mut data, MO_MAGIC_LE);
    put_u16::<B>(&mut data, 0);
    put_u16::<B>(&mut data, 0);
    put_u32::<B>(&mut data, nstrings as u32);
    put_u32::<B>(&mut data, orig_tab_offset as u32);
    put_u32::<B>(&mut data, trans_tab_offset as u32);
    put_u32::<B>(&mut data, 0);
    put_u32::<B>(&mut data, strings_offset as u32);

    for (length, offset) in orig_descriptors.iter().chain(trans_descriptors.iter()) {
        put_u32::<B>(&mut data, *length as u32);
        put_u32::<B>(&mut data, *offset as u32);
    }

    data.extend_from_slice(&strings);
    data
}
