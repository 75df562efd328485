//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! gettext-catalog library
//!
//! Message catalog support compatible with GNU gettext:
//! - .mo and .po decoding and encoding
//! - per-language plural forms
//! - domain/locale translation tables for gettext-style lookup

pub mod gettext_lib;

pub use gettext_lib::catalog::{Catalog, Message, MimeHeader};
pub use gettext_lib::domain::{DomainError, TranslationTable};
pub use gettext_lib::fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use gettext_lib::mo_file::MoError;
pub use gettext_lib::plural::PluralRule;
pub use gettext_lib::po_file::{Comments, PoError};
