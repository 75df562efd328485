//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! gettext-compatible message catalogs
//!
//! This module provides functionality for reading and writing GNU .mo files,
//! reading and writing .po files, selecting plural forms, and looking up
//! messages through a table of bound domains and locales.

pub mod catalog;
pub mod domain;
pub mod fs;
pub mod locale;
pub mod mo_file;
pub mod plural;
pub mod po_file;
