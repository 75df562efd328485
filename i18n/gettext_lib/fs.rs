//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! File system access used when binding domains
//!
//! `TranslationTable` only needs two operations: listing the locale
//! directories under a domain path and reading a catalog file. Both go
//! through the `FileSystem` trait so that tables can be backed by memory.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only view of a directory tree
pub trait FileSystem: Send + Sync {
    /// Names of the immediate subdirectories of `dir`
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Full contents of the file at `path`
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The host operating system's file system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// In-memory file tree keyed by path
///
/// Directories exist implicitly: a directory is any proper prefix of an
/// inserted file path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), data.into());
    }
}

impl FileSystem for MemoryFileSystem {
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut found = false;
        let mut names = Vec::new();

        for path in self.files.keys() {
            let Ok(rest) = path.strip_prefix(dir) else {
                continue;
            };
            found = true;

            let mut components = rest.components();
            let first = components.next();
            // a file directly inside `dir` is not a subdirectory
            if components.next().is_none() {
                continue;
            }
            if let Some(name) = first.and_then(|c| c.as_os_str().to_str()) {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }

        if !found {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such directory", dir.display()),
            ));
        }
        Ok(names)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no such file", path.display()),
            )
        })
    }
}
