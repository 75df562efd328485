//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Runtime translation table
//!
//! A `TranslationTable` maps bound text domains to the catalogs found under
//! their directories, one per locale, and dispatches gettext-family lookups
//! to the catalog selected by the active locale and domain.
//!
//! Catalogs are discovered at bind time using the standard layout
//! `<path>/<locale>/LC_MESSAGES/<domain>.mo` (or `.po`). Lookups never fail:
//! a missing locale, domain or message yields the untranslated msgid.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};
use thiserror::Error;

use crate::gettext_lib::catalog::Catalog;
use crate::gettext_lib::fs::{FileSystem, OsFileSystem};
use crate::gettext_lib::locale::{default_locale, locale_variants};
use crate::gettext_lib::mo_file;
use crate::gettext_lib::po_file;

/// Error type for domain binding and selection
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("domain already bound: {0}")]
    DomainExists(String),
    #[error("domain not bound: {0}")]
    DomainNotFound(String),
    #[error("{}: no such file or directory", .0.display())]
    FileNotFound(PathBuf),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a locale's catalog could not be loaded
#[derive(Debug, Error)]
enum LoadError {
    #[error("no catalog file")]
    Missing,
    #[error("{}: {source}", path.display())]
    Mo {
        path: PathBuf,
        source: mo_file::MoError,
    },
    #[error("{}: {source}", path.display())]
    Po {
        path: PathBuf,
        source: po_file::PoError,
    },
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

#[derive(Default)]
struct TableState {
    locale: String,
    domain: String,
    domain_path: HashMap<String, PathBuf>,
    domain_locales: HashMap<String, Vec<String>>,
    catalogs: HashMap<(String, String), Catalog>,
}

impl TableState {
    /// Catalog for `domain` in the active locale or its closest fallback
    fn catalog(&self, domain: &str) -> Option<&Catalog> {
        locale_variants(&self.locale)
            .into_iter()
            .find_map(|locale| self.catalogs.get(&(domain.to_string(), locale)))
    }

    fn lookup(&self, domain: &str, context: &str, id: &str, id_plural: &str, n: u64) -> String {
        if self.locale.is_empty() {
            return id.to_string();
        }
        match self.catalog(domain) {
            Some(catalog) => catalog.resolve(context, id, id_plural, n).to_string(),
            None => id.to_string(),
        }
    }
}

/// Registry of bound domains and their per-locale catalogs
///
/// All state sits behind one mutex, so a table can be shared between
/// threads (for example in an `Arc`) and used through `&self`.
pub struct TranslationTable {
    state: Mutex<TableState>,
    fs: Box<dyn FileSystem>,
}

impl TranslationTable {
    /// Create a table with no locale, no domain and the host file system
    pub fn new() -> Self {
        Self::with_file_system(OsFileSystem)
    }

    /// Create a table whose locale is taken from `LC_MESSAGES` or `LANG`
    pub fn from_env() -> Self {
        let table = Self::new();
        table.set_locale(&default_locale());
        table
    }

    /// Create a table that reads catalogs through `fs`
    pub fn with_file_system(fs: impl FileSystem + 'static) -> Self {
        TranslationTable {
            state: Mutex::new(TableState::default()),
            fs: Box::new(fs),
        }
    }

    fn state(&self) -> MutexGuard<'_, TableState> {
        // state is never left half-updated, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Set the active locale and return it; "" disables translation
    pub fn set_locale(&self, locale: &str) -> String {
        let mut state = self.state();
        state.locale = locale.to_string();
        debug!("locale set to {:?}", state.locale);
        state.locale.clone()
    }

    pub fn locale(&self) -> String {
        self.state().locale.clone()
    }

    /// Select the domain used by the undecorated lookups
    ///
    /// The domain must be bound; "" clears the selection.
    pub fn set_text_domain(&self, domain: &str) -> Result<(), DomainError> {
        let mut state = self.state();
        if !domain.is_empty() && !state.domain_path.contains_key(domain) {
            return Err(DomainError::DomainNotFound(domain.to_string()));
        }
        state.domain = domain.to_string();
        Ok(())
    }

    pub fn text_domain(&self) -> String {
        self.state().domain.clone()
    }

    /// Load the catalogs of `domain` found under `path`
    ///
    /// Every subdirectory of `path` is treated as a locale. For each, the
    /// .mo file is tried before the .po file; a locale with neither, or with
    /// an unreadable or malformed file, is skipped. An empty `path` unbinds
    /// the domain instead.
    pub fn bind_domain(&self, domain: &str, path: impl AsRef<Path>) -> Result<(), DomainError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.unbind_domain(domain);
        }

        let mut state = self.state();
        if state.domain_path.contains_key(domain) {
            return Err(DomainError::DomainExists(domain.to_string()));
        }

        let locales = self.fs.list_dirs(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DomainError::FileNotFound(path.to_path_buf()),
            _ => DomainError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let mut loaded = 0;
        for locale in &locales {
            match self.load_catalog(domain, path, locale) {
                Ok(catalog) => {
                    debug!(
                        "loaded {} messages for domain {} locale {}",
                        catalog.len(),
                        domain,
                        locale
                    );
                    state
                        .catalogs
                        .insert((domain.to_string(), locale.clone()), catalog);
                    loaded += 1;
                }
                Err(LoadError::Missing) => {
                    debug!("no catalog for domain {} locale {}", domain, locale);
                }
                Err(e) => warn!("skipping locale {} of domain {}: {}", locale, domain, e),
            }
        }

        info!(
            "bound domain {} to {} ({} of {} locales loaded)",
            domain,
            path.display(),
            loaded,
            locales.len()
        );
        state.domain_path.insert(domain.to_string(), path.to_path_buf());
        state.domain_locales.insert(domain.to_string(), locales);
        Ok(())
    }

    /// Forget a bound domain and drop all of its catalogs
    pub fn unbind_domain(&self, domain: &str) -> Result<(), DomainError> {
        let mut state = self.state();
        if state.domain_path.remove(domain).is_none() {
            return Err(DomainError::DomainNotFound(domain.to_string()));
        }
        for locale in state.domain_locales.remove(domain).unwrap_or_default() {
            state.catalogs.remove(&(domain.to_string(), locale));
        }
        if state.domain == domain {
            state.domain.clear();
        }
        info!("unbound domain {}", domain);
        Ok(())
    }

    /// Bound domains and their paths, sorted by domain name
    pub fn bound_domains(&self) -> Vec<(String, PathBuf)> {
        let state = self.state();
        let mut domains: Vec<(String, PathBuf)> = state
            .domain_path
            .iter()
            .map(|(domain, path)| (domain.clone(), path.clone()))
            .collect();
        domains.sort();
        domains
    }

    /// Locales that have a loaded catalog for `domain`, sorted
    pub fn bound_locales(&self, domain: &str) -> Vec<String> {
        let state = self.state();
        let mut locales: Vec<String> = state
            .catalogs
            .keys()
            .filter(|(d, _)| d == domain)
            .map(|(_, locale)| locale.clone())
            .collect();
        locales.sort();
        locales
    }

    fn load_catalog(&self, domain: &str, path: &Path, locale: &str) -> Result<Catalog, LoadError> {
        let dir = path.join(locale).join("LC_MESSAGES");

        let mo_path = dir.join(format!("{}.mo", domain));
        let mo_error = match self.read_file(&mo_path) {
            Ok(Some(data)) => match mo_file::decode(&data) {
                Ok(catalog) => return Ok(catalog),
                Err(source) => Some(LoadError::Mo {
                    path: mo_path,
                    source,
                }),
            },
            Ok(None) => None,
            Err(e) => Some(e),
        };

        // an unreadable .mo does not hide a usable .po next to it
        let po_path = dir.join(format!("{}.po", domain));
        match self.read_file(&po_path)? {
            Some(data) => {
                if let Some(e) = &mo_error {
                    warn!("{}; falling back to {}", e, po_path.display());
                }
                po_file::decode_bytes(&data).map_err(|source| LoadError::Po {
                    path: po_path,
                    source,
                })
            }
            None => Err(mo_error.unwrap_or(LoadError::Missing)),
        }
    }

    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>, LoadError> {
        match self.fs.read(path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Translate `id` in the active domain
    pub fn gettext(&self, id: &str) -> String {
        self.pngettext("", id, "", 0)
    }

    /// Translate a plural message in the active domain
    pub fn ngettext(&self, id: &str, id_plural: &str, n: u64) -> String {
        self.pngettext("", id, id_plural, n)
    }

    /// Translate `id` with context in the active domain
    pub fn pgettext(&self, context: &str, id: &str) -> String {
        self.pngettext(context, id, "", 0)
    }

    /// Translate a plural message with context in the active domain
    pub fn pngettext(&self, context: &str, id: &str, id_plural: &str, n: u64) -> String {
        let state = self.state();
        state.lookup(&state.domain, context, id, id_plural, n)
    }

    /// Like `gettext`, but in `domain`
    pub fn dgettext(&self, domain: &str, id: &str) -> String {
        self.dpngettext(domain, "", id, "", 0)
    }

    /// Like `ngettext`, but in `domain`
    pub fn dngettext(&self, domain: &str, id: &str, id_plural: &str, n: u64) -> String {
        self.dpngettext(domain, "", id, id_plural, n)
    }

    /// Like `pgettext`, but in `domain`
    pub fn dpgettext(&self, domain: &str, context: &str, id: &str) -> String {
        self.dpngettext(domain, context, id, "", 0)
    }

    /// Like `pngettext`, but in `domain`
    pub fn dpngettext(
        &self,
        domain: &str,
        context: &str,
        id: &str,
        id_plural: &str,
        n: u64,
    ) -> String {
        self.state().lookup(domain, context, id, id_plural, n)
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::new()
    }
}
