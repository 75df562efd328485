//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::common::{catalog, hello_tree, install};
use gettext_catalog::{DomainError, Message, TranslationTable};
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn test_hello_world_scenario() {
    let dir = hello_tree();
    let table = TranslationTable::new();

    table.bind_domain("hello", dir.path()).unwrap();
    table.set_text_domain("hello").unwrap();

    table.set_locale("zh_CN");
    assert_eq!(table.gettext("Hello, world!"), "你好, 世界!");

    table.set_locale("fr_FR");
    assert_eq!(table.gettext("Hello, world!"), "Hello, world!");

    table.set_locale("");
    assert_eq!(table.gettext("Hello, world!"), "Hello, world!");
}

#[test]
fn test_bound_locales_from_disk() {
    let dir = hello_tree();
    // a locale directory without catalogs and a stray file
    fs::create_dir_all(dir.path().join("ja").join("LC_MESSAGES")).unwrap();
    fs::write(dir.path().join("README"), "catalogs").unwrap();

    let table = TranslationTable::new();
    table.bind_domain("hello", dir.path()).unwrap();

    assert_eq!(table.bound_locales("hello"), vec!["pl", "zh_CN"]);
    assert_eq!(
        table.bound_domains(),
        vec![("hello".to_string(), dir.path().to_path_buf())]
    );
}

#[test]
fn test_malformed_catalog_skipped() {
    let dir = hello_tree();
    let broken = dir.path().join("ru").join("LC_MESSAGES");
    fs::create_dir_all(&broken).unwrap();
    fs::write(broken.join("hello.mo"), [0xde, 0x12, 0x04, 0x95, 0, 0]).unwrap();

    let table = TranslationTable::new();
    table.bind_domain("hello", dir.path()).unwrap();
    table.set_locale("ru");

    assert!(!table.bound_locales("hello").contains(&"ru".to_string()));
    assert_eq!(table.dgettext("hello", "Hello, world!"), "Hello, world!");
}

#[test]
fn test_bind_errors() {
    let dir = hello_tree();
    let table = TranslationTable::new();

    assert!(matches!(
        table.bind_domain("hello", dir.path().join("missing")),
        Err(DomainError::FileNotFound(_))
    ));

    table.bind_domain("hello", dir.path()).unwrap();
    assert!(matches!(
        table.bind_domain("hello", dir.path()),
        Err(DomainError::DomainExists(_))
    ));

    table.unbind_domain("hello").unwrap();
    assert!(matches!(
        table.unbind_domain("hello"),
        Err(DomainError::DomainNotFound(_))
    ));
}

#[test]
fn test_two_domains() {
    let dir = hello_tree();
    let other = TempDir::new().unwrap();
    install(
        other.path(),
        "zh_CN",
        "tools.po",
        &catalog("zh_CN", vec![Message::new("", "Goodbye", "拜拜")]),
    );

    let table = TranslationTable::new();
    table.bind_domain("hello", dir.path()).unwrap();
    table.bind_domain("tools", other.path()).unwrap();
    table.set_locale("zh_CN");
    table.set_text_domain("tools").unwrap();

    assert_eq!(table.gettext("Goodbye"), "拜拜");
    assert_eq!(table.dgettext("hello", "Goodbye"), "再见");
    assert_eq!(table.dpgettext("hello", "menu", "Open"), "打开");
}

#[test]
fn test_concurrent_lookups() {
    let dir = hello_tree();
    let table = Arc::new(TranslationTable::new());
    table.bind_domain("hello", dir.path()).unwrap();
    table.set_text_domain("hello").unwrap();
    table.set_locale("pl");

    let handles: Vec<_> = (0..8u64)
        .map(|n| {
            let table = Arc::clone(&table);
            thread::spawn(move || table.ngettext("%d apple", "%d apples", n))
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[1], "%d jabłko");
    assert_eq!(results[2], "%d jabłka");
    assert_eq!(results[5], "%d jabłek");
}
