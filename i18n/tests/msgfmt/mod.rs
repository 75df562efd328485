//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::common::path_arg;
use gettext_catalog::gettext_lib::mo_file::{read_header, Endianness};
use gettext_catalog::Catalog;
use plib::testing::{run_test, run_test_with_checker, TestPlan};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE_PO: &str = r#"# Polish translation
msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"
"Language: pl\n"

msgid "Hello"
msgstr "Cześć"

#, fuzzy
msgid "Maybe"
msgstr "Może"

msgctxt "menu"
msgid "Quit"
msgstr "Zakończ"

msgid "%d file"
msgid_plural "%d files"
msgstr[0] "%d plik"
msgstr[1] "%d pliki"
msgstr[2] "%d plików"
"#;

/// Create a temporary .po file for testing
fn create_temp_po_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let po_path = temp_dir.path().join("test.po");
    fs::write(&po_path, content).unwrap();
    (temp_dir, po_path)
}

fn msgfmt_test(args: Vec<String>, expected_err: &str) {
    run_test(TestPlan {
        cmd: String::from("msgfmt"),
        args,
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::from(expected_err),
        expected_exit_code: 0,
    });
}

#[test]
fn test_msgfmt_compiles() {
    let (temp_dir, po_path) = create_temp_po_file(SAMPLE_PO);
    let mo_path = temp_dir.path().join("test.mo");

    msgfmt_test(
        vec![
            String::from("-o"),
            path_arg(&mo_path),
            path_arg(&po_path),
        ],
        "",
    );

    let data = fs::read(&mo_path).unwrap();
    // Magic number 0x950412de, little-endian
    assert_eq!(&data[..4], &[0xde, 0x12, 0x04, 0x95]);

    let catalog = Catalog::from_mo_bytes(&data).unwrap();
    assert_eq!(catalog.language(), Some("pl"));
    assert_eq!(catalog.gettext("Hello"), "Cześć");
    assert_eq!(catalog.pgettext("menu", "Quit"), "Zakończ");
    assert_eq!(catalog.ngettext("%d file", "%d files", 5), "%d plików");
}

#[test]
fn test_msgfmt_skips_fuzzy() {
    let (temp_dir, po_path) = create_temp_po_file(SAMPLE_PO);
    let mo_path = temp_dir.path().join("test.mo");

    msgfmt_test(
        vec![
            String::from("-o"),
            path_arg(&mo_path),
            path_arg(&po_path),
        ],
        "",
    );
    let catalog = Catalog::from_mo_bytes(&fs::read(&mo_path).unwrap()).unwrap();
    assert_eq!(catalog.gettext("Maybe"), "Maybe");
    assert_eq!(catalog.len(), 3);

    msgfmt_test(
        vec![
            String::from("-f"),
            String::from("-o"),
            path_arg(&mo_path),
            path_arg(&po_path),
        ],
        "",
    );
    let catalog = Catalog::from_mo_bytes(&fs::read(&mo_path).unwrap()).unwrap();
    assert_eq!(catalog.gettext("Maybe"), "Może");
}

#[test]
fn test_msgfmt_verbose() {
    let (temp_dir, po_path) = create_temp_po_file(SAMPLE_PO);
    let mo_path = temp_dir.path().join("test.mo");

    msgfmt_test(
        vec![
            String::from("-v"),
            String::from("-o"),
            path_arg(&mo_path),
            path_arg(&po_path),
        ],
        "3 translated messages.\n",
    );
}

#[test]
fn test_msgfmt_big_endian() {
    let (temp_dir, po_path) = create_temp_po_file(SAMPLE_PO);
    let mo_path = temp_dir.path().join("test.mo");

    msgfmt_test(
        vec![
            String::from("--big-endian"),
            String::from("-o"),
            path_arg(&mo_path),
            path_arg(&po_path),
        ],
        "",
    );

    let data = fs::read(&mo_path).unwrap();
    assert_eq!(&data[..4], &[0x95, 0x04, 0x12, 0xde]);
    let (header, endianness) = read_header(&data).unwrap();
    assert_eq!(endianness, Endianness::Big);
    // header entry plus three messages
    assert_eq!(header.nstrings, 4);

    let catalog = Catalog::from_mo_bytes(&data).unwrap();
    assert_eq!(catalog.gettext("Hello"), "Cześć");
}

#[test]
fn test_msgfmt_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.po");

    run_test_with_checker(
        TestPlan {
            cmd: String::from("msgfmt"),
            args: vec![
                String::from("-o"),
                path_arg(&temp_dir.path().join("out.mo")),
                path_arg(&missing),
            ],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 1,
        },
        |plan, output| {
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.starts_with("msgfmt: "));
            assert!(stderr.contains("missing.po"));
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
        },
    );
}

#[test]
fn test_msgfmt_syntax_error() {
    let (temp_dir, po_path) = create_temp_po_file("msgid \"a\"\nmsgstr \"b\"\nnonsense\n");

    run_test_with_checker(
        TestPlan {
            cmd: String::from("msgfmt"),
            args: vec![
                String::from("-o"),
                path_arg(&temp_dir.path().join("out.mo")),
                path_arg(&po_path),
            ],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 1,
        },
        |plan, output| {
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.contains("line 3"), "stderr: {}", stderr);
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
            assert!(!temp_dir.path().join("out.mo").exists());
        },
    );
}
