//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::common::{catalog, path_arg};
use gettext_catalog::{Catalog, Message};
use plib::testing::{run_test, TestPlan};
use std::fs;
use tempfile::TempDir;

fn sample() -> Catalog {
    catalog(
        "de",
        vec![
            Message::new("", "Hello", "Hallo"),
            Message::new("", "Two\nlines", "Zwei\nZeilen"),
            Message::new("button", "Save", "Speichern"),
            Message::plural("", "%d file", "%d files", &["%d Datei", "%d Dateien"]),
        ],
    )
}

#[test]
fn test_msgunfmt_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let mo_path = temp_dir.path().join("de.mo");
    let catalog = sample();
    catalog.save(&mo_path).unwrap();

    run_test(TestPlan {
        cmd: String::from("msgunfmt"),
        args: vec![path_arg(&mo_path)],
        stdin_data: String::new(),
        expected_out: catalog.to_po_string(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_msgunfmt_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let mo_path = temp_dir.path().join("de.mo");
    let po_path = temp_dir.path().join("de.po");
    sample().save(&mo_path).unwrap();

    run_test(TestPlan {
        cmd: String::from("msgunfmt"),
        args: vec![String::from("-o"), path_arg(&po_path), path_arg(&mo_path)],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });

    let decoded = Catalog::from_po_str(&fs::read_to_string(&po_path).unwrap()).unwrap();
    assert_eq!(decoded.len(), 4);
    assert_eq!(decoded.gettext("Two\nlines"), "Zwei\nZeilen");
    assert_eq!(decoded.ngettext("%d file", "%d files", 2), "%d Dateien");
    assert_eq!(decoded.language(), Some("de"));
}

#[test]
fn test_msgunfmt_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let mo_path = temp_dir.path().join("bad.mo");
    fs::write(&mo_path, b"this is not a catalog at all").unwrap();

    run_test(TestPlan {
        cmd: String::from("msgunfmt"),
        args: vec![path_arg(&mo_path)],
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: format!(
            "msgunfmt: {}: invalid .mo format: bad magic number 0x73696874\n",
            mo_path.display()
        ),
        expected_exit_code: 1,
    });
}
