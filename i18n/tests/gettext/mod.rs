//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::common::{hello_tree, path_arg};
use plib::testing::{run_test, run_test_with_env, TestPlan};

fn gettext_test(args: &[&str], expected_out: &str) {
    run_test(TestPlan {
        cmd: String::from("gettext"),
        args: args.iter().map(|s| s.to_string()).collect(),
        stdin_data: String::new(),
        expected_out: String::from(expected_out),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

/// Test gettext with no catalog - should echo the original message
#[test]
fn test_gettext_no_catalog() {
    run_test_with_env(
        TestPlan {
            cmd: String::from("gettext"),
            args: vec![String::from("Hello, World!")],
            stdin_data: String::new(),
            expected_out: String::from("Hello, World!\n"),
            expected_err: String::new(),
            expected_exit_code: 0,
        },
        &[
            ("TEXTDOMAIN", "nonexistent"),
            ("TEXTDOMAINDIR", "/nonexistent/locale"),
        ],
    );
}

#[test]
fn test_gettext_translates() {
    let dir = hello_tree();
    let root = path_arg(dir.path());
    gettext_test(
        &["-p", &root, "-d", "hello", "-l", "zh_CN", "Hello, world!"],
        "你好, 世界!\n",
    );
}

#[test]
fn test_gettext_unbound_locale() {
    let dir = hello_tree();
    let root = path_arg(dir.path());
    gettext_test(
        &["-p", &root, "-d", "hello", "-l", "fr_FR", "Hello, world!"],
        "Hello, world!\n",
    );
}

#[test]
fn test_gettext_po_catalog_and_fallback() {
    let dir = hello_tree();
    let root = path_arg(dir.path());
    gettext_test(
        &["-p", &root, "-d", "hello", "-l", "pl_PL.UTF-8", "Hello, world!"],
        "Witaj, świecie!\n",
    );
}

#[test]
fn test_gettext_multiple_msgids() {
    let dir = hello_tree();
    let root = path_arg(dir.path());
    gettext_test(
        &[
            "-p",
            &root,
            "-d",
            "hello",
            "-l",
            "zh_CN",
            "Hello, world!",
            "Goodbye",
            "Untranslated",
        ],
        "你好, 世界! 再见 Untranslated\n",
    );
}

#[test]
fn test_gettext_context() {
    let dir = hello_tree();
    let root = path_arg(dir.path());
    gettext_test(
        &["-p", &root, "-d", "hello", "-l", "zh_CN", "-c", "menu", "Open"],
        "打开\n",
    );
    gettext_test(
        &["-p", &root, "-d", "hello", "-l", "zh_CN", "Open"],
        "Open\n",
    );
}

/// Test gettext with -n flag (no newline)
#[test]
fn test_gettext_no_newline() {
    let dir = hello_tree();
    let root = path_arg(dir.path());
    gettext_test(
        &["-n", "-p", &root, "-d", "hello", "-l", "zh_CN", "Goodbye"],
        "再见",
    );
}

#[test]
fn test_gettext_environment() {
    let dir = hello_tree();
    let root = path_arg(dir.path());
    run_test_with_env(
        TestPlan {
            cmd: String::from("gettext"),
            args: vec![String::from("Hello, world!")],
            stdin_data: String::new(),
            expected_out: String::from("你好, 世界!\n"),
            expected_err: String::new(),
            expected_exit_code: 0,
        },
        &[
            ("TEXTDOMAIN", "hello"),
            ("TEXTDOMAINDIR", &root),
            ("LC_MESSAGES", "zh_CN.UTF-8"),
        ],
    );
}

#[test]
fn test_gettext_empty_locale() {
    let dir = hello_tree();
    let root = path_arg(dir.path());
    gettext_test(
        &["-p", &root, "-d", "hello", "-l", "", "Hello, world!"],
        "Hello, world!\n",
    );
}
