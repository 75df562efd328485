//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use gettext_catalog::{Catalog, Message, MimeHeader};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn catalog(language: &str, messages: Vec<Message>) -> Catalog {
    let header = MimeHeader::parse(&format!(
        "Content-Type: text/plain; charset=UTF-8\nLanguage: {}\n",
        language
    ));
    let mut catalog = Catalog::with_header(header);
    for message in messages {
        catalog.insert(message);
    }
    catalog
}

/// Save `catalog` as `<root>/<locale>/LC_MESSAGES/<file_name>`
pub fn install(root: &Path, locale: &str, file_name: &str, catalog: &Catalog) {
    let dir = root.join(locale).join("LC_MESSAGES");
    fs::create_dir_all(&dir).unwrap();
    catalog.save(&dir.join(file_name)).unwrap();
}

/// Catalog tree for domain "hello" with a zh_CN .mo and a pl .po catalog
pub fn hello_tree() -> TempDir {
    let dir = TempDir::new().unwrap();

    let zh = catalog(
        "zh_CN",
        vec![
            Message::new("", "Hello, world!", "你好, 世界!"),
            Message::new("", "Goodbye", "再见"),
            Message::new("menu", "Open", "打开"),
            Message::plural("", "%d apple", "%d apples", &["%d 个苹果"]),
        ],
    );
    install(dir.path(), "zh_CN", "hello.mo", &zh);

    let pl = catalog(
        "pl",
        vec![
            Message::new("", "Hello, world!", "Witaj, świecie!"),
            Message::plural(
                "",
                "%d apple",
                "%d apples",
                &["%d jabłko", "%d jabłka", "%d jabłek"],
            ),
        ],
    );
    install(dir.path(), "pl", "hello.po", &pl);

    dir
}

pub fn path_arg(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}
