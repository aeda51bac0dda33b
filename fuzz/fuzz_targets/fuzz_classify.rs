// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use autocatalog::inference::classifier::{classify, derive_title, placeholder_url};

#[derive(Arbitrary, Debug)]
struct Input {
    file_name: String,
    extension: String,
    entry_names: Option<Vec<String>>,
}

fuzz_target!(|input: Input| {
    let title = derive_title(&input.file_name);
    assert!(!title.is_empty());

    let classification = classify(&title, &input.extension, input.entry_names.as_deref());
    assert!(!classification.description.is_empty());

    let url = placeholder_url("https://img.example", &title);
    assert!(!url.contains(' '));
});
