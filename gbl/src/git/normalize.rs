// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Ordered lines of git output. Every element is non-empty, has no leading or trailing
/// whitespace, and contains no `"` character. Order is git's own.
pub type LineList = Vec<String>;

const QUOTE: char = '"';

/// Turns the raw bytes of a git subcommand into a [`LineList`].
///
/// Here's output from `git branch --list --format="%(refname:short)"` (the quotes are
/// part of the format string, so git echoes them back):
///
/// ```text
/// "main"
/// "dev"
/// ""
/// ```
///
/// Which becomes `["main", "dev"]`. A line is kept only if something is left after the
/// quotes are removed and the ends are trimmed; internal whitespace is untouched. Total:
/// no input is an error, empty input gives an empty list.
#[must_use]
pub fn normalize(raw: &[u8]) -> LineList {
    let text = String::from_utf8_lossy(raw);

    let mut acc = LineList::with_capacity(/* size hint */ text.lines().count());

    for segment in text.split('\n') {
        let line = segment.replace(QUOTE, "");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        acc.push(line.to_owned());
    }

    acc
}
