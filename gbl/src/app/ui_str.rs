// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::Report;
use r3bl_tui::{InlineString, inline_string};

use super::{BulkAction, ItemKind};
use crate::{common::fmt, git::DeleteMode};

/// The raw error text goes last and uncolored, it is usually git's own output.
#[must_use]
pub fn unrecoverable_error_msg(report: &Report) -> InlineString {
    inline_string!(
        "{a}{b}\n{c}",
        a = fmt::error("❌ Could not run gbl due to the following problem"),
        b = fmt::colon(),
        c = report
    )
}

#[must_use]
pub fn not_a_repository_msg() -> InlineString {
    inline_string!(
        "{a}{b} {c}",
        a = fmt::normal("Not a git repository"),
        b = fmt::colon(),
        c = fmt::normal("run gbl from inside a git working tree.")
    )
}

#[must_use]
pub fn using_config_file_msg(path: &Path) -> InlineString {
    inline_string!("Using config file: {}", path.display())
}

#[must_use]
pub fn nothing_to_choose_msg(kind: ItemKind) -> InlineString {
    let text = match kind {
        ItemKind::Branch => "There are no local branches to choose from",
        ItemKind::File => "There are no files to choose from",
    };
    inline_string!("{a}{b}", a = fmt::normal(text), b = fmt::period())
}

#[must_use]
pub fn no_selection_msg(kind: ItemKind) -> InlineString {
    let text = match kind {
        ItemKind::Branch => "No branches selected",
        ItemKind::File => "No files selected",
    };
    inline_string!("{a}{b}", a = fmt::normal(text), b = fmt::period())
}

pub mod select_header {
    use super::DeleteMode;

    #[must_use]
    pub fn checkout_branch() -> &'static str { "Select a branch to check out:" }

    #[must_use]
    pub fn delete_branches(mode: DeleteMode) -> &'static str {
        match mode {
            DeleteMode::Safe => "Select branches to delete:",
            DeleteMode::Force => "Select branches to force delete:",
        }
    }

    #[must_use]
    pub fn stage_files() -> &'static str { "Select files to stage:" }

    #[must_use]
    pub fn unstage_files() -> &'static str { "Select files to unstage:" }
}

fn past_tense(action: BulkAction) -> &'static str {
    match action {
        BulkAction::Delete(DeleteMode::Safe) => "deleted",
        BulkAction::Delete(DeleteMode::Force) => "force deleted",
        BulkAction::Stage => "staged",
        BulkAction::Unstage => "unstaged",
    }
}

#[must_use]
pub fn item_succeeded_msg(action: BulkAction, item: &str) -> InlineString {
    inline_string!(
        "{mark} {a} {b}{c}",
        mark = fmt::SUCCESS_MARK,
        a = fmt::item(item),
        b = fmt::normal(past_tense(action)),
        c = fmt::period()
    )
}

#[must_use]
pub fn item_failed_msg(action: BulkAction, item: &str) -> InlineString {
    inline_string!(
        "{mark} {a} {b} {c}{d}",
        mark = fmt::FAILURE_MARK,
        a = fmt::item_failed(item),
        b = fmt::error("was not"),
        c = fmt::error(past_tense(action)),
        d = fmt::period()
    )
}
