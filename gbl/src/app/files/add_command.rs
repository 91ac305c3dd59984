// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_tui::CommonResult;

use crate::{app::{AddScope, BulkAction, FlowOutcome, ItemKind, Selector, select_and_apply,
                  ui_str},
            git::{GitInvoker, GitResult, LineList, list_changed_files,
                  list_modified_files, list_untracked_files}};

async fn list_candidates(
    git: &mut impl GitInvoker,
    scope: AddScope,
) -> GitResult<LineList> {
    match scope {
        AddScope::Changed => list_changed_files(git).await,
        AddScope::TrackedOnly => list_modified_files(git).await,
        AddScope::UntrackedOnly => list_untracked_files(git).await,
    }
}

/// The main function for `gbl add`. Stages each selected file with its own `git add`.
///
/// # Errors
///
/// Returns an error if listing the candidate files or the selection UI fails.
pub async fn handle_add_command(
    git: &mut impl GitInvoker,
    selector: &mut impl Selector,
    scope: AddScope,
) -> CommonResult<FlowOutcome> {
    let files = list_candidates(git, scope).await?;

    select_and_apply(
        git,
        selector,
        ui_str::select_header::stage_files(),
        ItemKind::File,
        BulkAction::Stage,
        &files,
    )
    .await
}
