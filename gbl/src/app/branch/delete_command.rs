// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_tui::CommonResult;

use crate::{app::{BulkAction, FlowOutcome, ItemKind, Selector, select_and_apply, ui_str},
            git::{DeleteMode, GitInvoker, list_local_branches}};

/// The main function for `gbl -d` and `gbl -D`. Each selected branch is deleted with
/// its own `git branch` call, so one branch that can't be deleted doesn't stop the
/// rest.
///
/// # Errors
///
/// Returns an error if `git branch --list` or the selection UI fails.
pub async fn handle_delete_command(
    git: &mut impl GitInvoker,
    selector: &mut impl Selector,
    mode: DeleteMode,
) -> CommonResult<FlowOutcome> {
    let branches = list_local_branches(git).await?;

    select_and_apply(
        git,
        selector,
        ui_str::select_header::delete_branches(mode),
        ItemKind::Branch,
        BulkAction::Delete(mode),
        &branches,
    )
    .await
}
