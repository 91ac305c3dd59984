// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::slice;

use r3bl_tui::CommonResult;

use super::{BulkAction, BulkReport, FlowOutcome, ItemKind, ItemOutcome, Selector};
use crate::git::{GitInvoker, delete_branch, stage_files, unstage_files};

/// Applies `action` to each item in `items`, one git invocation per item, in order. A
/// failed item is recorded and the loop moves on to the next one.
pub async fn apply_to_each(
    git: &mut impl GitInvoker,
    action: BulkAction,
    items: Vec<String>,
) -> BulkReport {
    let mut outcomes = Vec::with_capacity(items.len());

    for item in items {
        let result = match action {
            BulkAction::Delete(mode) => delete_branch(git, &item, mode).await,
            BulkAction::Stage => stage_files(git, slice::from_ref(&item)).await,
            BulkAction::Unstage => unstage_files(git, slice::from_ref(&item)).await,
        };

        if let Err(ref error) = result {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "Bulk action failed for item",
                action = ?action,
                item = %item,
                error = %error
            );
        }

        outcomes.push(ItemOutcome { item, result });
    }

    BulkReport { action, outcomes }
}

/// The shared shape of the delete, stage and unstage flows: offer `candidates`, then
/// apply `action` to whatever the user picked.
///
/// # Errors
///
/// Returns an error if the selection UI fails.
pub async fn select_and_apply(
    git: &mut impl GitInvoker,
    selector: &mut impl Selector,
    header: &str,
    kind: ItemKind,
    action: BulkAction,
    candidates: &[String],
) -> CommonResult<FlowOutcome> {
    if candidates.is_empty() {
        return Ok(FlowOutcome::NothingToChoose(kind));
    }

    let selected = selector.select_many(header, candidates).await?;
    if selected.is_empty() {
        return Ok(FlowOutcome::NoSelection(kind));
    }

    tracing::debug!(message = "Selected items", action = ?action, items = ?selected);

    Ok(FlowOutcome::Bulk(apply_to_each(git, action, selected).await))
}
