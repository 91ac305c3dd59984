// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_tui::CommonResult;

use crate::{app::{BulkAction, FlowOutcome, ItemKind, Selector, select_and_apply, ui_str},
            git::{GitInvoker, list_staged_files}};

/// The main function for `gbl remove`. Unstages each selected file with its own
/// `git restore --staged`; the working tree copy is left alone.
///
/// # Errors
///
/// Returns an error if listing the staged files or the selection UI fails.
pub async fn handle_remove_command(
    git: &mut impl GitInvoker,
    selector: &mut impl Selector,
) -> CommonResult<FlowOutcome> {
    let files = list_staged_files(git).await?;

    select_and_apply(
        git,
        selector,
        ui_str::select_header::unstage_files(),
        ItemKind::File,
        BulkAction::Unstage,
        &files,
    )
    .await
}

#[cfg(test)]
mod tests_remove_command {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::{ScriptedGit, ScriptedSelector};

    #[tokio::test]
    async fn test_unstage_selected_files() {
        let mut git = ScriptedGit::default()
            .on_success("diff --staged --name-only", "Cargo.toml\nsrc/lib.rs\n");
        let mut selector = ScriptedSelector::picking(&[&["src/lib.rs"]]);

        let outcome = handle_remove_command(&mut git, &mut selector)
            .await
            .unwrap();

        assert_eq!(
            git.calls(),
            vec!["diff --staged --name-only", "restore --staged -- src/lib.rs"]
        );
        assert!(matches!(outcome, FlowOutcome::Bulk(ref report) if !report.has_failures()));
    }

    #[tokio::test]
    async fn test_nothing_staged() {
        let mut git = ScriptedGit::default().on_success("diff --staged --name-only", "");
        let mut selector = ScriptedSelector::default();

        let outcome = handle_remove_command(&mut git, &mut selector)
            .await
            .unwrap();

        assert_eq!(outcome, FlowOutcome::NothingToChoose(ItemKind::File));
        assert!(selector.offered.is_empty());
    }
}
