// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_tui::CommonResult;

use crate::{app::{FlowOutcome, ItemKind, Selector, ui_str},
            git::{GitInvoker, checkout, list_local_branches}};

/// The main function for `gbl` with no arguments. Listing the branches and the checkout
/// itself are both fatal on failure.
///
/// # Errors
///
/// Returns an error if:
/// - `git branch --list` fails
/// - The selection UI fails
/// - `git checkout` fails, in which case the error is git's raw output
pub async fn handle_checkout_command(
    git: &mut impl GitInvoker,
    selector: &mut impl Selector,
) -> CommonResult<FlowOutcome> {
    let branches = list_local_branches(git).await?;
    if branches.is_empty() {
        return Ok(FlowOutcome::NothingToChoose(ItemKind::Branch));
    }

    let maybe_user_choice = selector
        .select_one(ui_str::select_header::checkout_branch(), &branches)
        .await?;

    // Early return if the user did not select a branch.
    let Some(reference) = maybe_user_choice else {
        return Ok(FlowOutcome::NoSelection(ItemKind::Branch));
    };

    let output = checkout(git, &reference).await?;
    tracing::debug!(message = "Checked out", reference = %reference);

    Ok(FlowOutcome::CheckedOut { reference, output })
}

#[cfg(test)]
mod tests_checkout_command {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_fixtures::{ScriptedGit, ScriptedSelector};

    #[tokio::test]
    async fn test_checkout_selected_branch() {
        let mut git = ScriptedGit::default()
            .on_success("branch --list", "\"main\"\n\"dev\"\n")
            .on_success("checkout dev", "Switched to branch 'dev'\n");
        let mut selector = ScriptedSelector::picking(&[&["dev"]]);

        let outcome = handle_checkout_command(&mut git, &mut selector)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            FlowOutcome::CheckedOut {
                reference: "dev".into(),
                output: "Switched to branch 'dev'\n".into(),
            }
        );
        assert_eq!(
            selector.offered,
            vec![vec!["main".to_string(), "dev".to_string()]]
        );
        assert_eq!(git.calls().last().map(String::as_str), Some("checkout dev"));
    }

    #[tokio::test]
    async fn test_cancelled_selection_does_not_checkout() {
        let mut git = ScriptedGit::default().on_success("branch --list", "\"main\"\n");
        let mut selector = ScriptedSelector::default();

        let outcome = handle_checkout_command(&mut git, &mut selector)
            .await
            .unwrap();

        assert_eq!(outcome, FlowOutcome::NoSelection(ItemKind::Branch));
        assert_eq!(git.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_checkout_failure_is_fatal_and_keeps_raw_text() {
        let raw = "error: Your local changes to the following files would be overwritten by checkout:\n\tsrc/lib.rs\n";
        let mut git = ScriptedGit::default()
            .on_success("branch --list", "\"main\"\n\"dev\"\n")
            .on_failure("checkout dev", raw);
        let mut selector = ScriptedSelector::picking(&[&["dev"]]);

        let report = handle_checkout_command(&mut git, &mut selector)
            .await
            .unwrap_err();

        assert_eq!(report.to_string(), raw);
    }

    #[tokio::test]
    async fn test_branch_list_failure_is_fatal() {
        let mut git =
            ScriptedGit::default().on_failure("branch --list", "fatal: bad config\n");
        let mut selector = ScriptedSelector::picking(&[&["dev"]]);

        assert!(handle_checkout_command(&mut git, &mut selector).await.is_err());
        assert!(selector.offered.is_empty());
    }

    #[tokio::test]
    async fn test_no_branches() {
        let mut git = ScriptedGit::default().on_success("branch --list", "");
        let mut selector = ScriptedSelector::default();

        let outcome = handle_checkout_command(&mut git, &mut selector)
            .await
            .unwrap();

        assert_eq!(outcome, FlowOutcome::NothingToChoose(ItemKind::Branch));
        assert!(selector.offered.is_empty());
    }
}
