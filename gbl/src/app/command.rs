// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_tui::CommonResult;

use super::{Action, FlowOutcome, RunOptions, Selector, handle_add_command,
            handle_checkout_command, handle_delete_command, handle_remove_command};
use crate::git::{GitInvoker, RepoLocation, locate_repository};

/// Entry point for every action. Checks that the working directory is inside a git
/// repository before anything talks to git, then hands off to the flow for
/// `options.action`.
///
/// git runs from the repository root. `git diff --name-only` lists root relative paths,
/// and `git add` / `git restore` must read them back the same way.
///
/// # Errors
///
/// Returns the fatal error of the flow that ran, see [`handle_checkout_command`],
/// [`handle_delete_command`], [`handle_add_command`] and [`handle_remove_command`].
pub async fn handle_command(
    options: &RunOptions,
    git: &mut impl GitInvoker,
    selector: &mut impl Selector,
) -> CommonResult<FlowOutcome> {
    let RepoLocation::Inside(repo_root) = locate_repository(&options.working_dir) else {
        tracing::debug!(message = "Not a git repository", working_dir = ?options.working_dir);
        return Ok(FlowOutcome::NotARepository);
    };

    tracing::debug!(message = "Running action", action = ?options.action, repo_root = ?repo_root);
    git.run_from(&repo_root);

    match options.action {
        Action::Checkout => handle_checkout_command(git, selector).await,
        Action::Delete(mode) => handle_delete_command(git, selector, mode).await,
        Action::Add(scope) => handle_add_command(git, selector, scope).await,
        Action::Remove => handle_remove_command(git, selector).await,
    }
}
