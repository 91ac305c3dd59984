// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The fixed catalogue of git operations. Each one builds a fixed argument vector, runs
//! it through a [`GitInvoker`], and either returns the normalized output (list queries)
//! or the raw combined text (mutations). Any non-success becomes a [`GitError`] holding
//! the raw combined text.

use super::{GitError, GitInvoker, LineList, RawCommandResult, normalize};

/// This is a type alias for the result of a git operation.
pub type GitResult<T> = Result<T, GitError>;

/// The format string is handed to git as one argv element including the literal quotes,
/// so every output line comes back quoted. [`normalize`] strips them.
pub const BRANCH_FORMAT_ARG: &str = "--format=\"%(refname:short)\"";

/// `git branch -d` refuses to delete a branch that isn't merged, `-D` doesn't care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMode {
    #[default]
    Safe,
    Force,
}

impl DeleteMode {
    #[must_use]
    pub fn as_flag(self) -> &'static str {
        match self {
            DeleteMode::Safe => "-d",
            DeleteMode::Force => "-D",
        }
    }
}

fn into_lines(raw: RawCommandResult) -> GitResult<LineList> {
    if raw.succeeded {
        Ok(normalize(&raw.bytes))
    } else {
        Err(GitError::new(raw.text()))
    }
}

fn into_text(raw: RawCommandResult) -> GitResult<String> {
    let text = raw.text();
    if raw.succeeded {
        Ok(text)
    } else {
        Err(GitError::new(text))
    }
}

/// Appends the variadic `paths` after a fixed prefix.
fn with_paths<'a>(prefix: &[&'a str], paths: &'a [String]) -> Vec<&'a str> {
    let mut acc = Vec::with_capacity(prefix.len() + paths.len());
    acc.extend_from_slice(prefix);
    acc.extend(paths.iter().map(String::as_str));
    acc
}

/// Short names of the local branches, in git's order (alphabetical).
///
/// # Errors
///
/// Returns the raw git output if `git branch` fails.
pub async fn list_local_branches(git: &mut impl GitInvoker) -> GitResult<LineList> {
    into_lines(git.invoke(&["branch", "--list", BRANCH_FORMAT_ARG]).await)
}

/// # Errors
///
/// Returns the raw git output if the branch can't be deleted (eg: not merged in
/// [`DeleteMode::Safe`], currently checked out, or does not exist).
pub async fn delete_branch(
    git: &mut impl GitInvoker,
    branch_name: &str,
    mode: DeleteMode,
) -> GitResult<String> {
    into_text(git.invoke(&["branch", mode.as_flag(), branch_name]).await)
}

/// `reference` is any branch or commit-ish.
///
/// # Errors
///
/// Returns the raw git output if the checkout fails.
pub async fn checkout(git: &mut impl GitInvoker, reference: &str) -> GitResult<String> {
    into_text(git.invoke(&["checkout", reference]).await)
}

/// Tracked files that differ from the index.
///
/// # Errors
///
/// Returns the raw git output on failure.
pub async fn list_modified_files(git: &mut impl GitInvoker) -> GitResult<LineList> {
    into_lines(git.invoke(&["diff", "--name-only"]).await)
}

/// Modified tracked files plus untracked files that aren't ignored. These are the
/// candidates for staging.
///
/// # Errors
///
/// Returns the raw git output on failure.
pub async fn list_changed_files(git: &mut impl GitInvoker) -> GitResult<LineList> {
    into_lines(
        git.invoke(&["ls-files", "--others", "--modified", "--exclude-standard"])
            .await,
    )
}

/// # Errors
///
/// Returns the raw git output on failure.
pub async fn list_untracked_files(git: &mut impl GitInvoker) -> GitResult<LineList> {
    into_lines(
        git.invoke(&["ls-files", "--others", "--exclude-standard"])
            .await,
    )
}

/// # Errors
///
/// Returns the raw git output on failure.
pub async fn list_staged_files(git: &mut impl GitInvoker) -> GitResult<LineList> {
    into_lines(git.invoke(&["diff", "--staged", "--name-only"]).await)
}

/// `paths` go after `--`, so a file named like an option is still a path.
///
/// # Errors
///
/// Returns the raw git output if `git add` fails for any of the `paths`.
pub async fn stage_files(
    git: &mut impl GitInvoker,
    paths: &[String],
) -> GitResult<String> {
    into_text(git.invoke(&with_paths(&["add", "--"], paths)).await)
}

/// Removes `paths` from the index without touching the working tree.
///
/// # Errors
///
/// Returns the raw git output if `git restore --staged` fails for any of the `paths`.
pub async fn unstage_files(
    git: &mut impl GitInvoker,
    paths: &[String],
) -> GitResult<String> {
    let args = with_paths(&["restore", "--staged", "--"], paths);
    into_text(git.invoke(&args).await)
}
