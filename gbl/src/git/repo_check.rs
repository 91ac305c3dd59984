// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

const DOT_GIT: &str = ".git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoLocation {
    /// The directory that contains the `.git` entry.
    Inside(PathBuf),
    NotARepository,
}

/// Walks from `start_dir` up to the filesystem root looking for a `.git` entry. A
/// directory is the usual case; a file shows up in linked worktrees and submodules.
///
/// This never runs git, so it is safe to call before anything else.
#[must_use]
pub fn locate_repository(start_dir: &Path) -> RepoLocation {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(DOT_GIT);
        if candidate.is_dir() || candidate.is_file() {
            tracing::debug!(message = "Found git repository", root = ?dir);
            return RepoLocation::Inside(dir.to_path_buf());
        }
    }
    RepoLocation::NotARepository
}
