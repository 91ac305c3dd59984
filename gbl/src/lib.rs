// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gbl
//!
//! An interactive helper around the local `git` executable. Instead of typing branch or
//! file names, pick them from a list:
//!
//! | Command                                     | What it does                          |
//! |---------------------------------------------|---------------------------------------|
//! | `gbl`                                       | Check out one local branch            |
//! | `gbl -d` / `gbl --delete`                   | Delete local branches (`branch -d`)   |
//! | `gbl -D` / `gbl --force-delete`             | Force delete branches (`branch -D`)   |
//! | `gbl add [--tracked-only\|--untracked-only]` | Stage files                           |
//! | `gbl remove`                                | Unstage files (`restore --staged`)    |
//!
//! Global options: `-l` / `--enable-logging` writes a debug log to `gbl_log.txt` in the
//! user's cache folder, and `--config <PATH>` points at a YAML config file (default is
//! `$HOME/.gbl.yaml`).
//!
//! # Layout
//!
//! - [`git`]: runs `git` through the [`git::GitInvoker`] trait, normalizes its line
//!   oriented output, and exposes the fixed catalogue of operations.
//! - [`app`]: the CLI definition, the [`app::Selector`] trait, and one flow per action.
//!   Bulk flows (delete, add, remove) apply the action to each selected item on its
//!   own, so a failure on one item never stops the others.
//! - [`common`]: config file, logging, and terminal text styling.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod app;
pub mod common;
pub mod git;

#[cfg(test)]
mod test_fixtures;
