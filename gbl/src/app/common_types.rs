// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::ui_str;
use crate::{common::fmt,
            git::{DeleteMode, GitError, GitResult}};

/// What the candidate list holds. Only used to pick the right wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Branch,
    File,
}

/// The mutation a bulk flow applies to each selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Delete(DeleteMode),
    Stage,
    Unstage,
}

/// Result of applying a [`BulkAction`] to one item. `Ok` holds git's raw output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub item: String,
    pub result: GitResult<String>,
}

/// Every selected item with its own result, in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkReport {
    pub action: BulkAction,
    pub outcomes: Vec<ItemOutcome>,
}

impl BulkReport {
    pub fn failures(&self) -> impl Iterator<Item = (&str, &GitError)> {
        self.outcomes.iter().filter_map(|outcome| match &outcome.result {
            Ok(_) => None,
            Err(error) => Some((outcome.item.as_str(), error)),
        })
    }

    #[must_use]
    pub fn has_failures(&self) -> bool { self.failures().next().is_some() }
}

/// How a flow ended when it didn't end with a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Not inside a git working tree. No git command was run.
    NotARepository,
    /// The candidate list came back empty.
    NothingToChoose(ItemKind),
    /// The user picked nothing, or backed out.
    NoSelection(ItemKind),
    CheckedOut { reference: String, output: String },
    Bulk(BulkReport),
}

impl Display for FlowOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FlowOutcome::NotARepository => {
                writeln!(f, "{}", ui_str::not_a_repository_msg())
            }
            FlowOutcome::NothingToChoose(kind) => {
                writeln!(f, "{}", ui_str::nothing_to_choose_msg(*kind))
            }
            FlowOutcome::NoSelection(kind) => {
                writeln!(f, "{}", ui_str::no_selection_msg(*kind))
            }
            FlowOutcome::CheckedOut { output, .. } => {
                if output.trim().is_empty() {
                    Ok(())
                } else {
                    writeln!(f, "{}", fmt::git_output(output))
                }
            }
            FlowOutcome::Bulk(report) => {
                for outcome in &report.outcomes {
                    let line = match outcome.result {
                        Ok(_) => ui_str::item_succeeded_msg(report.action, &outcome.item),
                        Err(_) => ui_str::item_failed_msg(report.action, &outcome.item),
                    };
                    writeln!(f, "{line}")?;
                }
                for (_, error) in report.failures() {
                    writeln!(f, "\n{}", fmt::git_output(&error.message))?;
                }
                Ok(())
            }
        }
    }
}
