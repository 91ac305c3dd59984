// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use super::{AddScopeOption, CLIArg, CLICommand};
use crate::{common::GblConfig, git::DeleteMode};

/// Which candidate list the stage flow offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddScope {
    /// Modified tracked files and untracked files.
    #[default]
    Changed,
    TrackedOnly,
    UntrackedOnly,
}

impl From<&AddScopeOption> for AddScope {
    fn from(option: &AddScopeOption) -> Self {
        match (option.tracked_only, option.untracked_only) {
            (true, _) => AddScope::TrackedOnly,
            (_, true) => AddScope::UntrackedOnly,
            _ => AddScope::Changed,
        }
    }
}

/// The top level action, decided once at startup from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Checkout,
    Delete(DeleteMode),
    Add(AddScope),
    Remove,
}

impl From<&CLIArg> for Action {
    fn from(cli_arg: &CLIArg) -> Self {
        match &cli_arg.maybe_command {
            Some(CLICommand::Add { scope }) => Action::Add(scope.into()),
            Some(CLICommand::Remove) => Action::Remove,
            None if cli_arg.branch_options.force_delete => {
                Action::Delete(DeleteMode::Force)
            }
            None if cli_arg.branch_options.delete => Action::Delete(DeleteMode::Safe),
            None => Action::Checkout,
        }
    }
}

/// Everything a flow needs to know about how it was invoked. Built once and passed down
/// explicitly; nothing reads process wide flags after this exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub action: Action,
    /// Where the repository precondition check starts from.
    pub working_dir: PathBuf,
    pub config: GblConfig,
}

impl RunOptions {
    pub fn new(cli_arg: &CLIArg, working_dir: PathBuf, config: GblConfig) -> Self {
        Self {
            action: cli_arg.into(),
            working_dir,
            config,
        }
    }
}
