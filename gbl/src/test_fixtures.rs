// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scripted stand-ins for the two outside-world seams: the `git` process and the
//! interactive selection list.

use std::{collections::VecDeque,
          path::{Path, PathBuf}};

use r3bl_tui::CommonResult;

use crate::{app::Selector,
            git::{GitInvoker, RawCommandResult}};

/// Records every invocation (argv joined with spaces) and answers from a list of rules.
/// The rule with the longest matching prefix wins; no match means success with empty
/// output.
#[derive(Debug, Default)]
pub struct ScriptedGit {
    rules: Vec<(String, RawCommandResult)>,
    calls: Vec<String>,
    pub maybe_working_dir: Option<PathBuf>,
}

impl ScriptedGit {
    #[must_use]
    pub fn on_success(mut self, prefix: &str, output: &str) -> Self {
        self.rules
            .push((prefix.into(), RawCommandResult::success(output)));
        self
    }

    #[must_use]
    pub fn on_failure(mut self, prefix: &str, output: &str) -> Self {
        self.rules
            .push((prefix.into(), RawCommandResult::failure(output)));
        self
    }

    pub fn calls(&self) -> Vec<String> { self.calls.clone() }

    fn answer(&self, call: &str) -> RawCommandResult {
        self.rules
            .iter()
            .filter(|(prefix, _)| {
                call == prefix || call.starts_with(&format!("{prefix} "))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map_or_else(
                || RawCommandResult::success(""),
                |(_, result)| result.clone(),
            )
    }
}

impl GitInvoker for ScriptedGit {
    fn run_from(&mut self, dir: &Path) { self.maybe_working_dir = Some(dir.to_path_buf()); }

    async fn invoke(&mut self, args: &[&str]) -> RawCommandResult {
        let call = args.join(" ");
        let result = self.answer(&call);
        self.calls.push(call);
        result
    }
}

/// Hands back pre-recorded picks, one per prompt, and remembers what it was offered.
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    picks: VecDeque<Vec<String>>,
    pub offered: Vec<Vec<String>>,
}

impl ScriptedSelector {
    pub fn picking(picks: &[&[&str]]) -> Self {
        Self {
            picks: picks
                .iter()
                .map(|pick| pick.iter().map(ToString::to_string).collect())
                .collect(),
            offered: vec![],
        }
    }

    fn next_pick(&mut self, items: &[String]) -> Vec<String> {
        self.offered.push(items.to_vec());
        self.picks.pop_front().unwrap_or_default()
    }
}

impl Selector for ScriptedSelector {
    async fn select_one(
        &mut self,
        _header: &str,
        items: &[String],
    ) -> CommonResult<Option<String>> {
        Ok(self.next_pick(items).into_iter().next())
    }

    async fn select_many(
        &mut self,
        _header: &str,
        items: &[String],
    ) -> CommonResult<Vec<String>> {
        Ok(self.next_pick(items))
    }
}
