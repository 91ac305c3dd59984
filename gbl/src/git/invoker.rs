// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::{Path, PathBuf},
          process::Stdio};

use tokio::process::Command;

pub const GIT_PROGRAM: &str = "git";

/// What came back from one `git` invocation. Lives only for the duration of one
/// operation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommandResult {
    /// Combined output: stdout followed by stderr.
    pub bytes: Vec<u8>,
    pub succeeded: bool,
}

impl RawCommandResult {
    pub fn success(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            succeeded: true,
        }
    }

    pub fn failure(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            succeeded: false,
        }
    }

    #[must_use]
    pub fn text(&self) -> String { String::from_utf8_lossy(&self.bytes).into_owned() }
}

/// Runs `git <args...>`. This is the only seam between the program and the outside
/// world on the git side, so flows are generic over it and tests drive them with a
/// scripted fake.
///
/// Implementations never fail: a process that can't be started is reported as a
/// [`RawCommandResult`] with `succeeded == false` and the OS error text as its bytes.
pub trait GitInvoker {
    /// Every later [`GitInvoker::invoke`] runs with `dir` as git's working directory.
    /// Paths passed to and listed by git are then relative to `dir`.
    fn run_from(&mut self, dir: &Path);

    fn invoke(
        &mut self,
        args: &[&str],
    ) -> impl std::future::Future<Output = RawCommandResult> + Send;
}

/// Spawns the real `git` executable found on the search path. stdin is not forwarded;
/// git never gets to prompt the user.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
    maybe_working_dir: Option<PathBuf>,
}

impl Default for SystemGit {
    fn default() -> Self {
        Self {
            program: GIT_PROGRAM.into(),
            maybe_working_dir: None,
        }
    }
}

impl SystemGit {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: GIT_PROGRAM.into(),
            maybe_working_dir: Some(working_dir.into()),
        }
    }

    #[cfg(test)]
    fn with_program(program: &str) -> Self {
        Self {
            program: program.into(),
            maybe_working_dir: None,
        }
    }
}

impl GitInvoker for SystemGit {
    fn run_from(&mut self, dir: &Path) { self.maybe_working_dir = Some(dir.to_path_buf()); }

    async fn invoke(&mut self, args: &[&str]) -> RawCommandResult {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(ref working_dir) = self.maybe_working_dir {
            cmd.current_dir(working_dir);
        }

        let res_output = cmd.output().await;
        let output = match res_output {
            Ok(output) => output,
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::error!(
                    message = "Unable to run command",
                    program = %self.program,
                    args = ?args,
                    error = %error
                );
                return RawCommandResult::failure(error.to_string());
            }
        };

        let succeeded = output.status.success();
        let mut bytes = output.stdout;
        bytes.extend_from_slice(&output.stderr);

        tracing::debug!(
            message = "Ran command",
            program = %self.program,
            args = ?args,
            working_dir = ?self.maybe_working_dir,
            status = ?output.status,
            succeeded
        );

        RawCommandResult { bytes, succeeded }
    }
}
