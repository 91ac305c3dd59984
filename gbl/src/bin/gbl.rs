// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::process::ExitCode;

use clap::Parser;
use gbl::{app::{CLIArg, FlowOutcome, RunOptions, TuiSelector, handle_command, ui_str},
          common::{get_log_file_path, try_initialize_logging_global, try_load_config},
          git::SystemGit};
use miette::IntoDiagnostic;
use r3bl_tui::CommonResult;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Git invocations are awaited one at a time, so a single threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli_arg = match CLIArg::parse().try_validate() {
        Ok(cli_arg) => cli_arg,
        Err(error) => error.exit(),
    };

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(
            &get_log_file_path(),
            tracing_core::LevelFilter::DEBUG,
        )
        .ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let exit_code = match launch_gbl(&cli_arg).await {
        // Informational outcomes (nothing selected, not a repository, etc) are not
        // failures.
        Ok(outcome) => {
            display_outcome(&outcome);
            ExitCode::SUCCESS
        }
        Err(report) => {
            report_unrecoverable_errors(&report);
            ExitCode::FAILURE
        }
    };

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    exit_code
}

async fn launch_gbl(cli_arg: &CLIArg) -> CommonResult<FlowOutcome> {
    let (config, maybe_config_path) =
        try_load_config(cli_arg.global_options.config.as_deref())?;
    if let Some(path) = maybe_config_path {
        eprintln!("{}", ui_str::using_config_file_msg(&path));
    }

    let working_dir = std::env::current_dir().into_diagnostic()?;
    let options = RunOptions::new(cli_arg, working_dir, config);

    let mut git = SystemGit::default();
    let mut selector = TuiSelector::new(options.config.max_list_height);

    handle_command(&options, &mut git, &mut selector).await
}

fn display_outcome(outcome: &FlowOutcome) {
    // % is Display, ? is Debug.
    tracing::debug!(message = "Flow finished", outcome = ?outcome);
    print!("{outcome}");
}

/// Fatal errors: a list query or checkout that git refused, a bad config file, or the
/// selection UI not working.
fn report_unrecoverable_errors(report: &miette::Report) {
    // % is Display, ? is Debug.
    tracing::error!(
        message = "Could not run gbl due to the following problem",
        error = ?report
    );

    eprintln!("{}", ui_str::unrecoverable_error_msg(report));
}
