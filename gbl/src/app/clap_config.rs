// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
#[derive(Debug, Parser)]
#[command(bin_name = "gbl")]
#[command(about = "🌿 Pick git branches and files from a list instead of typing them")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  gbl [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub maybe_command: Option<CLICommand>,

    #[command(flatten)]
    pub branch_options: BranchOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

impl CLIArg {
    /// The delete flags only make sense for the branch flows, so they can't be combined
    /// with `add` or `remove`.
    ///
    /// # Errors
    ///
    /// Returns a usage error (print it with [`clap::Error::exit`]) on a conflict.
    pub fn try_validate(self) -> Result<Self, clap::Error> {
        let wants_delete = self.branch_options.delete || self.branch_options.force_delete;
        if wants_delete && self.maybe_command.is_some() {
            return Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                "`--delete` / `--force-delete` can't be used with a command",
            ));
        }
        Ok(self)
    }
}

/// With no flags and no command, `gbl` runs the checkout flow.
#[derive(Debug, Args)]
pub struct BranchOption {
    #[arg(
        long,
        short = 'd',
        conflicts_with = "force_delete",
        help = "Delete the selected branches (`git branch -d`)"
    )]
    pub delete: bool,

    #[arg(
        long,
        short = 'D',
        help = "Force delete the selected branches, merged or not (`git branch -D`)"
    )]
    pub force_delete: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `gbl_log.txt` in the cache folder for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        help = "Config file (default is $HOME/.gbl.yaml)"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "➕ Stage the selected files\n💡 Eg: `gbl add`")]
    Add {
        #[command(flatten)]
        scope: AddScopeOption,
    },

    #[clap(about = "➖ Unstage the selected files, keeping working tree changes\n💡 Eg: `gbl remove`")]
    Remove,
}

#[derive(Debug, Args)]
pub struct AddScopeOption {
    #[arg(
        long,
        conflicts_with = "untracked_only",
        help = "Only offer tracked files with unstaged changes"
    )]
    pub tracked_only: bool,

    #[arg(long, help = "Only offer untracked files")]
    pub untracked_only: bool,
}

#[cfg(test)]
mod tests_clap_config {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_no_args_is_checkout() {
        let cli_arg = CLIArg::try_parse_from(["gbl"]).unwrap();
        assert!(cli_arg.maybe_command.is_none());
        assert!(!cli_arg.branch_options.delete);
        assert!(!cli_arg.branch_options.force_delete);
    }

    #[test]
    fn test_delete_flags() {
        let cli_arg = CLIArg::try_parse_from(["gbl", "-d"]).unwrap();
        assert!(cli_arg.branch_options.delete);

        let cli_arg = CLIArg::try_parse_from(["gbl", "--force-delete"]).unwrap();
        assert!(cli_arg.branch_options.force_delete);
    }

    #[test]
    fn test_delete_and_force_delete_conflict() {
        assert!(CLIArg::try_parse_from(["gbl", "-d", "-D"]).is_err());
    }

    #[test]
    fn test_delete_flag_conflicts_with_subcommand() {
        let cli_arg = CLIArg::try_parse_from(["gbl", "-d", "add"]).unwrap();
        let error = cli_arg.try_validate().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);

        let cli_arg = CLIArg::try_parse_from(["gbl", "-D"]).unwrap();
        assert!(cli_arg.try_validate().is_ok());
    }

    #[test]
    fn test_subcommands_and_global_options() {
        let cli_arg =
            CLIArg::try_parse_from(["gbl", "add", "--untracked-only", "-l"]).unwrap();
        assert!(cli_arg.global_options.enable_logging);
        match cli_arg.maybe_command {
            Some(CLICommand::Add { scope }) => {
                assert!(scope.untracked_only);
                assert!(!scope.tracked_only);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli_arg =
            CLIArg::try_parse_from(["gbl", "--config", "/tmp/x.yaml", "remove"]).unwrap();
        assert!(matches!(cli_arg.maybe_command, Some(CLICommand::Remove)));
        assert_eq!(
            cli_arg.global_options.config,
            Some(PathBuf::from("/tmp/x.yaml"))
        );
    }
}
