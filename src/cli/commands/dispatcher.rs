//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a dispatcher for the given project root.
    ///
    /// `config_override` replaces the project's layered config files.
    pub fn new(project_root: PathBuf, config_override: Option<PathBuf>) -> Self {
        Self {
            project_root,
            config_override,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the explicit config file, if one was given.
    pub fn config_override(&self) -> Option<&Path> {
        self.config_override.as_deref()
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = &self.project_root;
        let config = self.config_override();
        match &cli.command {
            Commands::Init(args) => {
                super::init::InitCommand::new(root, args.clone()).execute(ui)
            }
            Commands::Recommend(args) => {
                super::recommend::RecommendCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Gap(args) => {
                super::gap::GapCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Cost(args) => {
                super::cost::CostCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Prereqs(args) => {
                super::prereqs::PrereqsCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Majors(args) => {
                super::majors::MajorsCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Lint(args) => {
                super::lint::LintCommand::new(root, config, args.clone()).execute(ui)
            }
            Commands::Schema(args) => super::schema::SchemaCommand::new(args.clone()).execute(ui),
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"), None);
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
        assert!(dispatcher.config_override().is_none());
    }

    #[test]
    fn dispatches_schema_without_a_project() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["degreegap", "schema"]);
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui.data_output()[0].contains("\"$schema\""));
    }

    #[test]
    fn project_commands_need_config() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["degreegap", "majors"]);
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
    }
}
