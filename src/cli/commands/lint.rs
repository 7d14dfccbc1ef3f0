//! Lint command implementation.
//!
//! The `degreegap lint` command checks the loaded catalog, program, and
//! equivalency data for problems that would skew gap reports.

use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::error::Result;
use crate::lint::{
    HumanFormatter, JsonFormatter, LintDiagnostic, LintFormatter, OutputFormat, RuleRegistry,
    Severity,
};
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: LintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Format diagnostics using the requested formatter.
    ///
    /// Human output is left unstyled; the UI styles each line.
    fn format_output(&self, diagnostics: &[LintDiagnostic]) -> Result<String> {
        let mut output = Vec::new();
        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(diagnostics, &mut output)?,
            OutputFormat::Human => HumanFormatter::new(false).format(diagnostics, &mut output)?,
        }
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::open(&self.project_root, self.config_override.as_deref(), ui)? {
            Ok(ctx) => ctx,
            Err(failure) => return Ok(failure),
        };

        let registry = RuleRegistry::with_builtins();
        let diagnostics = registry.check(&ctx.data);

        let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
        let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);
        let should_fail = has_errors || (self.args.strict && has_warnings);

        let output = self.format_output(&diagnostics)?;

        match self.args.format {
            OutputFormat::Json => ui.data(output.trim_end()),
            OutputFormat::Human if diagnostics.is_empty() => {
                ui.success(&format!(
                    "Checked {} courses and {} programs: no problems found",
                    ctx.data.catalog.len(),
                    ctx.data.programs.len()
                ));
            }
            OutputFormat::Human => {
                for line in output.lines() {
                    if line.starts_with("error") {
                        ui.error(line);
                    } else if line.starts_with("warning") {
                        ui.warning(line);
                    } else {
                        ui.message(line);
                    }
                }
            }
        }

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
