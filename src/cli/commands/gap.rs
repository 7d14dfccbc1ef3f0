//! Gap command implementation.
//!
//! The `degreegap gap <program>` command reports, rule by rule, what a
//! student still needs for one program.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::analysis::{overlap, Overlap};
use crate::cli::args::GapArgs;
use crate::error::{DegreeGapError, Result};
use crate::gap::{format_credits, GapResult};
use crate::recommend::Evaluator;
use crate::ui::{DegreeGapTheme, UserInterface};

use super::context::{student_profile, ProjectContext};
use super::dispatcher::{Command, CommandResult};
use super::display::{rule_line, show_missing_item};

/// JSON shape of a gap report.
#[derive(Debug, Serialize)]
struct GapReport<'a> {
    program: &'a str,
    #[serde(flatten)]
    gap: &'a GapResult,
    overlap: &'a Overlap,
}

/// The gap command implementation.
pub struct GapCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: GapArgs,
}

impl GapCommand {
    /// Create a new gap command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: GapArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &GapArgs {
        &self.args
    }
}

impl Command for GapCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::open(&self.project_root, self.config_override.as_deref(), ui)? {
            Ok(ctx) => ctx,
            Err(failure) => return Ok(failure),
        };

        let program = match ctx.data.require_program(&self.args.program) {
            Ok(program) => program,
            Err(e @ DegreeGapError::UnknownProgram { .. }) => {
                ui.error(&e.to_string());
                ui.show_hint("Run 'degreegap recommend --filter \"\"' to see every program id.");
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let profile = student_profile(&self.args.student, &ctx.data, ui)?;
        let evaluator = Evaluator::new(&ctx.data);
        let gap = evaluator.calculator().calculate(program, &profile);
        let shared = overlap(program, &profile);

        if self.args.json {
            let report = GapReport {
                program: &program.id,
                gap: &gap,
                overlap: &shared,
            };
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        let theme = DegreeGapTheme::new();
        ui.show_header(&format!("{} ({})", program.id, program.program_type));
        if let Some(url) = &program.url {
            ui.message(&format!("  {}", url));
        }

        let details = ui.output_mode().shows_details();
        if details {
            for (i, rule) in gap.rules.iter().enumerate() {
                ui.message(&rule_line(i, rule));
            }
        }

        for item in &gap.missing {
            show_missing_item(ui, item, details);
        }

        if shared.count > 0 {
            ui.message(&format!(
                "Already counts ({}): {}",
                shared.count,
                shared.courses.join(", ")
            ));
        }

        if gap.is_complete() {
            ui.success(&format!("{} is complete", program.id));
        } else {
            ui.message(&format!(
                "Remaining: {}",
                theme.format_gap(gap.total_gap_credits)
            ));
            tracing::debug!(
                "{} needs {} more credits",
                program.id,
                format_credits(gap.total_gap_credits)
            );
        }

        Ok(CommandResult::success())
    }
}
