//! Recommend command implementation.
//!
//! The `degreegap recommend` command ranks programs by how little a
//! student still needs to complete them.

use std::path::{Path, PathBuf};

use crate::cli::args::RecommendArgs;
use crate::error::Result;
use crate::gap::format_credits;
use crate::recommend::{Evaluator, RecommendOptions, Recommendation};
use crate::ui::{DegreeGapTheme, Table, UserInterface};

use super::context::{student_profile, ProjectContext};
use super::dispatcher::{Command, CommandResult};
use super::display::show_missing_item;

/// The recommend command implementation.
pub struct RecommendCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: RecommendArgs,
}

impl RecommendCommand {
    /// Create a new recommend command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: RecommendArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RecommendArgs {
        &self.args
    }

    /// Flags override the configured filter and count.
    fn options(&self, ctx: &ProjectContext) -> RecommendOptions {
        RecommendOptions {
            interest_filter: self
                .args
                .filter
                .clone()
                .unwrap_or_else(|| ctx.config.recommend.interest_filter.clone()),
            top_n: self
                .args
                .top
                .map(|n| n as usize)
                .unwrap_or(ctx.config.recommend.top_n),
        }
    }

    fn show_table(&self, ui: &mut dyn UserInterface, result: &Recommendation) {
        let theme = DegreeGapTheme::new();
        let mut table = Table::new(vec!["#", "Program", "Type", "Gap", "Overlap", "Triple-dips"])
            .align_right(0)
            .align_right(3)
            .align_right(4)
            .align_right(5);

        for (i, eval) in result.recommendations.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                eval.id.clone(),
                eval.program_type.to_string(),
                theme.format_gap(eval.gap_credits),
                eval.overlap_count.to_string(),
                eval.optimization_count.to_string(),
            ]);
        }
        ui.message(&table.render());
    }

    fn show_details(&self, ui: &mut dyn UserInterface, result: &Recommendation) {
        for eval in &result.recommendations {
            ui.show_header(&format!(
                "{} ({} cr to go)",
                eval.id,
                format_credits(eval.gap_credits)
            ));
            if let Some(url) = &eval.program_url {
                ui.message(&format!("  {}", url));
            }
            if !eval.overlap_courses.is_empty() {
                ui.message(&format!(
                    "  Already counts: {}",
                    eval.overlap_courses.join(", ")
                ));
            }
            for item in &eval.missing_courses {
                show_missing_item(ui, item, true);
            }
            for opportunity in &eval.optimizations {
                ui.message(&format!(
                    "  Triple-dip: {} {} [{}]",
                    opportunity.course,
                    opportunity.title,
                    opportunity.matches.join(", ")
                ));
            }
        }
    }
}

impl Command for RecommendCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::open(&self.project_root, self.config_override.as_deref(), ui)? {
            Ok(ctx) => ctx,
            Err(failure) => return Ok(failure),
        };

        let profile = student_profile(&self.args.student, &ctx.data, ui)?;
        let options = self.options(&ctx);
        let result = Evaluator::new(&ctx.data).recommend(&profile, &options);

        if self.args.json {
            let json = serde_json::to_string_pretty(&result).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if result.recommendations.is_empty() {
            ui.warning(&format!(
                "No programs match the filter '{}'",
                options.interest_filter
            ));
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!(
            "Top {} of {} programs",
            result.recommendations.len(),
            result.count
        ));
        self.show_table(ui, &result);

        if ui.output_mode().shows_details() {
            self.show_details(ui, &result);
        } else {
            ui.show_hint("Use --verbose for missing courses, or 'degreegap gap <program>' for one program.");
        }

        Ok(CommandResult::success())
    }
}
