//! Cost command implementation.
//!
//! The `degreegap cost <course>` command prices the cheapest prerequisite
//! chain to a course for a student.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::CostArgs;
use crate::error::Result;
use crate::gap::format_credits;
use crate::prereq::{Chain, ChainStatus, CostResolver};
use crate::ui::UserInterface;

use super::context::{student_profile, ProjectContext};
use super::dispatcher::{Command, CommandResult};
use super::display::chain_tree;

#[derive(Debug, Serialize)]
struct CostReport<'a> {
    course: &'a str,
    total_credits: f64,
    courses_to_take: Vec<&'a str>,
    chain: &'a Chain,
}

/// The cost command implementation.
pub struct CostCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CostArgs,
}

impl CostCommand {
    /// Create a new cost command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: CostArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CostArgs {
        &self.args
    }
}

impl Command for CostCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::open(&self.project_root, self.config_override.as_deref(), ui)? {
            Ok(ctx) => ctx,
            Err(failure) => return Ok(failure),
        };

        let profile = student_profile(&self.args.student, &ctx.data, ui)?;
        let resolver = CostResolver::new(&ctx.data.catalog, ctx.data.checker());
        let chain = resolver.resolve(&self.args.course, profile.effective(), None);
        let total = chain.total();
        let to_take = chain.courses_to_take();
        tracing::debug!("Resolved {} in {} visits", chain.code, chain.visits);

        if self.args.json {
            let report = CostReport {
                course: &chain.code,
                total_credits: total,
                courses_to_take: to_take,
                chain: &chain,
            };
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Path to {}", chain.code));

        if chain.status == ChainStatus::Uncatalogued {
            ui.warning(&format!(
                "{} is not in the catalog; assuming {} credits and no prerequisites",
                chain.code,
                format_credits(chain.credits)
            ));
        }

        if to_take.is_empty() {
            ui.success(&format!("{} is already satisfied", chain.code));
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Take, in order: {}", to_take.join(" -> ")));
        ui.message(&format!("Total: {} credits", format_credits(total)));

        if ui.output_mode().shows_details() {
            for line in chain_tree(&chain) {
                ui.message(&format!("  {}", line));
            }
        }

        Ok(CommandResult::success())
    }
}
