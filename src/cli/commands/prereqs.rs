//! Prereqs command implementation.
//!
//! The `degreegap prereqs <course>` command shows how a course's catalog
//! prerequisite text parses into AND-of-OR groups.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::PrereqsArgs;
use crate::error::Result;
use crate::prereq::{clean_prerequisites_for_display, LogicTree};
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
struct PrereqsReport<'a> {
    course: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<String>,
    groups: &'a LogicTree,
}

/// The prereqs command implementation.
pub struct PrereqsCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: PrereqsArgs,
}

impl PrereqsCommand {
    /// Create a new prereqs command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: PrereqsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &PrereqsArgs {
        &self.args
    }
}

impl Command for PrereqsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::open(&self.project_root, self.config_override.as_deref(), ui)? {
            Ok(ctx) => ctx,
            Err(failure) => return Ok(failure),
        };

        let Some(course) = ctx.data.catalog.get(&self.args.course) else {
            ui.error(&format!("'{}' is not in the catalog", self.args.course.trim()));
            return Ok(CommandResult::failure(1));
        };

        let tree = LogicTree::parse(&course.raw_prerequisites);
        let raw = clean_prerequisites_for_display(&course.raw_prerequisites);

        if self.args.json {
            let report = PrereqsReport {
                course: &course.display_code,
                title: &course.title,
                raw,
                groups: &tree,
            };
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if course.title.is_empty() {
            ui.show_header(&course.display_code);
        } else {
            ui.show_header(&format!("{} {}", course.display_code, course.title));
        }
        if let Some(raw) = &raw {
            ui.message(&format!("Catalog: {}", raw));
        }
        ui.message(&format!("Requires: {}", tree));

        if ui.output_mode().shows_details() {
            for (i, group) in tree.groups().iter().enumerate() {
                ui.message(&format!("  group {}: any of {}", i + 1, group.join(", ")));
            }
        }

        Ok(CommandResult::success())
    }
}
