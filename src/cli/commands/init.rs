//! Init command implementation.
//!
//! The `degreegap init` command writes a starter `.degreegap/config.yml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::config::{project_config_path, CONFIG_DIR};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

const LOCAL_CONFIG_ENTRY: &str = ".degreegap/config.local.yml";

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }

    /// Starter configuration, commented for first-time editors.
    pub fn starter_config() -> &'static str {
        "# degreegap configuration\n\
         #\n\
         # Paths are relative to the directory containing .degreegap/.\n\
         # Put machine-specific overrides in .degreegap/config.local.yml.\n\
         \n\
         data:\n\
         \x20 # Program requirement rules (JSON list of programs)\n\
         \x20 programs: data/academic_programs_rules.json\n\
         \x20 # Course catalogs, loaded in order; later files win per course\n\
         \x20 catalogs:\n\
         \x20   - data/gened_supplementary.json\n\
         \x20   - data/world_campus_courses_master.json\n\
         \x20 # Optional: courses accepted in place of a prerequisite\n\
         \x20 equivalencies: data/course_equivalencies.json\n\
         \n\
         # Let a higher-level course in the same department satisfy a prerequisite\n\
         hierarchy_rules:\n\
         \x20 enabled: false\n\
         \x20 same_department_higher_level: true\n\
         \x20 minimum_level_difference: 0\n\
         \n\
         recommend:\n\
         \x20 top_n: 15\n\
         \x20 interest_filter: Minor  # Majors | Minors | Certificates | \"\" for all\n\
         \n\
         settings:\n\
         \x20 default_output: normal  # verbose | normal | quiet | silent\n"
    }

    /// Update gitignore to exclude local overrides.
    fn update_gitignore(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let gitignore_path = self.project_root.join(".gitignore");

        if gitignore_path.exists() {
            let content = fs::read_to_string(&gitignore_path)?;
            if !content.lines().any(|l| l.trim() == LOCAL_CONFIG_ENTRY) {
                let new_content = if content.is_empty() || content.ends_with('\n') {
                    format!("{}{}\n", content, LOCAL_CONFIG_ENTRY)
                } else {
                    format!("{}\n{}\n", content, LOCAL_CONFIG_ENTRY)
                };
                fs::write(&gitignore_path, new_content)?;
                ui.message(&format!("Added {} to .gitignore", LOCAL_CONFIG_ENTRY));
            }
        }

        Ok(())
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config_path = project_config_path(&self.project_root);
        if config_path.exists() && !self.args.force {
            ui.warning("Configuration already exists. Use --force to overwrite.");
            return Ok(CommandResult::failure(1));
        }

        fs::create_dir_all(self.project_root.join(CONFIG_DIR))?;
        fs::write(&config_path, Self::starter_config())?;
        tracing::debug!("Wrote {}", config_path.display());

        self.update_gitignore(ui)?;

        ui.success(&format!("Created {}", config_path.display()));
        ui.show_hint("Point data.programs and data.catalogs at your files, then run 'degreegap lint'.");

        Ok(CommandResult::success())
    }
}
