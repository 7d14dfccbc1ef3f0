//! Majors command implementation.
//!
//! The `degreegap majors` command lists the majors a student can name with
//! `--major`.

use std::path::{Path, PathBuf};

use crate::cli::args::MajorsArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The majors command implementation.
pub struct MajorsCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: MajorsArgs,
}

impl MajorsCommand {
    /// Create a new majors command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: MajorsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for MajorsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = match ProjectContext::open(&self.project_root, self.config_override.as_deref(), ui)? {
            Ok(ctx) => ctx,
            Err(failure) => return Ok(failure),
        };

        let majors = ctx.data.majors();

        if self.args.json {
            let json = serde_json::to_string_pretty(&majors).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if majors.is_empty() {
            ui.warning("No majors in the program data");
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("{} majors", majors.len()));
        for major in majors {
            ui.message(major);
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(programs: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".degreegap");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            "data:\n  programs: programs.json\n  catalogs: [catalog.json]\n",
        )
        .unwrap();
        fs::write(temp.path().join("catalog.json"), "[]").unwrap();
        fs::write(temp.path().join("programs.json"), programs).unwrap();
        temp
    }

    #[test]
    fn lists_majors_sorted() {
        let temp = setup_project(
            r#"[{"id": "Psychology", "type": "Majors", "rules": []},
                {"id": "History", "type": "Minors", "rules": []},
                {"id": "Economics", "type": "Majors", "rules": []}]"#,
        );
        let cmd = MajorsCommand::new(temp.path(), None, MajorsArgs::default());
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert_eq!(ui.messages(), &["Economics", "Psychology"]);
    }

    #[test]
    fn json_is_an_array() {
        let temp = setup_project(r#"[{"id": "Economics", "type": "Majors", "rules": []}]"#);
        let cmd = MajorsCommand::new(temp.path(), None, MajorsArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();
        let value: Vec<String> = serde_json::from_str(&ui.data_output()[0]).unwrap();
        assert_eq!(value, vec!["Economics"]);
    }

    #[test]
    fn no_majors_warns() {
        let temp = setup_project("[]");
        let cmd = MajorsCommand::new(temp.path(), None, MajorsArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();
        assert!(ui.has_warning("No majors"));
    }
}
