//! Shared setup for commands that read project data.
//!
//! Loads the merged configuration, validates it, reads every data file it
//! names, and turns student flags into a [`StudentProfile`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::StudentArgs;
use crate::config::{load_config, validate, DataSet, DegreeGapConfig};
use crate::error::{DegreeGapError, Result};
use crate::student::{CourseHistory, StudentProfile};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::CommandResult;

/// Configuration and data for one command invocation.
#[derive(Debug)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: DegreeGapConfig,
    pub data: DataSet,
}

impl ProjectContext {
    /// Load and validate config, then load every data file it names.
    pub fn load(project_root: &Path, config_override: Option<&Path>) -> Result<Self> {
        let config = load_config(project_root, config_override)?;
        validate(&config)?;
        let data = DataSet::load(&config, project_root)?;
        Ok(Self {
            root: project_root.to_path_buf(),
            config,
            data,
        })
    }

    /// Load the project, reporting expected failures through the UI.
    ///
    /// Missing configuration maps to exit code 2; unreadable or invalid
    /// config and data files map to exit code 1. Anything else propagates.
    pub fn open(
        project_root: &Path,
        config_override: Option<&Path>,
        ui: &mut dyn UserInterface,
    ) -> Result<std::result::Result<Self, CommandResult>> {
        match Self::load(project_root, config_override) {
            Ok(ctx) => {
                ctx.apply_output_setting(ui);
                Ok(Ok(ctx))
            }
            Err(DegreeGapError::ConfigNotFound { path }) => {
                ui.error(&format!("No configuration found at {}", path.display()));
                ui.show_hint("Run 'degreegap init' to create one.");
                Ok(Err(CommandResult::failure(2)))
            }
            Err(
                e @ (DegreeGapError::ConfigParseError { .. }
                | DegreeGapError::ConfigValidationError { .. }
                | DegreeGapError::DataNotFound { .. }
                | DegreeGapError::DataParseError { .. }),
            ) => {
                ui.error(&e.to_string());
                Ok(Err(CommandResult::failure(1)))
            }
            Err(e) => Err(e),
        }
    }

    /// Use the configured default output unless a flag already chose one.
    pub fn apply_output_setting(&self, ui: &mut dyn UserInterface) {
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(self.config.settings.default_output.into());
        }
    }
}

/// Split history text into course codes.
///
/// Codes are separated by newlines or commas; `#` starts a comment that
/// runs to the end of the line.
///
/// ```
/// use degreegap::cli::commands::context::parse_history_text;
///
/// let codes = parse_history_text("ECON 102, MATH 140\n# fall\nSTAT 200 # transfer\n");
/// assert_eq!(codes, vec!["ECON 102", "MATH 140", "STAT 200"]);
/// ```
pub fn parse_history_text(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read course codes from a history file.
pub fn read_history_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;
    Ok(parse_history_text(&text))
}

/// Course codes from `--history` followed by those in `--history-file`.
pub fn history_codes(args: &StudentArgs) -> Result<Vec<String>> {
    let mut codes: Vec<String> = args
        .history
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    if let Some(path) = &args.history_file {
        codes.extend(read_history_file(path)?);
    }
    Ok(codes)
}

/// Build the student profile described by the command-line flags.
///
/// Warns when `--major` names no known major; the profile then has no
/// major-prescribed courses.
pub fn student_profile(
    args: &StudentArgs,
    data: &DataSet,
    ui: &mut dyn UserInterface,
) -> Result<StudentProfile> {
    let history = CourseHistory::from_codes(history_codes(args)?);
    tracing::debug!("Student history holds {} courses", history.len());

    let profile = match args.major.as_deref().map(str::trim) {
        Some(major) if !major.is_empty() => {
            if !data.programs.iter().any(|p| p.is_major() && p.id.eq_ignore_ascii_case(major)) {
                ui.warning(&format!(
                    "Major '{}' not found; no courses will count as covered by it",
                    major
                ));
            }
            StudentProfile::for_major(history, major, &data.programs, &args.gen_ed)
        }
        _ => StudentProfile::new(history, CourseHistory::new(), &args.gen_ed),
    };
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn write_project(root: &Path, config: &str) {
        let dir = root.join(".degreegap");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        fs::write(
            root.join("catalog.json"),
            r#"[{"courseCode": "ECON 102", "credits": 3}]"#,
        )
        .unwrap();
        fs::write(
            root.join("programs.json"),
            r#"[{"id": "Economics", "type": "Majors", "rules": [
                {"type": "all", "courses": [{"code": "ECON 102", "credits": 3}]}]}]"#,
        )
        .unwrap();
    }

    const CONFIG: &str = "data:\n  programs: programs.json\n  catalogs: [catalog.json]\n";

    #[test]
    fn history_text_skips_comments_and_blanks() {
        let codes = parse_history_text("# my courses\n\nECON 102,,MATH 140 \n");
        assert_eq!(codes, vec!["ECON 102", "MATH 140"]);
    }

    #[test]
    fn history_file_is_appended_to_flags() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.txt");
        fs::write(&path, "STAT 200\n").unwrap();

        let args = StudentArgs {
            history: vec!["ECON 102".to_string()],
            history_file: Some(path),
            ..Default::default()
        };
        assert_eq!(history_codes(&args).unwrap(), vec!["ECON 102", "STAT 200"]);
    }

    #[test]
    fn missing_history_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let args = StudentArgs {
            history_file: Some(temp.path().join("nope.txt")),
            ..Default::default()
        };
        let err = history_codes(&args).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn open_without_config_exits_2() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let outcome = ProjectContext::open(temp.path(), None, &mut ui).unwrap();
        assert_eq!(outcome.unwrap_err().exit_code, 2);
        assert!(!ui.hints().is_empty());
    }

    #[test]
    fn open_with_missing_data_exits_1() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".degreegap");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), CONFIG).unwrap();

        let mut ui = MockUI::new();
        let outcome = ProjectContext::open(temp.path(), None, &mut ui).unwrap();
        assert_eq!(outcome.unwrap_err().exit_code, 1);
        assert!(ui.errors()[0].contains("catalog.json"));
    }

    #[test]
    fn open_applies_default_output() {
        let temp = TempDir::new().unwrap();
        write_project(
            temp.path(),
            &format!("{}settings:\n  default_output: quiet\n", CONFIG),
        );
        let mut ui = MockUI::new();
        let ctx = ProjectContext::open(temp.path(), None, &mut ui).unwrap().unwrap();
        assert_eq!(ctx.data.catalog.len(), 1);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn explicit_mode_beats_default_output() {
        let temp = TempDir::new().unwrap();
        write_project(
            temp.path(),
            &format!("{}settings:\n  default_output: quiet\n", CONFIG),
        );
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        ProjectContext::open(temp.path(), None, &mut ui).unwrap().unwrap();
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn unknown_major_warns() {
        let temp = TempDir::new().unwrap();
        write_project(temp.path(), CONFIG);
        let mut ui = MockUI::new();
        let ctx = ProjectContext::load(temp.path(), None).unwrap();

        let args = StudentArgs {
            major: Some("Astrobiology".to_string()),
            ..Default::default()
        };
        let profile = student_profile(&args, &ctx.data, &mut ui).unwrap();
        assert!(profile.major_courses().is_empty());
        assert!(ui.has_warning("Astrobiology"));
    }

    #[test]
    fn known_major_contributes_courses() {
        let temp = TempDir::new().unwrap();
        write_project(temp.path(), CONFIG);
        let mut ui = MockUI::new();
        let ctx = ProjectContext::load(temp.path(), None).unwrap();

        let args = StudentArgs {
            major: Some("economics".to_string()),
            gen_ed: vec!["GH".to_string()],
            ..Default::default()
        };
        let profile = student_profile(&args, &ctx.data, &mut ui).unwrap();
        assert!(profile.major_courses().contains("ECON102"));
        assert_eq!(profile.gen_ed_needs(), ["GH"]);
        assert!(ui.warnings().is_empty());
    }
}
