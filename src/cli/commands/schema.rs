//! Schema command implementation.
//!
//! The `degreegap schema [programs|config]` command prints a JSON Schema
//! for editors and data pipelines.

use crate::cli::args::SchemaArgs;
use crate::error::Result;
use crate::lint::SchemaGenerator;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate_string(self.args.kind);
        ui.data(&schema);
        Ok(CommandResult::success())
    }
}
