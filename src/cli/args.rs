//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::lint::{OutputFormat, SchemaTarget};

/// degreegap - Credit gaps and prerequisite chains for academic programs.
#[derive(Debug, Parser)]
#[command(name = "degreegap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .degreegap/config.yml)
    #[arg(short, long, global = true, env = "DEGREEGAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show per-rule breakdowns and chain details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Results only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a starter .degreegap/config.yml
    Init(InitArgs),

    /// Rank programs by how little a student has left to take
    Recommend(RecommendArgs),

    /// Show the remaining requirements of one program
    Gap(GapArgs),

    /// Show the cheapest prerequisite chain for a course
    Cost(CostArgs),

    /// Show the parsed prerequisites of a course
    Prereqs(PrereqsArgs),

    /// List the majors in the programs file
    Majors(MajorsArgs),

    /// Check the data files for problems
    Lint(LintArgs),

    /// Print a JSON Schema for the programs or config file
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

/// Where a student's completed courses come from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StudentArgs {
    /// Completed course codes (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "CODES")]
    pub history: Vec<String>,

    /// File of completed course codes, one per line or comma-separated
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Declared major; its required courses count as covered
    #[arg(long, value_name = "MAJOR")]
    pub major: Option<String>,

    /// Outstanding general-education needs (comma-separated, e.g. GH,GS)
    #[arg(long, value_delimiter = ',', value_name = "TAGS")]
    pub gen_ed: Vec<String>,
}

/// Arguments for the `recommend` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub student: StudentArgs,

    /// Program type filter ("Minor", "Certificate", "" for all)
    #[arg(long, value_name = "TYPE")]
    pub filter: Option<String>,

    /// Number of programs to show
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub top: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `gap` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GapArgs {
    /// Program id (case-insensitive)
    pub program: String,

    #[command(flatten)]
    pub student: StudentArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `cost` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CostArgs {
    /// Course code, any spelling ("ECON 442", "econ442")
    pub course: String,

    #[command(flatten)]
    pub student: StudentArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `prereqs` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PrereqsArgs {
    /// Course code, any spelling
    pub course: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `majors` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MajorsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SchemaArgs {
    /// File to describe: programs, config
    #[arg(default_value = "programs")]
    pub kind: SchemaTarget,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
