//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that read project data
//! share their setup through [`context`]:
//! - config discovery, layering, and validation
//! - data file loading into a [`DataSet`](crate::config::DataSet)
//! - student flags to a [`StudentProfile`](crate::student::StudentProfile)

pub mod completions;
pub mod context;
pub mod cost;
pub mod dispatcher;
pub mod display;
pub mod gap;
pub mod init;
pub mod lint;
pub mod majors;
pub mod prereqs;
pub mod recommend;
pub mod schema;

pub use context::ProjectContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
