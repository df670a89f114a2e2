//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! storyreel binary.

mod commands;
mod report;
mod run;

pub use commands::{Cli, Commands, GenerateArgs, ResumeArgs};
pub use run::{run_generate, run_resume, run_show};
