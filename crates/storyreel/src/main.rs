//! Storyreel CLI binary.
//!
//! This binary provides command-line access to the storyboard engine:
//! - Generate a storyboard from a script file
//! - Resume a saved project and render pending scenes
//! - Inspect a saved project

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_generate, run_resume, run_show};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Generate(args) => {
            run_generate(args).await?;
        }

        Commands::Resume(args) => {
            run_resume(args).await?;
        }

        Commands::Show { project } => {
            run_show(&project)?;
        }
    }

    Ok(())
}
