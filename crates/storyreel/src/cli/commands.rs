//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storyreel_core::{AspectRatio, Era, ImageStyle};

/// Storyreel - drama-script storyboard generator
#[derive(Parser, Debug)]
#[command(name = "storyreel")]
#[command(about = "Turn a drama script into an AI-rendered storyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a script and generate the storyboard
    Generate(GenerateArgs),

    /// Load a saved project and render pending scenes
    Resume(ResumeArgs),

    /// Print a saved project's headline, roster, and scene table
    Show {
        /// Path to the project snapshot
        #[arg(long)]
        project: PathBuf,
    },
}

/// Arguments for `storyreel generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the plain-text script file
    #[arg(long)]
    pub script: PathBuf,

    /// Number of chapter cuts to partition the story into
    #[arg(long, default_value = "6")]
    pub chapters: u32,

    /// Visual style (cinematic, webtoon_action, webtoon_romance,
    /// webtoon_thriller, webtoon_yadam)
    #[arg(long, default_value = "cinematic")]
    pub style: ImageStyle,

    /// Era (modern, joseon)
    #[arg(long, default_value = "modern")]
    pub era: Era,

    /// Aspect ratio (16:9, 9:16)
    #[arg(long, default_value = "16:9")]
    pub aspect_ratio: AspectRatio,

    /// Output path for the project snapshot (defaults to a timestamped
    /// filename in the current directory)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Export rendered images into this directory
    #[arg(long)]
    pub images_dir: Option<PathBuf>,
}

/// Arguments for `storyreel resume`.
#[derive(Args, Debug)]
pub struct ResumeArgs {
    /// Path to the project snapshot
    #[arg(long)]
    pub project: PathBuf,

    /// Render (or re-render) one scene by id, e.g. `chapter-2` or `climax`
    #[arg(long)]
    pub scene: Option<String>,

    /// Export rendered images into this directory
    #[arg(long)]
    pub images_dir: Option<PathBuf>,
}
