//! Command handlers.

use super::commands::{GenerateArgs, ResumeArgs};
use super::report::{export_images, print_session};
use chrono::Utc;
use std::path::{Path, PathBuf};
use storyreel_error::{StoryreelError, StoryreelResult};
use storyreel_models::GeminiStoryboard;
use storyreel_pipeline::StoryboardPipeline;
use storyreel_project::{import_script, load_from_file, save_to_file, suggested_filename};
use tracing::{info, warn};

/// Surface the credential recovery hint when the gateway signalled an
/// unauthorized or unselected key.
fn credential_hint(error: &StoryreelError) {
    if error.is_credential_rejection() {
        warn!(
            "The API credential was rejected. Set `api_key` in storyreel.toml or export \
             GEMINI_API_KEY, then retry."
        );
    }
}

/// Run the full generation flow: analyze, render the roster, confirm, and
/// render the climax.
pub async fn run_generate(args: GenerateArgs) -> StoryreelResult<()> {
    let script = import_script(&args.script)?;
    let gateway = GeminiStoryboard::with_resolved_credential().inspect_err(credential_hint)?;

    let mut pipeline = StoryboardPipeline::new(gateway);
    pipeline.set_chapter_count(args.chapters);
    pipeline.set_style(args.style);
    pipeline.set_era(args.era);
    pipeline.set_aspect_ratio(args.aspect_ratio);

    info!(chapters = args.chapters, style = %args.style, era = %args.era, "Analyzing script");
    pipeline.submit(&script).await.inspect_err(credential_hint)?;
    if pipeline.credential_rejected() {
        warn!(
            "Some portraits failed because the credential was rejected; fix the key and \
             re-render them with `storyreel resume`."
        );
    }

    // The terminal flow has no interactive confirmation screen; the roster
    // report above the storyboard stands in for it.
    info!("Rendering the climax scene");
    pipeline.start_storyboard().await?;

    let session = pipeline.session();
    print_session(&session);

    let out: PathBuf = args
        .out
        .unwrap_or_else(|| PathBuf::from(suggested_filename(Utc::now())));
    save_to_file(&session, &out)?;
    info!(path = %out.display(), "Saved project");

    if let Some(dir) = args.images_dir {
        export_images(&session, &dir)?;
    }
    Ok(())
}

/// Load a saved project, optionally render one scene, and save it back.
pub async fn run_resume(args: ResumeArgs) -> StoryreelResult<()> {
    let session = load_from_file(&args.project)?;
    let gateway = GeminiStoryboard::with_resolved_credential().inspect_err(credential_hint)?;

    let mut pipeline = StoryboardPipeline::new(gateway);
    pipeline.load_session(session);

    if let Some(id) = &args.scene {
        info!(id = %id, "Rendering scene");
        pipeline.render_scene(id).await?;
        if pipeline.credential_rejected() {
            warn!("The render failed because the credential was rejected; fix the key and retry.");
        }
    }

    let session = pipeline.session();
    print_session(&session);

    save_to_file(&session, &args.project)?;
    info!(path = %args.project.display(), "Saved project");

    if let Some(dir) = args.images_dir {
        export_images(&session, &dir)?;
    }
    Ok(())
}

/// Print a saved project without touching the gateway.
pub fn run_show(project: &Path) -> StoryreelResult<()> {
    let session = load_from_file(project)?;
    print_session(&session);
    Ok(())
}
