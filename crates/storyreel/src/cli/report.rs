//! Console reporting and image export helpers.

use std::path::Path;
use storyreel_core::{RenderState, Session};
use storyreel_error::{ProjectError, ProjectErrorKind, StoryreelResult};
use tracing::info;

/// One-line label for an entity's render status.
pub fn status_label(render: &RenderState) -> String {
    match render {
        RenderState::Idle => "idle".to_string(),
        RenderState::Rendering => "rendering".to_string(),
        RenderState::Ready(image) => format!("ready ({} bytes)", image.data.len()),
        RenderState::Failed(message) => format!("failed: {}", message),
    }
}

/// Print the headline, roster and scene table for a session.
pub fn print_session(session: &Session) {
    if let Some(headline) = &session.headline {
        println!("{}", headline.line1);
        println!("{}", headline.line2);
        println!();
    }

    println!("Characters:");
    for character in &session.characters {
        println!(
            "  {:<10} {:<12} {}",
            character.id,
            character.name,
            status_label(&character.render)
        );
    }

    println!("Scenes:");
    for scene in &session.scenes {
        let number = scene
            .chapter_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<12} #{:<3} {:<20} {}",
            scene.id,
            number,
            scene.title,
            status_label(&scene.render)
        );
    }
}

/// Write every rendered image in the session into `dir`, named by entity
/// id. Returns how many files were written.
pub fn export_images(session: &Session, dir: &Path) -> StoryreelResult<usize> {
    std::fs::create_dir_all(dir).map_err(|e| {
        ProjectError::new(ProjectErrorKind::Io(format!(
            "Failed to create {}: {}",
            dir.display(),
            e
        )))
    })?;

    let mut written = 0;
    let entities = session
        .characters
        .iter()
        .map(|c| (c.id.as_str(), &c.render))
        .chain(session.scenes.iter().map(|s| (s.id.as_str(), &s.render)));
    for (id, render) in entities {
        if let RenderState::Ready(image) = render {
            let extension = image
                .mime
                .as_deref()
                .and_then(|mime| mime.rsplit('/').next())
                .unwrap_or("png");
            let path = dir.join(format!("{}.{}", id, extension));
            std::fs::write(&path, &image.data).map_err(|e| {
                ProjectError::new(ProjectErrorKind::Io(format!(
                    "Failed to write {}: {}",
                    path.display(),
                    e
                )))
            })?;
            written += 1;
        }
    }
    info!(count = written, dir = %dir.display(), "Exported images");
    Ok(written)
}
