//! Snapshot file save/load and plain-text script import.

use crate::{from_snapshot, to_snapshot};
use chrono::{DateTime, Utc};
use std::path::Path;
use storyreel_core::Session;
use storyreel_error::{ProjectError, ProjectErrorKind, StoryreelResult};
use tracing::debug;

/// Conventional export filename embedding a generation timestamp.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let when = Utc.timestamp_millis_opt(1700000000000).unwrap();
/// assert_eq!(
///     storyreel_project::suggested_filename(when),
///     "storyreel_project_1700000000000.json"
/// );
/// ```
pub fn suggested_filename(now: DateTime<Utc>) -> String {
    format!("storyreel_project_{}.json", now.timestamp_millis())
}

/// Write a session snapshot to `path`.
pub fn save_to_file(session: &Session, path: impl AsRef<Path>) -> StoryreelResult<()> {
    let path = path.as_ref();
    let snapshot = to_snapshot(session)?;
    std::fs::write(path, snapshot).map_err(|e| {
        ProjectError::new(ProjectErrorKind::Io(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )))
    })?;
    debug!(path = %path.display(), "Saved project snapshot");
    Ok(())
}

/// Load a session snapshot from `path`.
pub fn load_from_file(path: impl AsRef<Path>) -> StoryreelResult<Session> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        ProjectError::new(ProjectErrorKind::Io(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        )))
    })?;
    let session = from_snapshot(&text)?;
    debug!(path = %path.display(), "Loaded project snapshot");
    Ok(session)
}

/// Read a plain-text script file in full, as-is. No structure is parsed
/// out of it.
pub fn import_script(path: impl AsRef<Path>) -> StoryreelResult<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .map_err(|e| {
            ProjectError::new(ProjectErrorKind::Io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn save_and_load_round_trip() {
        let dir = env::temp_dir().join("storyreel_files_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("session.json");

        let session = Session {
            script_text: "대본".to_string(),
            ..Session::default()
        };
        save_to_file(&session, &path).unwrap();
        let restored = load_from_file(&path).unwrap();
        assert_eq!(restored, session);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = load_from_file("/nonexistent/storyreel.json").unwrap_err();
        assert!(error.to_string().contains("Failed to read"));
    }

    #[test]
    fn import_script_reads_verbatim() {
        let dir = env::temp_dir().join("storyreel_script_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("script.txt");
        std::fs::write(&path, "S#1. 골목길\n민수: ...\n").unwrap();

        let script = import_script(&path).unwrap();
        assert_eq!(script, "S#1. 골목길\n민수: ...\n");

        std::fs::remove_dir_all(&dir).ok();
    }
}
