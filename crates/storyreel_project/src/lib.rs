//! Project snapshot codec for the Storyreel storyboard engine.
//!
//! Serializes a whole session (inputs, settings, entities, outputs) to a
//! portable JSON document and restores it defensively: hand-edited or
//! partially written snapshots still load, with documented defaults filling
//! every gap. Restoring bypasses the pipeline entirely; no analysis or
//! render is replayed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod files;

pub use codec::{from_snapshot, to_snapshot};
pub use files::{import_script, load_from_file, save_to_file, suggested_filename};
