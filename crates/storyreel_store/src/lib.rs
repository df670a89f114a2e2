//! Entity store for the Storyreel storyboard engine.
//!
//! The store is the single shared mutable structure of a session. It owns
//! the character roster, the scene list, the headline and the style guide,
//! and exposes per-id mutation that never disturbs sibling entities. All
//! render outcomes flow through it; the only wholesale operations are
//! [`EntityStore::populate`] (new analysis) and [`EntityStore::replace_all`]
//! (project load).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod store;

pub use store::EntityStore;
