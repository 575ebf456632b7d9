//! Core types for Mansion: scenes, choices, and the scene store.
//!
//! This crate defines the story data model a visual novel is played from.
//! It is independent of the traversal engine. You can build a
//! [`SceneStore`] programmatically or load one from a JSON manifest.

/// Wire format for scene documents.
pub mod document;
/// Error types used throughout the crate.
pub mod error;
/// Story manifests listing the scene files to load.
pub mod manifest;
/// Scenes, choices, and their identifiers.
pub mod scene;
/// The immutable scene store.
pub mod store;
/// Static checks over a loaded story graph.
pub mod validate;

/// Re-export error types.
pub use error::{LoadError, LoadResult};
/// Re-export manifest types.
pub use manifest::{DEFAULT_MANIFEST, Manifest, Story};
/// Re-export scene types.
pub use scene::{Choice, ChoiceTarget, END_SENTINEL, Progression, Scene, SceneId};
/// Re-export the store.
pub use store::SceneStore;
/// Re-export validation types.
pub use validate::{ValidationIssue, reachable_from, validate_story};
