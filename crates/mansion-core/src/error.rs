use std::path::PathBuf;

use crate::scene::SceneId;

/// Alias for `Result<T, LoadError>`.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while obtaining or assembling a story.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A manifest or scene file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A manifest or scene file is not valid JSON for its schema.
    #[error("cannot parse {path}: {source}")]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Two scene records share the same identifier.
    #[error("duplicate scene id: \"{0}\"")]
    DuplicateSceneId(SceneId),

    /// A scene record is structurally invalid.
    #[error("invalid scene \"{scene}\": {message}")]
    InvalidScene {
        /// The offending scene.
        scene: SceneId,
        /// What is wrong with it.
        message: String,
    },

    /// The manifest lists no scenes at all.
    #[error("manifest lists no scenes")]
    EmptyManifest,
}
