//! Story manifests.
//!
//! A manifest names the start scene and lists every scene file explicitly,
//! so loading never depends on how a directory happens to be enumerated.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::document::SceneFile;
use crate::error::{LoadError, LoadResult};
use crate::scene::SceneId;
use crate::store::SceneStore;

/// Default manifest file name looked up by the CLI.
pub const DEFAULT_MANIFEST: &str = "story.json";

/// The story manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Display name of the story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Id of the first scene.
    pub start: SceneId,
    /// Starting luck, if the story overrides the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_luck: Option<i32>,
    /// Scene files, relative to the manifest's directory, in load order.
    pub scenes: Vec<PathBuf>,
}

impl Manifest {
    /// Read a manifest from disk.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        read_json(path)
    }

    /// Load every listed scene file into a store.
    ///
    /// Relative paths are resolved against `base_dir`.
    pub fn load_scenes(&self, base_dir: &Path) -> LoadResult<SceneStore> {
        if self.scenes.is_empty() {
            return Err(LoadError::EmptyManifest);
        }

        let mut records = Vec::new();
        for file in &self.scenes {
            let path = base_dir.join(file);
            let content = read_file(&path)?;
            let documents = SceneFile::from_json(&content)
                .map_err(|source| parse_error(&path, source))?
                .into_documents();
            debug!(path = %path.display(), count = documents.len(), "read scene file");
            for doc in documents {
                records.push(doc.into_scene()?);
            }
        }

        SceneStore::load(records)
    }
}

/// A manifest together with the scenes it lists.
#[derive(Debug, Clone)]
pub struct Story {
    /// The manifest the story was loaded from.
    pub manifest: Manifest,
    /// All scenes.
    pub store: SceneStore,
}

impl Story {
    /// Load a manifest and all of its scenes.
    ///
    /// Fails if any file is unreadable, any record is invalid, or two records
    /// share an id. An unknown start scene is not a load failure: a session
    /// started there goes straight into its error state.
    pub fn load(manifest_path: &Path) -> LoadResult<Self> {
        let manifest = Manifest::from_path(manifest_path)?;
        let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
        let store = manifest.load_scenes(base_dir)?;

        if !store.contains(manifest.start.as_str()) {
            warn!(start = %manifest.start, "start scene not found");
        }

        Ok(Self { manifest, store })
    }

    /// Id of the first scene.
    pub fn start(&self) -> &SceneId {
        &self.manifest.start
    }

    /// Display name of the story, falling back to the start scene's title.
    pub fn title(&self) -> &str {
        self.manifest
            .title
            .as_deref()
            .or_else(|| self.store.get(self.start().as_str()).map(|s| s.title.as_str()))
            .unwrap_or("Untitled")
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|source| parse_error(path, source))
}

fn read_file(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(path: &Path, source: serde_json::Error) -> LoadError {
    LoadError::Parse {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn story_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "story.json",
            r#"{"title": "Test", "start": "A", "initialLuck": 40,
                "scenes": ["scenes/a.json", "scenes/rest.json"]}"#,
        );
        write(
            &dir,
            "scenes/a.json",
            r#"{"title": "A", "description": "Start.",
                "choices": [{"text": "go", "luckChange": 10, "nextScene": "B"}]}"#,
        );
        write(
            &dir,
            "scenes/rest.json",
            r#"[{"title": "B", "nextScene": "C"},
                {"title": "C", "choices": [{"text": "end", "luckChange": -5,
                 "nextScene": "end", "endingText": "Done"}]}]"#,
        );
        dir
    }

    #[test]
    fn load_story_from_manifest() {
        let dir = story_dir();
        let story = Story::load(&dir.path().join("story.json")).unwrap();

        assert_eq!(story.title(), "Test");
        assert_eq!(story.start().as_str(), "A");
        assert_eq!(story.manifest.initial_luck, Some(40));
        assert_eq!(story.store.len(), 3);
        let ids: Vec<&str> = story.store.ids().iter().map(SceneId::as_str).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn unknown_start_still_loads() {
        let dir = story_dir();
        write(&dir, "story.json", r#"{"start": "Z", "scenes": ["scenes/a.json"]}"#);

        let story = Story::load(&dir.path().join("story.json")).unwrap();
        assert_eq!(story.start().as_str(), "Z");
        assert!(!story.store.contains("Z"));
        assert_eq!(story.title(), "Untitled");
    }

    #[test]
    fn malformed_scene_reports_missing_field() {
        let dir = story_dir();
        write(
            &dir,
            "scenes/a.json",
            r#"{"title": "A", "choices": [{"text": "go", "luckChange": 10}]}"#,
        );

        let err = Story::load(&dir.path().join("story.json")).unwrap_err();
        let LoadError::Parse { path, source } = &err else {
            panic!("expected a parse error, got {err:?}");
        };
        assert!(path.ends_with("scenes/a.json"));
        assert!(source.to_string().contains("missing field `nextScene`"));
        assert!(err.to_string().contains("missing field `nextScene`"));
    }

    #[test]
    fn missing_scene_file_is_io_error() {
        let dir = story_dir();
        write(&dir, "story.json", r#"{"start": "A", "scenes": ["nope.json"]}"#);

        let err = Story::load(&dir.path().join("story.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn malformed_manifest_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "story.json", "{ not json");

        let err = Story::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "story.json", r#"{"start": "A", "scenes": []}"#);

        assert!(matches!(
            Story::load(&path).unwrap_err(),
            LoadError::EmptyManifest
        ));
    }

    #[test]
    fn duplicate_across_files_is_rejected() {
        let dir = story_dir();
        write(&dir, "scenes/dup.json", r#"{"title": "B", "nextScene": "A"}"#);
        write(
            &dir,
            "story.json",
            r#"{"start": "A", "scenes": ["scenes/a.json", "scenes/rest.json", "scenes/dup.json"]}"#,
        );

        let err = Story::load(&dir.path().join("story.json")).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateSceneId(_)));
    }

    #[test]
    fn title_falls_back_to_start_scene() {
        let dir = story_dir();
        write(
            &dir,
            "story.json",
            r#"{"start": "A", "scenes": ["scenes/a.json", "scenes/rest.json"]}"#,
        );

        let story = Story::load(&dir.path().join("story.json")).unwrap();
        assert_eq!(story.title(), "A");
    }
}
