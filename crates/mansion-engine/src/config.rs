//! Configuration for a game session.

use mansion_core::{SceneId, Story};

use crate::player::{DEFAULT_LUCK, LUCK_MAX, LUCK_MIN};

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Scene the session starts in (and restarts from).
    pub start: SceneId,
    /// Starting luck (0-100).
    pub initial_luck: i32,
    /// Show each choice's luck delta next to its label.
    pub reveal_deltas: bool,
}

impl GameConfig {
    /// Create a configuration starting at `start` with default luck.
    pub fn new(start: impl Into<SceneId>) -> Self {
        Self {
            start: start.into(),
            initial_luck: DEFAULT_LUCK,
            reveal_deltas: false,
        }
    }

    /// Take the start scene and starting luck from a loaded story.
    pub fn from_story(story: &Story) -> Self {
        let config = Self::new(story.start().clone());
        match story.manifest.initial_luck {
            Some(luck) => config.with_initial_luck(luck),
            None => config,
        }
    }

    /// Set the start scene.
    pub fn with_start(mut self, start: impl Into<SceneId>) -> Self {
        self.start = start.into();
        self
    }

    /// Set the starting luck (clamped to 0-100).
    pub fn with_initial_luck(mut self, luck: i32) -> Self {
        self.initial_luck = luck.clamp(LUCK_MIN, LUCK_MAX);
        self
    }

    /// Show or hide luck deltas on choices.
    pub fn with_reveal_deltas(mut self, reveal: bool) -> Self {
        self.reveal_deltas = reveal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = GameConfig::new("A");
        assert_eq!(cfg.start.as_str(), "A");
        assert_eq!(cfg.initial_luck, 50);
        assert!(!cfg.reveal_deltas);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::new("A")
            .with_start("B")
            .with_initial_luck(80)
            .with_reveal_deltas(true);
        assert_eq!(cfg.start.as_str(), "B");
        assert_eq!(cfg.initial_luck, 80);
        assert!(cfg.reveal_deltas);
    }

    #[test]
    fn luck_clamped() {
        assert_eq!(GameConfig::new("A").with_initial_luck(-10).initial_luck, 0);
        assert_eq!(GameConfig::new("A").with_initial_luck(999).initial_luck, 100);
    }

    #[test]
    fn from_story_uses_manifest() {
        use mansion_core::{Manifest, Scene, SceneStore};

        let story = Story {
            manifest: Manifest {
                title: None,
                start: "A".into(),
                initial_luck: Some(30),
                scenes: Vec::new(),
            },
            store: SceneStore::load(vec![Scene::new("A", "A").with_next("A")]).unwrap(),
        };

        let cfg = GameConfig::from_story(&story);
        assert_eq!(cfg.start.as_str(), "A");
        assert_eq!(cfg.initial_luck, 30);
    }
}
