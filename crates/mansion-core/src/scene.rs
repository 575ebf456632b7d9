use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Choice target that terminates the story instead of naming a scene.
pub const END_SENTINEL: &str = "end";

/// Stable identifier of a scene, independent of its display title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Create a scene ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SceneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for SceneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SceneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Where a choice leads once it is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceTarget {
    /// Continue the story at another scene.
    Scene(SceneId),
    /// End the story with this text. No scene lookup happens.
    Ending(String),
}

impl ChoiceTarget {
    /// The scene this target points at, if it is not an ending.
    pub fn scene(&self) -> Option<&SceneId> {
        match self {
            ChoiceTarget::Scene(id) => Some(id),
            ChoiceTarget::Ending(_) => None,
        }
    }
}

/// A single option offered to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Label shown on the option.
    pub text: String,
    /// Amount added to the player's luck when chosen.
    pub luck_delta: i32,
    /// Where the choice leads.
    pub target: ChoiceTarget,
}

impl Choice {
    /// Create a choice leading to another scene.
    pub fn new(text: impl Into<String>, scene: impl Into<SceneId>) -> Self {
        Self {
            text: text.into(),
            luck_delta: 0,
            target: ChoiceTarget::Scene(scene.into()),
        }
    }

    /// Create a choice that ends the story with the given text.
    pub fn ending(text: impl Into<String>, ending_text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            luck_delta: 0,
            target: ChoiceTarget::Ending(ending_text.into()),
        }
    }

    /// Set the luck delta.
    pub fn with_luck(mut self, delta: i32) -> Self {
        self.luck_delta = delta;
        self
    }
}

/// How the story moves on from a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progression {
    /// The player picks one of these (never empty).
    Choices(Vec<Choice>),
    /// Any interaction advances to this scene. Luck is untouched.
    Continue(SceneId),
    /// Neither choices nor a next scene: the story cannot go on.
    DeadEnd,
}

/// A scene of the story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Lookup key.
    pub id: SceneId,
    /// Heading shown to the player.
    pub title: String,
    /// Narrative text.
    pub description: String,
    /// What happens after the scene is shown.
    pub progression: Progression,
}

impl Scene {
    /// Create a dead-end scene with the given id and title.
    pub fn new(id: impl Into<SceneId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            progression: Progression::DeadEnd,
        }
    }

    /// Set the narrative text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a choice. Replaces any auto-advance target.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        match &mut self.progression {
            Progression::Choices(choices) => choices.push(choice),
            other => *other = Progression::Choices(vec![choice]),
        }
        self
    }

    /// Auto-advance to `next` on any interaction. Replaces any choices.
    pub fn with_next(mut self, next: impl Into<SceneId>) -> Self {
        self.progression = Progression::Continue(next.into());
        self
    }

    /// The scene's choices, empty unless it is a choice scene.
    pub fn choices(&self) -> &[Choice] {
        match &self.progression {
            Progression::Choices(choices) => choices,
            _ => &[],
        }
    }

    /// The auto-advance target, if this is a continue scene.
    pub fn next_scene(&self) -> Option<&SceneId> {
        match &self.progression {
            Progression::Continue(next) => Some(next),
            _ => None,
        }
    }

    /// Every scene this scene can lead to, in presentation order.
    pub fn exits(&self) -> Vec<&SceneId> {
        match &self.progression {
            Progression::Choices(choices) => {
                choices.iter().filter_map(|c| c.target.scene()).collect()
            }
            Progression::Continue(next) => vec![next],
            Progression::DeadEnd => Vec::new(),
        }
    }

    /// Whether any choice of this scene ends the story.
    pub fn has_ending(&self) -> bool {
        self.choices()
            .iter()
            .any(|c| matches!(c.target, ChoiceTarget::Ending(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_builder_choices() {
        let scene = Scene::new("gate", "The Gate")
            .with_description("A red gate.")
            .with_choice(Choice::new("Enter", "hall").with_luck(5))
            .with_choice(Choice::ending("Leave", "You walk away."));

        assert_eq!(scene.id.as_str(), "gate");
        assert_eq!(scene.choices().len(), 2);
        assert_eq!(scene.choices()[0].luck_delta, 5);
        assert!(scene.next_scene().is_none());
        assert!(scene.has_ending());
    }

    #[test]
    fn with_next_replaces_choices() {
        let scene = Scene::new("a", "A")
            .with_choice(Choice::new("go", "b"))
            .with_next("c");

        assert!(scene.choices().is_empty());
        assert_eq!(scene.next_scene(), Some(&SceneId::from("c")));
    }

    #[test]
    fn exits_skip_endings() {
        let scene = Scene::new("a", "A")
            .with_choice(Choice::new("left", "b"))
            .with_choice(Choice::ending("stop", "Done"))
            .with_choice(Choice::new("right", "c"));

        let exits: Vec<&str> = scene.exits().into_iter().map(SceneId::as_str).collect();
        assert_eq!(exits, vec!["b", "c"]);
    }

    #[test]
    fn new_scene_is_dead_end() {
        let scene = Scene::new("void", "Void");
        assert_eq!(scene.progression, Progression::DeadEnd);
        assert!(scene.exits().is_empty());
    }

    #[test]
    fn scene_id_display() {
        assert_eq!(SceneId::new("初入贾府").to_string(), "初入贾府");
    }
}
