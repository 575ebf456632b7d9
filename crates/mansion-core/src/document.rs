//! JSON scene documents as authored on disk.
//!
//! A document mirrors the authoring format one-to-one. [`SceneDocument::into_scene`]
//! checks it and turns it into a [`Scene`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LoadError, LoadResult};
use crate::scene::{Choice, ChoiceTarget, END_SENTINEL, Progression, Scene, SceneId};

/// One scene as written in a scene file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    /// Explicit lookup key. Falls back to `title` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Heading shown to the player.
    pub title: String,
    /// Narrative text.
    #[serde(default)]
    pub description: String,
    /// Options offered to the player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ChoiceDocument>>,
    /// Auto-advance target, used when there are no choices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_scene: Option<String>,
}

/// One choice as written in a scene file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceDocument {
    /// Label shown on the option.
    pub text: String,
    /// Luck delta applied when chosen.
    #[serde(default)]
    pub luck_change: i32,
    /// Target scene id, or `"end"`.
    pub next_scene: String,
    /// Ending narrative, required when `next_scene` is `"end"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_text: Option<String>,
}

/// Contents of a scene file: a single document or an array of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneFile {
    /// Several scenes in one file.
    Many(Vec<SceneDocument>),
    /// One scene per file.
    One(Box<SceneDocument>),
}

impl SceneFile {
    /// Parse a scene file, picking the shape from its first token.
    ///
    /// A leading `[` means an array of documents; anything else is read as a
    /// single document. Errors keep serde's field name and position.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        if content.trim_start().starts_with('[') {
            serde_json::from_str(content).map(SceneFile::Many)
        } else {
            serde_json::from_str(content).map(|doc| SceneFile::One(Box::new(doc)))
        }
    }

    /// Flatten into documents in file order.
    pub fn into_documents(self) -> Vec<SceneDocument> {
        match self {
            SceneFile::Many(docs) => docs,
            SceneFile::One(doc) => vec![*doc],
        }
    }
}

impl SceneDocument {
    /// The id this document will be stored under.
    pub fn scene_id(&self) -> SceneId {
        SceneId::new(self.id.as_deref().unwrap_or(&self.title))
    }

    /// Check the document and convert it into a [`Scene`].
    pub fn into_scene(self) -> LoadResult<Scene> {
        let id = self.scene_id();
        if id.as_str().trim().is_empty() {
            return Err(LoadError::InvalidScene {
                scene: id,
                message: "scene id is empty".to_string(),
            });
        }

        let choices = self.choices.unwrap_or_default();
        let progression = if !choices.is_empty() {
            if self.next_scene.is_some() {
                warn!(scene = %id, "scene has both choices and nextScene; nextScene is ignored");
            }
            let choices = choices
                .into_iter()
                .enumerate()
                .map(|(index, choice)| choice.into_choice(&id, index))
                .collect::<LoadResult<Vec<_>>>()?;
            Progression::Choices(choices)
        } else if let Some(next) = self.next_scene {
            // Only choices treat "end" as the ending sentinel; here it is a plain scene id.
            Progression::Continue(SceneId::new(next))
        } else {
            Progression::DeadEnd
        };

        Ok(Scene {
            id,
            title: self.title,
            description: self.description,
            progression,
        })
    }
}

impl ChoiceDocument {
    fn into_choice(self, scene: &SceneId, index: usize) -> LoadResult<Choice> {
        let target = if self.next_scene == END_SENTINEL {
            let ending = self.ending_text.ok_or_else(|| LoadError::InvalidScene {
                scene: scene.clone(),
                message: format!("choice {} ends the story without endingText", index + 1),
            })?;
            ChoiceTarget::Ending(ending)
        } else {
            if self.ending_text.is_some() {
                warn!(%scene, choice = index + 1, "endingText on a non-ending choice is ignored");
            }
            ChoiceTarget::Scene(SceneId::new(self.next_scene))
        };

        Ok(Choice {
            text: self.text,
            luck_delta: self.luck_change,
            target,
        })
    }
}
