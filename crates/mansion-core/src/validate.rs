//! Static checks over a loaded story graph.
//!
//! Loading already rejects malformed records. These checks look at the graph
//! as a whole: references to scenes that do not exist, scenes the story can
//! get stuck in, and scenes the player can never reach.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::scene::{Progression, SceneId};
use crate::store::SceneStore;

/// A warning or error found while validating a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The scene where the issue was found.
    pub scene: SceneId,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn new(scene: &SceneId, message: impl Into<String>, is_error: bool) -> Self {
        Self {
            scene: scene.clone(),
            message: message.into(),
            is_error,
        }
    }

    fn error(scene: &SceneId, message: impl Into<String>) -> Self {
        Self::new(scene, message, true)
    }

    fn warning(scene: &SceneId, message: impl Into<String>) -> Self {
        Self::new(scene, message, false)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.scene, self.message)
    }
}

/// Validate a story graph starting at `start`.
///
/// Errors are conditions that would put a session into its error state.
/// The same problems in scenes no player can reach are only warnings, as is
/// content that can never be seen.
pub fn validate_story(store: &SceneStore, start: &SceneId) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !store.contains(start.as_str()) {
        issues.push(ValidationIssue::error(start, "start scene does not exist"));
        return issues;
    }

    let reachable = reachable_from(store, start);

    for scene in store.scenes() {
        let is_error = reachable.contains(&scene.id);
        match &scene.progression {
            Progression::Choices(choices) => {
                for (index, choice) in choices.iter().enumerate() {
                    if let Some(target) = choice.target.scene()
                        && !store.contains(target.as_str())
                    {
                        issues.push(ValidationIssue::new(
                            &scene.id,
                            format!(
                                "choice {} ('{}') leads to unknown scene '{target}'",
                                index + 1,
                                choice.text
                            ),
                            is_error,
                        ));
                    }
                }
            }
            Progression::Continue(next) => {
                if !store.contains(next.as_str()) {
                    issues.push(ValidationIssue::new(
                        &scene.id,
                        format!("continues to unknown scene '{next}'"),
                        is_error,
                    ));
                }
            }
            Progression::DeadEnd => {
                issues.push(ValidationIssue::new(
                    &scene.id,
                    "has neither choices nor a next scene",
                    is_error,
                ));
            }
        }
    }

    for id in store.ids() {
        if !reachable.contains(id) {
            issues.push(ValidationIssue::warning(id, "unreachable from the start scene"));
        }
    }

    let has_ending = reachable
        .iter()
        .filter_map(|id| store.get(id.as_str()))
        .any(|s| s.has_ending());
    if !has_ending {
        issues.push(ValidationIssue::warning(start, "no ending is reachable"));
    }

    issues
}

/// Scene ids reachable from `start` by any sequence of choices and continues.
pub fn reachable_from(store: &SceneStore, start: &SceneId) -> HashSet<SceneId> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start.clone()]);

    while let Some(id) = queue.pop_front() {
        let Some(scene) = store.get(id.as_str()) else {
            continue;
        };
        if !seen.insert(id) {
            continue;
        }
        for next in scene.exits() {
            if !seen.contains(next) {
                queue.push_back(next.clone());
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Choice, Scene};

    fn store(scenes: Vec<Scene>) -> SceneStore {
        SceneStore::load(scenes).unwrap()
    }

    #[test]
    fn clean_story_has_no_issues() {
        let store = store(vec![
            Scene::new("A", "A").with_choice(Choice::new("go", "B")),
            Scene::new("B", "B").with_next("C"),
            Scene::new("C", "C").with_choice(Choice::ending("end", "Done")),
        ]);

        assert!(validate_story(&store, &"A".into()).is_empty());
    }

    #[test]
    fn dangling_choice_is_error() {
        let store = store(vec![
            Scene::new("A", "A")
                .with_choice(Choice::new("x", "Z"))
                .with_choice(Choice::ending("end", "Done")),
        ]);

        let issues = validate_story(&store, &"A".into());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error);
        assert!(issues[0].message.contains("unknown scene 'Z'"));
    }

    #[test]
    fn dangling_continue_is_error() {
        let store = store(vec![Scene::new("A", "A").with_next("Z")]);

        let issues = validate_story(&store, &"A".into());
        assert!(
            issues
                .iter()
                .any(|i| i.is_error && i.message.contains("continues to unknown scene"))
        );
    }

    #[test]
    fn dead_end_is_error() {
        let store = store(vec![
            Scene::new("A", "A").with_next("B"),
            Scene::new("B", "B"),
        ]);

        let issues = validate_story(&store, &"A".into());
        assert!(
            issues
                .iter()
                .any(|i| i.is_error && i.scene.as_str() == "B")
        );
    }

    #[test]
    fn unreachable_scene_is_warning() {
        let store = store(vec![
            Scene::new("A", "A").with_choice(Choice::ending("end", "Done")),
            Scene::new("orphan", "Orphan").with_next("A"),
        ]);

        let issues = validate_story(&store, &"A".into());
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
        assert_eq!(issues[0].scene.as_str(), "orphan");
        assert_eq!(
            issues[0].to_string(),
            "warning: orphan: unreachable from the start scene"
        );
    }

    #[test]
    fn problems_in_unreachable_scenes_are_warnings() {
        let store = store(vec![
            Scene::new("A", "A").with_choice(Choice::ending("end", "Done")),
            Scene::new("orphan", "Orphan").with_choice(Choice::new("x", "Z")),
            Scene::new("void", "Void"),
        ]);

        let issues = validate_story(&store, &"A".into());
        assert!(issues.iter().all(|i| !i.is_error));
        assert!(
            issues
                .iter()
                .any(|i| i.scene.as_str() == "orphan" && i.message.contains("unknown scene 'Z'"))
        );
        assert!(
            issues
                .iter()
                .any(|i| i.scene.as_str() == "void" && i.message.contains("neither choices"))
        );
    }

    #[test]
    fn missing_start_is_error() {
        let store = store(vec![Scene::new("A", "A").with_next("A")]);
        let issues = validate_story(&store, &"nope".into());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error);
    }

    #[test]
    fn cycle_without_ending_is_warned() {
        let store = store(vec![
            Scene::new("A", "A").with_next("B"),
            Scene::new("B", "B").with_next("A"),
        ]);

        let issues = validate_story(&store, &"A".into());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("no ending"));
    }

    #[test]
    fn reachability_follows_cycles() {
        let store = store(vec![
            Scene::new("A", "A").with_choice(Choice::new("x", "A")),
            Scene::new("B", "B").with_next("A"),
        ]);

        let reachable = reachable_from(&store, &"A".into());
        assert_eq!(reachable.len(), 1);
        assert!(reachable.contains("A"));
    }
}
