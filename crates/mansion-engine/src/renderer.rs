//! The renderer contract.
//!
//! A renderer is whatever puts the story in front of the player: a terminal,
//! a window, a test recorder. The engine calls into it and never reads
//! anything back. Player input returns to the engine through
//! [`Game::submit`](crate::Game::submit).

use mansion_core::SceneId;

/// What a renderer needs to show a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneView<'a> {
    /// Scene id.
    pub id: &'a SceneId,
    /// Heading.
    pub title: &'a str,
    /// Narrative text.
    pub description: &'a str,
    /// Options in presentation order. Empty for continue scenes.
    pub choices: Vec<ChoiceView<'a>>,
    /// Turn this presentation belongs to.
    pub turn: u64,
}

/// One option as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceView<'a> {
    /// Label.
    pub label: &'a str,
    /// The luck delta, only when the session is configured to reveal it.
    pub luck_delta: Option<i32>,
}

/// Presents engine output to the player.
pub trait Renderer {
    /// Show a scene and its choices. Selecting choice `i` maps to
    /// [`Action::Choose(i)`](crate::Action::Choose).
    fn present_scene(&mut self, view: &SceneView<'_>);

    /// Offer a generic "continue" affordance for the scene just presented.
    fn present_continue(&mut self, turn: u64);

    /// Show the ending text. The session is over.
    fn present_ending(&mut self, text: &str);

    /// Show an in-story error. The session is over.
    fn present_error(&mut self, message: &str);

    /// Show the player's current luck.
    fn report_luck(&mut self, luck: i32);
}
