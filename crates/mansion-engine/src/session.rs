//! The traversal state machine.

use std::sync::Arc;

use mansion_core::{ChoiceTarget, Progression, Scene, SceneId, SceneStore};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::player::PlayerState;
use crate::renderer::{ChoiceView, Renderer, SceneView};

/// Where a session stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Showing this scene and waiting for a stimulus.
    Playing(SceneId),
    /// The story ended with this text.
    Ended(String),
    /// The story broke off with this message.
    Error(String),
}

impl GameState {
    /// Whether no further stimulus is accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Playing(_))
    }

    /// The scene being shown, while playing.
    pub fn scene(&self) -> Option<&SceneId> {
        match self {
            GameState::Playing(id) => Some(id),
            _ => None,
        }
    }
}

/// A player stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the choice at this zero-based index.
    Choose(usize),
    /// Advance a scene that has no choices.
    Continue,
}

/// Outcome of an accepted stimulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Luck after the action, if the action applied a delta.
    pub luck: Option<i32>,
    /// The state the session moved into.
    pub state: GameState,
}

/// One play-through of a story.
///
/// Owns the player state and the current position; shares the store
/// read-only. Every accepted stimulus runs a full transition before
/// returning.
#[derive(Debug, Clone)]
pub struct GameSession {
    store: Arc<SceneStore>,
    config: GameConfig,
    state: GameState,
    player: PlayerState,
    turn: u64,
    history: Vec<SceneId>,
}

impl GameSession {
    /// Start a session at the configured start scene.
    ///
    /// An unknown start scene puts the session straight into the error state.
    pub fn new(store: Arc<SceneStore>, config: GameConfig) -> Self {
        let start = config.start.clone();
        let player = PlayerState::with_luck(config.initial_luck);
        let mut session = Self {
            store,
            config,
            state: GameState::Error(String::new()),
            player,
            turn: 0,
            history: Vec::new(),
        };
        session.enter(start);
        session
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Current luck.
    pub fn luck(&self) -> i32 {
        self.player.current()
    }

    /// The turn currently on screen. Bumped by every transition.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Scenes entered so far, in order.
    pub fn history(&self) -> &[SceneId] {
        &self.history
    }

    /// The configuration the session was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The shared scene store.
    pub fn store(&self) -> &Arc<SceneStore> {
        &self.store
    }

    /// The scene being shown, while playing.
    pub fn current_scene(&self) -> Option<&Scene> {
        self.state.scene().and_then(|id| self.store.get(id.as_str()))
    }

    /// Apply a stimulus to the current scene.
    pub fn submit(&mut self, action: Action) -> EngineResult<Transition> {
        let store = Arc::clone(&self.store);
        let GameState::Playing(current) = &self.state else {
            return Err(EngineError::SessionOver);
        };
        let Some(scene) = store.get(current.as_str()) else {
            // Playing always points at an entered scene; treat a vanished one
            // like any other lookup failure.
            let message = format!("scene {current} not found");
            self.state = GameState::Error(message);
            self.turn += 1;
            return Ok(self.transition(None));
        };

        let luck = match (action, &scene.progression) {
            (Action::Choose(index), Progression::Choices(choices)) => {
                let choice = choices.get(index).ok_or(EngineError::InvalidChoice(index))?;
                let luck = self.player.apply(choice.luck_delta);
                debug!(scene = %scene.id, choice = index, delta = choice.luck_delta, luck, "choice taken");
                match &choice.target {
                    ChoiceTarget::Ending(text) => {
                        info!(scene = %scene.id, luck, "story ended");
                        self.state = GameState::Ended(text.clone());
                    }
                    ChoiceTarget::Scene(next) => self.enter(next.clone()),
                }
                Some(luck)
            }
            (Action::Continue, Progression::Continue(next)) => {
                debug!(scene = %scene.id, next = %next, "continue");
                self.enter(next.clone());
                None
            }
            (Action::Choose(_), _) => {
                return Err(EngineError::UnexpectedAction(
                    "this scene has no choices; continue instead",
                ));
            }
            (Action::Continue, _) => {
                return Err(EngineError::UnexpectedAction(
                    "this scene needs a choice",
                ));
            }
        };

        self.turn += 1;
        Ok(self.transition(luck))
    }

    /// Apply a stimulus only if it answers the presentation of `turn`.
    ///
    /// A second click on an already-handled presentation arrives with an old
    /// turn number and is rejected without touching the session.
    pub fn submit_for_turn(&mut self, turn: u64, action: Action) -> EngineResult<Transition> {
        if turn != self.turn {
            return Err(EngineError::StaleTurn {
                got: turn,
                current: self.turn,
            });
        }
        self.submit(action)
    }

    /// Throw away all progress and start over from the configured start.
    pub fn restart(&mut self) {
        let turn = self.turn + 1;
        *self = Self::new(Arc::clone(&self.store), self.config.clone());
        self.turn = turn;
        info!(start = %self.config.start, "session restarted");
    }

    /// Present the current state through `renderer`.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match &self.state {
            GameState::Playing(id) => match self.store.get(id.as_str()) {
                Some(scene) => {
                    renderer.present_scene(&self.view(scene));
                    if scene.next_scene().is_some() {
                        renderer.present_continue(self.turn);
                    }
                }
                None => renderer.present_error(&format!("scene {id} not found")),
            },
            GameState::Ended(text) => renderer.present_ending(text),
            GameState::Error(message) => renderer.present_error(message),
        }
    }

    /// Build the renderer view of a scene.
    pub fn view<'a>(&self, scene: &'a Scene) -> SceneView<'a> {
        SceneView {
            id: &scene.id,
            title: &scene.title,
            description: &scene.description,
            choices: scene
                .choices()
                .iter()
                .map(|c| ChoiceView {
                    label: &c.text,
                    luck_delta: self.config.reveal_deltas.then_some(c.luck_delta),
                })
                .collect(),
            turn: self.turn,
        }
    }

    fn enter(&mut self, id: SceneId) {
        self.state = match self.store.get(id.as_str()) {
            None => {
                warn!(scene = %id, "scene not found");
                GameState::Error(format!("scene {id} not found"))
            }
            Some(scene) if scene.progression == Progression::DeadEnd => {
                warn!(scene = %id, "scene has no way forward");
                GameState::Error(format!("scene {id} has no way forward"))
            }
            Some(_) => {
                self.history.push(id.clone());
                GameState::Playing(id)
            }
        };
    }

    fn transition(&self, luck: Option<i32>) -> Transition {
        Transition {
            luck,
            state: self.state.clone(),
        }
    }
}
