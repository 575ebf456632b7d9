//! Traversal engine for Mansion visual novels.
//!
//! Drives a story loaded by `mansion-core`: tracks the player's luck, moves
//! between scenes as choices are made, and tells a [`Renderer`] what to show.
//! A session ends in an ending text or in an error state. The only way out
//! of either is a restart.

/// Session configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Renderer-facing game driver and shared session handle.
pub mod game;
/// Parsing of typed player input.
pub mod input;
/// Player state management.
pub mod player;
/// The renderer contract.
pub mod renderer;
/// The traversal state machine.
pub mod session;

pub use config::GameConfig;
pub use error::{EngineError, EngineResult};
pub use game::{Game, SessionHandle};
pub use input::{Input, parse_input};
pub use player::{LuckTier, PlayerState};
pub use renderer::{ChoiceView, Renderer, SceneView};
pub use session::{Action, GameSession, GameState, Transition};
