//! Renderer-facing driver and shared session handle.

use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use crate::error::{EngineError, EngineResult};
use crate::renderer::Renderer;
use crate::session::{Action, GameSession, Transition};

/// A session wired to the renderer that presents it.
///
/// Every accepted stimulus is followed by a luck report (when luck was
/// touched) and a fresh presentation of the new state.
#[derive(Debug)]
pub struct Game<R> {
    session: GameSession,
    renderer: R,
}

impl<R: Renderer> Game<R> {
    /// Pair a session with a renderer.
    pub fn new(session: GameSession, renderer: R) -> Self {
        Self { session, renderer }
    }

    /// Present the initial luck and state.
    pub fn start(&mut self) {
        self.renderer.report_luck(self.session.luck());
        self.session.render(&mut self.renderer);
    }

    /// Apply a stimulus and present the result.
    pub fn submit(&mut self, action: Action) -> EngineResult<Transition> {
        let transition = self.session.submit(action)?;
        self.present(&transition);
        Ok(transition)
    }

    /// Apply a stimulus addressed to a specific presentation turn.
    pub fn submit_for_turn(&mut self, turn: u64, action: Action) -> EngineResult<Transition> {
        let transition = self.session.submit_for_turn(turn, action)?;
        self.present(&transition);
        Ok(transition)
    }

    /// Start over and present the first scene again.
    pub fn restart(&mut self) {
        self.session.restart();
        self.start();
    }

    /// The underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Tear the game down and hand back its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn present(&mut self, transition: &Transition) {
        if let Some(luck) = transition.luck {
            self.renderer.report_luck(luck);
        }
        self.session.render(&mut self.renderer);
    }
}

/// A cloneable handle to one game, for presentation layers that deliver
/// stimuli from several places.
///
/// Stimuli never wait for each other: one that arrives while another
/// transition is running is rejected with [`EngineError::Busy`].
#[derive(Debug)]
pub struct SessionHandle<R> {
    inner: Arc<Mutex<Game<R>>>,
}

impl<R> Clone for SessionHandle<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Renderer> SessionHandle<R> {
    /// Share a game.
    pub fn new(game: Game<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    /// Apply a stimulus unless another one is in flight.
    pub fn try_submit(&self, action: Action) -> EngineResult<Transition> {
        self.try_lock()?.submit(action)
    }

    /// Apply a turn-addressed stimulus unless another one is in flight.
    pub fn try_submit_for_turn(&self, turn: u64, action: Action) -> EngineResult<Transition> {
        self.try_lock()?.submit_for_turn(turn, action)
    }

    /// Wait for exclusive access to the game.
    pub fn lock(&self) -> MutexGuard<'_, Game<R>> {
        // A panic in a renderer leaves the game itself consistent.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn try_lock(&self) -> EngineResult<MutexGuard<'_, Game<R>>> {
        match self.inner.try_lock() {
            Ok(guard) => Ok(guard),
            Err(TryLockError::Poisoned(poisoned)) => Ok(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => Err(EngineError::Busy),
        }
    }
}
