use c5_engine::errors::GameError;
use c5_engine::game::{GameSession, MoveOutcome, TurnAssignment};
use c5_engine::logger::{GameLogger, MoveRecord};
use c5_engine::player::Symbol;
use c5_engine::rules::GameRules;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tokio::sync::Notify;
use uuid::Uuid;

/// The single process-wide game session, shared between request handlers.
///
/// All board and roster state lives behind one mutex so concurrent move
/// requests are serialized; two simultaneous lowest-empty-row lookups can
/// never double-occupy a cell. Registration wakes waiters parked in
/// [`SharedSession::initial_assignment`] through a [`Notify`] instead of
/// busy-waiting.
#[derive(Debug)]
pub struct SharedSession {
    game_id: String,
    state: Mutex<SessionState>,
    roster_changed: Notify,
}

#[derive(Debug)]
struct SessionState {
    game: GameSession,
    logger: Option<GameLogger>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("session lock poisoned")]
    LockPoisoned,
}

impl SharedSession {
    pub fn new(rules: GameRules) -> Self {
        Self::with_logger(rules, None)
    }

    pub fn with_logger(rules: GameRules, logger: Option<GameLogger>) -> Self {
        Self {
            game_id: Uuid::new_v4().to_string(),
            state: Mutex::new(SessionState {
                game: GameSession::new(rules),
                logger,
            }),
            roster_changed: Notify::new(),
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionState>, SessionError> {
        self.state.lock().map_err(|_| SessionError::LockPoisoned)
    }

    pub fn register(&self, name: &str) -> Result<(), SessionError> {
        {
            let mut state = self.lock()?;
            state.game.register(name)?;
        }
        self.roster_changed.notify_waiters();
        Ok(())
    }

    /// Resolves once two players are registered. The notification interest is
    /// enabled before the roster is checked, so a registration landing
    /// between the check and the await cannot be missed.
    pub async fn initial_assignment(&self, name: &str) -> Result<TurnAssignment, SessionError> {
        loop {
            let notified = self.roster_changed.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            {
                let mut state = self.lock()?;
                if let Some(assignment) = state.game.initial_assignment(name) {
                    return Ok(assignment);
                }
            }
            notified.await;
        }
    }

    pub fn is_active(&self, name: &str) -> Result<Option<bool>, SessionError> {
        Ok(self.lock()?.game.is_active(name))
    }

    pub fn make_move(&self, column: usize, symbol: Symbol) -> Result<MoveOutcome, SessionError> {
        let mut state = self.lock()?;
        let outcome = state.game.apply_move(column, symbol)?;

        let game_id = self.game_id.clone();
        if let Some(logger) = state.logger.as_mut() {
            let record = MoveRecord {
                game_id,
                seq: logger.next_seq(),
                column,
                row: outcome.row,
                symbol,
                winner: outcome.winner,
                ts: None,
            };
            if let Err(err) = logger.write(&record) {
                log::warn!("failed to write move log: {}", err);
            }
        }
        Ok(outcome)
    }

    pub fn has_winner(&self) -> Result<bool, SessionError> {
        Ok(self.lock()?.game.check_winner())
    }

    pub fn render_board(&self) -> Result<String, SessionError> {
        Ok(self.lock()?.game.render_board())
    }

    pub fn roster(&self) -> Result<String, SessionError> {
        Ok(self.lock()?.game.roster())
    }

    pub fn reset(&self) -> Result<(), SessionError> {
        self.lock()?.game.reset();
        Ok(())
    }
}
