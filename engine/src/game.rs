use crate::board::Board;
use crate::errors::GameError;
use crate::participants::Participants;
use crate::player::Symbol;
use crate::rules::{self, GameRules};

/// Outcome of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Row the piece landed on, 0 = bottom.
    pub row: usize,
    /// Whether the board now contains a winning run.
    pub winner: bool,
}

/// Initial turn and symbol assignment reported to a queried player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnAssignment {
    pub active: bool,
    pub symbol: Symbol,
}

/// The single authoritative game instance: one board, one roster, one set of
/// rules. All mutation goes through this type; callers are expected to
/// serialize access (see `c5-web`'s session wrapper).
#[derive(Debug)]
pub struct GameSession {
    rules: GameRules,
    board: Board,
    participants: Participants,
}

impl GameSession {
    pub fn new(rules: GameRules) -> Self {
        Self {
            rules,
            board: Board::new(rules.rows, rules.cols),
            participants: Participants::new(),
        }
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    /// Registers a new player, repairing a stale session first.
    pub fn register(&mut self, name: &str) -> Result<Symbol, GameError> {
        self.maybe_auto_reset();
        self.participants.register(name)
    }

    /// Recovers a session left in a partial or finished state: if a winner is
    /// already decided, or moves are on the board while fewer than two
    /// players are registered, everything is cleared before registration
    /// proceeds.
    pub fn maybe_auto_reset(&mut self) {
        let stale = self.check_winner()
            || (!self.board.is_empty() && !self.participants.is_full());
        if stale {
            self.reset();
        }
    }

    /// Places `symbol` in `column`, re-scans for a winner and, when the game
    /// is still open, passes the turn to the other player. A rejected move
    /// leaves both board and turn state untouched. The symbol is trusted as
    /// supplied; it is not cross-checked against the active player's slot.
    pub fn apply_move(&mut self, column: usize, symbol: Symbol) -> Result<MoveOutcome, GameError> {
        if column >= self.rules.cols {
            return Err(GameError::InvalidColumn {
                column,
                cols: self.rules.cols,
            });
        }
        let row = self.board.drop_piece(column, symbol)?;
        let winner = self.check_winner();
        if !winner {
            // Moves can land before the turn order is established (the test
            // fixtures do exactly that), so a failed toggle is not an error
            // here.
            let _ = self.participants.toggle_active();
        }
        Ok(MoveOutcome { row, winner })
    }

    pub fn check_winner(&self) -> bool {
        rules::has_winner(&self.board, self.rules.connect)
    }

    pub fn render_board(&self) -> String {
        self.board.render()
    }

    /// None until both players have registered; afterwards sets the first
    /// registrant active (if the turn is still unset) and reports whether the
    /// queried name holds the turn and which symbol it was assigned. An
    /// unknown name is reported as inactive with the second symbol, matching
    /// the roster's view of "not the first player".
    pub fn initial_assignment(&mut self, name: &str) -> Option<TurnAssignment> {
        if !self.participants.is_full() {
            return None;
        }
        self.participants.set_initial_active();
        let symbol = self.participants.symbol_for(name).unwrap_or(Symbol::O);
        Some(TurnAssignment {
            active: self.participants.is_active(name),
            symbol,
        })
    }

    /// True while an active player is set and `name` holds the turn; None
    /// when the turn has not been assigned yet.
    pub fn is_active(&self, name: &str) -> Option<bool> {
        self.participants
            .active_player()
            .map(|active| active.name() == name)
    }

    pub fn players(&self) -> (Option<&str>, Option<&str>) {
        self.participants.names()
    }

    pub fn roster(&self) -> String {
        self.participants.roster()
    }

    /// Clears board and roster together.
    pub fn reset(&mut self) {
        self.board.clear();
        self.participants.reset();
    }
}
