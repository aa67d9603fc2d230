use crate::errors::GameError;
use crate::player::{Player, Symbol};

/// The two registered players in a game plus whose turn it currently is.
/// Slot 0 is the first registrant and holds `Symbol::X`; slot 1 holds
/// `Symbol::O`.
#[derive(Debug, Clone, Default)]
pub struct Participants {
    slots: [Option<Player>; 2],
    active: Option<usize>,
}

impl Participants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player to the first free slot and returns the symbol bound to
    /// that slot. Rejects without mutating when the roster is full, the name
    /// is empty, or the name is already taken (case-sensitive).
    pub fn register(&mut self, name: &str) -> Result<Symbol, GameError> {
        if self.is_full() {
            return Err(GameError::SessionFull);
        }
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if self.name_in_use(name) {
            return Err(GameError::NameInUse);
        }
        let slot = if self.slots[0].is_none() { 0 } else { 1 };
        self.slots[slot] = Some(Player::new(name));
        Ok(symbol_for_slot(slot))
    }

    pub fn name_in_use(&self, name: &str) -> bool {
        self.slots
            .iter()
            .flatten()
            .any(|player| player.name() == name)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Both slot names in registration order, `None` for an empty slot.
    pub fn names(&self) -> (Option<&str>, Option<&str>) {
        (
            self.slots[0].as_ref().map(Player::name),
            self.slots[1].as_ref().map(Player::name),
        )
    }

    /// Display form of the roster, e.g. `[alice, None]`.
    pub fn roster(&self) -> String {
        let fmt = |slot: &Option<Player>| match slot {
            Some(player) => player.name().to_string(),
            None => "None".to_string(),
        };
        format!("[{}, {}]", fmt(&self.slots[0]), fmt(&self.slots[1]))
    }

    pub fn symbol_for(&self, name: &str) -> Option<Symbol> {
        self.slots.iter().enumerate().find_map(|(slot, player)| {
            player
                .as_ref()
                .filter(|p| p.name() == name)
                .map(|_| symbol_for_slot(slot))
        })
    }

    /// Gives the first turn to the first registrant. Only takes effect once
    /// the roster is full and while no active player has been set, so a late
    /// call cannot clobber a game in progress.
    pub fn set_initial_active(&mut self) {
        if self.active.is_none() && self.is_full() {
            self.active = Some(0);
        }
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.active.and_then(|slot| self.slots[slot].as_ref())
    }

    /// False rather than an error when the turn is unset or the name is
    /// unknown.
    pub fn is_active(&self, name: &str) -> bool {
        self.active_player()
            .is_some_and(|player| player.name() == name)
    }

    /// Swaps the active player between the two slots and returns the new
    /// active player.
    pub fn toggle_active(&mut self) -> Result<&Player, GameError> {
        let Some(active) = self.active else {
            return Err(GameError::ToggleWithoutActiveSet);
        };
        if !self.is_full() {
            return Err(GameError::ToggleWithoutTwoPlayers);
        }
        let next = 1 - active;
        self.active = Some(next);
        self.slots[next]
            .as_ref()
            .ok_or(GameError::ToggleWithoutTwoPlayers)
    }

    pub fn reset(&mut self) {
        self.slots = [None, None];
        self.active = None;
    }
}

fn symbol_for_slot(slot: usize) -> Symbol {
    if slot == 0 {
        Symbol::X
    } else {
        Symbol::O
    }
}
