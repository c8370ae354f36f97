//! Round state machine
//!
//! menu -> playing -> gameOver | won; terminal states can restart or fall
//! back to the menu. Entering `Playing` always re-initializes the round.

use crate::Outcome;

/// Round states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Menu,
    Playing,
    GameOver,
    Won,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    /// Start a round from the menu
    Start,
    /// Start a fresh round from a terminal screen
    Restart,
    /// Back to the menu from a terminal screen
    Reset,
    /// Collision outcome ended the round
    Ended(Outcome),
}

impl RoundPhase {
    pub fn new() -> Self {
        RoundPhase::Menu
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: RoundAction) -> bool {
        self.next(action).is_some()
    }

    /// Attempt a transition; returns false and stays put if illegal
    pub fn transition(&mut self, action: RoundAction) -> bool {
        match self.next(action) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    fn next(&self, action: RoundAction) -> Option<RoundPhase> {
        match (self, action) {
            (RoundPhase::Menu, RoundAction::Start) => Some(RoundPhase::Playing),
            (RoundPhase::Playing, RoundAction::Ended(Outcome::Won)) => Some(RoundPhase::Won),
            (RoundPhase::Playing, RoundAction::Ended(Outcome::Eaten)) => Some(RoundPhase::GameOver),
            (RoundPhase::GameOver | RoundPhase::Won, RoundAction::Restart) => {
                Some(RoundPhase::Playing)
            }
            (RoundPhase::GameOver | RoundPhase::Won, RoundAction::Reset) => Some(RoundPhase::Menu),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, RoundPhase::Playing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundPhase::GameOver | RoundPhase::Won)
    }
}

impl Default for RoundPhase {
    fn default() -> Self {
        Self::new()
    }
}
