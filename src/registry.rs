use crate::AccountId;
use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::HashMap;

/// A player's hand. `None` is the unset default and never a legal
/// submitted move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    #[default]
    None,
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Cyclic dominance: Rock beats Scissors, Scissors beats Paper,
    /// Paper beats Rock.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

/// An account's currently active challenge: who it targets, the open
/// move, and when it was created (the forced-resolution deadline
/// counts from here).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenGame {
    pub opponent: AccountId,
    pub mv: Move,
    pub created_at: DateTime<Utc>,
}

/// Per-account record of at most one open game. A match between A and
/// B exists only implicitly, when each side's record names the other.
#[derive(Clone, Debug, Default)]
pub struct GameRegistry {
    games: HashMap<AccountId, OpenGame>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_game(&self, account: AccountId) -> Option<&OpenGame> {
        self.games.get(&account)
    }

    pub fn insert(&mut self, account: AccountId, game: OpenGame) {
        self.games.insert(account, game);
    }

    pub fn clear(&mut self, account: AccountId) -> Option<OpenGame> {
        self.games.remove(&account)
    }

    /// True when `account`'s open game names `opponent`.
    pub fn is_challenging(&self, account: AccountId, opponent: AccountId) -> bool {
        self.open_game(account)
            .is_some_and(|game| game.opponent == opponent)
    }
}
