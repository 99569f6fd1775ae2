use crate::{
    AccountId,
    registry::GameRegistry,
};
use std::fmt;

/// Human-readable standing of the pair (caller, opponent), derived
/// purely from registry contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NoGame,
    OpponentHasntMoved,
    YouHaventMoved,
    ReadyToFinish,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::NoGame => "no game",
            GameStatus::OpponentHasntMoved => "opponent hasn't moved",
            GameStatus::YouHaventMoved => "you haven't moved yet",
            GameStatus::ReadyToFinish => "ready to finish",
        };
        write!(f, "{text}")
    }
}

pub fn report(
    registry: &GameRegistry,
    caller: AccountId,
    opponent: AccountId,
) -> GameStatus {
    let caller_moved = registry.is_challenging(caller, opponent);
    let opponent_moved = registry.is_challenging(opponent, caller);
    match (caller_moved, opponent_moved) {
        (false, false) => GameStatus::NoGame,
        (true, false) => GameStatus::OpponentHasntMoved,
        (false, true) => GameStatus::YouHaventMoved,
        (true, true) => GameStatus::ReadyToFinish,
    }
}
