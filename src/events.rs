use crate::{
    AccountId,
    Amount,
    engine::Outcome,
    registry::Move,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Events emitted by mutating engine operations, for observers and
/// tests. Drained via [`crate::RpsEngine::take_events`].
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    ParameterChanged(ParameterChangedEvent),
    GameCreated(GameCreatedEvent),
    GameFinished(GameFinishedEvent),
    EarningsWithdrawn(EarningsWithdrawnEvent),
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Parameter {
    BetFee(Amount),
    DeadlineSecs(i64),
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct ParameterChangedEvent {
    pub changed_by: AccountId,
    pub parameter: Parameter,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct GameCreatedEvent {
    pub player: AccountId,
    pub opponent: AccountId,
    pub mv: Move,
    pub staked_from_winnings: bool,
    pub bet_fee: Amount,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct GameFinishedEvent {
    pub player: AccountId,
    pub opponent: AccountId,
    pub outcome: Outcome,
    /// One of the three fixed messages, phrased from the caller's
    /// perspective.
    pub message: String,
    pub forced: bool,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct EarningsWithdrawnEvent {
    pub account: AccountId,
    pub amount: Amount,
}

impl Event {
    pub fn parameter_changed(changed_by: AccountId, parameter: Parameter) -> Self {
        Event::ParameterChanged(ParameterChangedEvent {
            changed_by,
            parameter,
        })
    }

    pub fn game_created(
        player: AccountId,
        opponent: AccountId,
        mv: Move,
        staked_from_winnings: bool,
        bet_fee: Amount,
    ) -> Self {
        Event::GameCreated(GameCreatedEvent {
            player,
            opponent,
            mv,
            staked_from_winnings,
            bet_fee,
        })
    }

    pub fn game_finished(
        player: AccountId,
        opponent: AccountId,
        outcome: Outcome,
        forced: bool,
    ) -> Self {
        Event::GameFinished(GameFinishedEvent {
            player,
            opponent,
            outcome,
            message: outcome.message().to_string(),
            forced,
        })
    }

    pub fn earnings_withdrawn(account: AccountId, amount: Amount) -> Self {
        Event::EarningsWithdrawn(EarningsWithdrawnEvent { account, amount })
    }
}
