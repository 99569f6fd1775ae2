use crate::{
    AccountId,
    Amount,
    Error,
    Result,
    clock::Clock,
    config::EngineConfig,
    events::{
        Event,
        Parameter,
    },
    ledger::EarningsLedger,
    params::Parameters,
    registry::{
        GameRegistry,
        Move,
        OpenGame,
    },
    status::{
        self,
        GameStatus,
    },
    token::TokenContract,
};
use chrono::Duration;
use serde::{
    Deserialize,
    Serialize,
};

/// Result of a finished game, from the caller's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win => "you win",
            Outcome::Lose => "you lose",
            Outcome::Draw => "draw",
        }
    }
}

/// The wagering core. Actors only ever call this type; it reads and
/// writes the registry, moves value through the ledger, and consults
/// the parameter store for the current fee and deadline.
///
/// `&mut self` on every mutating operation serializes state changes;
/// no operation suspends internally. Internal bookkeeping always
/// completes before the external token call is issued, and a failed
/// token call rolls the already-applied bookkeeping back, so no
/// failure leaves partial state behind.
pub struct RpsEngine<Token, Time> {
    account: AccountId,
    params: Parameters,
    ledger: EarningsLedger,
    registry: GameRegistry,
    token: Token,
    clock: Time,
    events: Vec<Event>,
}

impl<Token, Time> RpsEngine<Token, Time>
where
    Token: TokenContract,
    Time: Clock,
{
    pub fn new(config: EngineConfig, token: Token, clock: Time) -> Result<Self> {
        let params = Parameters::new(
            config.owner,
            config.bet_fee,
            Duration::seconds(config.deadline_secs),
        )?;
        Ok(Self {
            account: config.engine_account,
            params,
            ledger: EarningsLedger::new(),
            registry: GameRegistry::new(),
            token,
            clock,
            events: Vec::new(),
        })
    }

    pub fn owner(&self) -> AccountId {
        self.params.owner()
    }

    /// The engine's own custody account in the external token.
    pub fn engine_account(&self) -> AccountId {
        self.account
    }

    pub fn bet_fee(&self) -> Amount {
        self.params.bet_fee()
    }

    pub fn deadline(&self) -> Duration {
        self.params.deadline()
    }

    /// The engine's token balance: stakes in escrow plus earnings not
    /// yet withdrawn. Read-only diagnostic.
    pub fn get_balance(&self) -> Amount {
        self.token.balance_of(self.account)
    }

    pub fn earnings_of(&self, account: AccountId) -> Amount {
        self.ledger.earnings_of(account)
    }

    pub fn escrowed_total(&self) -> Amount {
        self.ledger.escrowed_total()
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }

    /// Drain the events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn set_bet_fee(&mut self, caller: AccountId, amount: Amount) -> Result<()> {
        self.params.set_bet_fee(caller, amount)?;
        let event = Event::parameter_changed(caller, Parameter::BetFee(amount));
        tracing::info!("parameter changed: {:?}", event);
        self.events.push(event);
        Ok(())
    }

    pub fn set_deadline(&mut self, caller: AccountId, deadline: Duration) -> Result<()> {
        self.params.set_deadline(caller, deadline)?;
        let event = Event::parameter_changed(
            caller,
            Parameter::DeadlineSecs(deadline.num_seconds()),
        );
        tracing::info!("parameter changed: {:?}", event);
        self.events.push(event);
        Ok(())
    }

    /// Open a game against `opponent`, escrowing the current bet fee.
    /// `use_winnings` debits the caller's earnings instead of pulling
    /// the stake from the external token.
    pub fn create_game(
        &mut self,
        caller: AccountId,
        opponent: AccountId,
        mv: Move,
        use_winnings: bool,
    ) -> Result<()> {
        if mv == Move::None {
            return Err(Error::InvalidMove);
        }
        if caller == opponent {
            return Err(Error::GameConflict("cannot challenge yourself"));
        }
        if self.registry.open_game(caller).is_some() {
            return Err(Error::GameConflict("caller already has an open game"));
        }
        if let Some(theirs) = self.registry.open_game(opponent) {
            if theirs.opponent != caller {
                return Err(Error::GameConflict("opponent is engaged elsewhere"));
            }
        }

        let fee = self.params.bet_fee();
        if use_winnings {
            self.ledger.debit(caller, fee)?;
        }

        // Effects settle before the external interaction.
        self.ledger.escrow(fee);
        self.registry.insert(
            caller,
            OpenGame {
                opponent,
                mv,
                created_at: self.clock.now(),
            },
        );

        if !use_winnings {
            let pulled = self.token.transfer_from(self.account, caller, self.account, fee);
            if !pulled {
                // Undo so the failure is all-or-nothing.
                self.registry.clear(caller);
                self.ledger.release(fee);
                tracing::warn!("stake pull failed for {caller}, state rolled back");
                return Err(Error::InsufficientFunds);
            }
        }

        let event = Event::game_created(caller, opponent, mv, use_winnings, fee);
        tracing::info!("game created: {:?}", event);
        self.events.push(event);
        Ok(())
    }

    /// Resolve the caller's game with `opponent`. Immediate once both
    /// sides have moved; one-sided games resolve as a forced win for
    /// the caller only after the current deadline has elapsed.
    pub fn finish_game(&mut self, caller: AccountId, opponent: AccountId) -> Result<Outcome> {
        let Some(mine) = self.registry.open_game(caller).copied() else {
            return Err(Error::NoActiveGame);
        };
        if mine.opponent != opponent {
            return Err(Error::NoActiveGame);
        }

        let fee = self.params.bet_fee();
        let theirs = self
            .registry
            .open_game(opponent)
            .copied()
            .filter(|game| game.opponent == caller);

        let (outcome, forced) = match theirs {
            Some(theirs) => {
                let outcome = if mine.mv == theirs.mv {
                    Outcome::Draw
                } else if mine.mv.beats(theirs.mv) {
                    Outcome::Win
                } else {
                    Outcome::Lose
                };
                let pot = fee.saturating_mul(2);
                match outcome {
                    Outcome::Win => self.ledger.credit(caller, pot),
                    Outcome::Lose => self.ledger.credit(opponent, pot),
                    Outcome::Draw => {
                        self.ledger.credit(caller, fee);
                        self.ledger.credit(opponent, fee);
                    }
                }
                self.ledger.release(pot);
                self.registry.clear(caller);
                self.registry.clear(opponent);
                (outcome, false)
            }
            None => {
                let elapsed = self.clock.now() - mine.created_at;
                if elapsed < self.params.deadline() {
                    return Err(Error::NotReady);
                }
                // Forced win: only the caller's stake was ever
                // escrowed, so that is all the ledger pays out.
                self.ledger.credit(caller, fee);
                self.ledger.release(fee);
                self.registry.clear(caller);
                (Outcome::Win, true)
            }
        };

        let event = Event::game_finished(caller, opponent, outcome, forced);
        tracing::info!("game finished: {:?}", event);
        self.events.push(event);
        Ok(outcome)
    }

    /// View of the pair's standing, computed purely from the registry.
    pub fn game_status(&self, caller: AccountId, opponent: AccountId) -> GameStatus {
        status::report(&self.registry, caller, opponent)
    }

    pub fn get_opponent(&self, caller: AccountId) -> Option<AccountId> {
        self.registry.open_game(caller).map(|game| game.opponent)
    }

    /// Transfer the caller's full earnings balance out and reset it to
    /// zero. A zero balance is a no-op, not an error, and issues no
    /// external transfer.
    pub fn withdraw(&mut self, caller: AccountId) -> Result<Amount> {
        let amount = self.ledger.take_all(caller);
        if amount == 0 {
            return Ok(0);
        }
        if !self.token.transfer(self.account, caller, amount) {
            self.ledger.credit(caller, amount);
            tracing::warn!("withdrawal transfer failed for {caller}, state rolled back");
            return Err(Error::InsufficientFunds);
        }
        let event = Event::earnings_withdrawn(caller, amount);
        tracing::info!("earnings withdrawn: {:?}", event);
        self.events.push(event);
        Ok(amount)
    }
}
