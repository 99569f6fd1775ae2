use crate::{
    AccountId,
    Amount,
    Error,
    Result,
};
use chrono::Duration;

/// Process-wide governance values. Read by every game operation, so a
/// successful change applies to games that are already open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parameters {
    owner: AccountId,
    bet_fee: Amount,
    deadline: Duration,
}

impl Parameters {
    pub fn new(owner: AccountId, bet_fee: Amount, deadline: Duration) -> Result<Self> {
        if bet_fee == 0 || deadline <= Duration::zero() {
            return Err(Error::InvalidParameter);
        }
        Ok(Self {
            owner,
            bet_fee,
            deadline,
        })
    }

    pub fn owner(&self) -> AccountId {
        self.owner
    }

    pub fn bet_fee(&self) -> Amount {
        self.bet_fee
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub fn set_bet_fee(&mut self, caller: AccountId, amount: Amount) -> Result<()> {
        self.require_owner(caller)?;
        if amount == 0 {
            return Err(Error::InvalidParameter);
        }
        self.bet_fee = amount;
        Ok(())
    }

    pub fn set_deadline(&mut self, caller: AccountId, deadline: Duration) -> Result<()> {
        self.require_owner(caller)?;
        if deadline <= Duration::zero() {
            return Err(Error::InvalidParameter);
        }
        self.deadline = deadline;
        Ok(())
    }

    fn require_owner(&self, caller: AccountId) -> Result<()> {
        if caller != self.owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
