use crate::{
    AccountId,
    Amount,
    Error,
    Result,
};
use std::collections::HashMap;

/// Internal escrow accounting: the total stake the engine currently
/// custodies and each account's withdrawable earnings. The invariant
/// the solvency tests pin down is
/// `token balance of the engine == escrowed + sum of all earnings`.
#[derive(Clone, Debug, Default)]
pub struct EarningsLedger {
    earnings: HashMap<AccountId, Amount>,
    escrowed: Amount,
}

impl EarningsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn earnings_of(&self, account: AccountId) -> Amount {
        self.earnings.get(&account).copied().unwrap_or(0)
    }

    pub fn escrowed_total(&self) -> Amount {
        self.escrowed
    }

    pub fn credit(&mut self, account: AccountId, amount: Amount) {
        *self.earnings.entry(account).or_default() += amount;
    }

    pub fn debit(&mut self, account: AccountId, amount: Amount) -> Result<()> {
        let balance = self.earnings.entry(account).or_default();
        if *balance < amount {
            return Err(Error::InsufficientFunds);
        }
        *balance -= amount;
        Ok(())
    }

    /// Zero the account's earnings, returning what was there.
    pub fn take_all(&mut self, account: AccountId) -> Amount {
        self.earnings.remove(&account).unwrap_or(0)
    }

    pub fn escrow(&mut self, amount: Amount) {
        self.escrowed += amount;
    }

    /// Release escrow on payout. Saturating: governance may raise the
    /// fee while games are open, in which case the payout exceeds what
    /// was escrowed for that game and the counter must not underflow.
    pub fn release(&mut self, amount: Amount) {
        self.escrowed = self.escrowed.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    const ALICE: AccountId = AccountId::new([0xa1; 32]);

    #[test]
    fn debit__fails_when_short_and_leaves_balance() {
        let mut ledger = EarningsLedger::new();
        ledger.credit(ALICE, 100);

        let result = ledger.debit(ALICE, 101);

        assert_eq!(result, Err(Error::InsufficientFunds));
        assert_eq!(ledger.earnings_of(ALICE), 100);
    }

    #[test]
    fn take_all__zeroes_the_balance() {
        let mut ledger = EarningsLedger::new();
        ledger.credit(ALICE, 250);

        assert_eq!(ledger.take_all(ALICE), 250);
        assert_eq!(ledger.earnings_of(ALICE), 0);
    }

    #[test]
    fn release__saturates_at_zero() {
        let mut ledger = EarningsLedger::new();
        ledger.escrow(50);

        ledger.release(80);

        assert_eq!(ledger.escrowed_total(), 0);
    }
}
