use crate::{
    AccountId,
    Amount,
};
use std::{
    collections::HashMap,
    sync::{
        Arc,
        Mutex,
    },
};

/// External token the engine escrows stakes in. The execution
/// substrate's implicit sender has no in-process equivalent, so every
/// call names its caller explicitly. Methods return a success flag;
/// the engine maps failure onto `Error::InsufficientFunds`.
pub trait TokenContract {
    /// Move `amount` from `from` to `to`, spending `spender`'s
    /// allowance granted by `from`.
    fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> bool;

    /// Move `amount` out of `from`'s own balance.
    fn transfer(&mut self, from: AccountId, to: AccountId, amount: Amount) -> bool;

    /// Let `spender` pull up to `amount` from `owner`.
    fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) -> bool;

    fn balance_of(&self, account: AccountId) -> Amount;
}

/// Reference token for tests and local runs: balances and allowances
/// in shared maps. Handles are cheap clones over the same state, so a
/// test can keep one for assertions while the engine owns another.
#[derive(Clone, Default)]
pub struct InMemoryToken {
    balances: Arc<Mutex<HashMap<AccountId, Amount>>>,
    allowances: Arc<Mutex<HashMap<(AccountId, AccountId), Amount>>>,
}

impl InMemoryToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&self, account: AccountId, amount: Amount) {
        let mut balances = self.balances.lock().unwrap();
        *balances.entry(account).or_default() += amount;
    }

    pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Amount {
        let allowances = self.allowances.lock().unwrap();
        allowances.get(&(owner, spender)).copied().unwrap_or(0)
    }
}

impl TokenContract for InMemoryToken {
    fn transfer_from(
        &mut self,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> bool {
        let mut allowances = self.allowances.lock().unwrap();
        let Some(allowance) = allowances.get_mut(&(from, spender)) else {
            return false;
        };
        if *allowance < amount {
            return false;
        }
        let mut balances = self.balances.lock().unwrap();
        let from_balance = balances.get(&from).copied().unwrap_or(0);
        if from_balance < amount {
            return false;
        }
        *allowance -= amount;
        balances.insert(from, from_balance - amount);
        *balances.entry(to).or_default() += amount;
        true
    }

    fn transfer(&mut self, from: AccountId, to: AccountId, amount: Amount) -> bool {
        let mut balances = self.balances.lock().unwrap();
        let from_balance = balances.get(&from).copied().unwrap_or(0);
        if from_balance < amount {
            return false;
        }
        balances.insert(from, from_balance - amount);
        *balances.entry(to).or_default() += amount;
        true
    }

    fn approve(&mut self, owner: AccountId, spender: AccountId, amount: Amount) -> bool {
        let mut allowances = self.allowances.lock().unwrap();
        allowances.insert((owner, spender), amount);
        true
    }

    fn balance_of(&self, account: AccountId) -> Amount {
        let balances = self.balances.lock().unwrap();
        balances.get(&account).copied().unwrap_or(0)
    }
}
