use crate::{
    AccountId,
    Amount,
    TOKEN_UNIT,
    clock::ManualClock,
    config::{
        DEFAULT_BET_FEE,
        DEFAULT_DEADLINE_SECS,
        EngineConfig,
    },
    engine::RpsEngine,
    token::{
        InMemoryToken,
        TokenContract,
    },
};

pub const STARTING_BALANCE: Amount = 1_000 * TOKEN_UNIT;

const OWNER: AccountId = AccountId::new([0x0f; 32]);
const ALICE: AccountId = AccountId::new([0xa1; 32]);
const BOB: AccountId = AccountId::new([0xb0; 32]);
const CAROL: AccountId = AccountId::new([0xca; 32]);
const ENGINE: AccountId = AccountId::new([0xee; 32]);

/// Engine wired to the in-memory token and a manual clock, with a
/// funded cast of named accounts. The context keeps handles to the
/// token and clock it handed the engine, so tests can mint, approve
/// and advance time from outside.
pub struct TestContext {
    pub engine: RpsEngine<InMemoryToken, ManualClock>,
    token: InMemoryToken,
    clock: ManualClock,
}

impl TestContext {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TestContextBuilder {
        TestContextBuilder {
            bet_fee: DEFAULT_BET_FEE,
            deadline_secs: DEFAULT_DEADLINE_SECS,
            starting_balance: STARTING_BALANCE,
        }
    }

    pub fn owner(&self) -> AccountId {
        OWNER
    }

    pub fn alice(&self) -> AccountId {
        ALICE
    }

    pub fn bob(&self) -> AccountId {
        BOB
    }

    pub fn carol(&self) -> AccountId {
        CAROL
    }

    pub fn token(&self) -> &InMemoryToken {
        &self.token
    }

    /// Grant the engine an allowance to pull stakes from `account`.
    pub fn approve_stake(&mut self, account: AccountId, amount: Amount) {
        let engine_account = self.engine.engine_account();
        self.token.approve(account, engine_account, amount);
    }

    pub fn mint(&self, account: AccountId, amount: Amount) {
        self.token.mint(account, amount);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.clock.advance_secs(secs);
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TestContextBuilder {
    bet_fee: Amount,
    deadline_secs: i64,
    starting_balance: Amount,
}

impl TestContextBuilder {
    pub fn with_bet_fee(mut self, bet_fee: Amount) -> Self {
        self.bet_fee = bet_fee;
        self
    }

    pub fn with_deadline_secs(mut self, deadline_secs: i64) -> Self {
        self.deadline_secs = deadline_secs;
        self
    }

    pub fn with_starting_balance(mut self, starting_balance: Amount) -> Self {
        self.starting_balance = starting_balance;
        self
    }

    pub fn build(self) -> TestContext {
        let token = InMemoryToken::new();
        for account in [OWNER, ALICE, BOB, CAROL] {
            token.mint(account, self.starting_balance);
        }
        let clock = ManualClock::starting_at_epoch();
        let config = EngineConfig::new(OWNER, ENGINE)
            .with_bet_fee(self.bet_fee)
            .with_deadline_secs(self.deadline_secs);
        let engine = RpsEngine::new(config, token.clone(), clock.clone())
            .expect("test config is valid");
        TestContext {
            engine,
            token,
            clock,
        }
    }
}
