#![allow(non_snake_case)]

use chrono::Duration;
use rps_engine::{
    AccountId,
    Error,
    Move,
    TOKEN_UNIT,
    clock::SystemClock,
    config::EngineConfig,
    events::{
        Event,
        Parameter,
    },
    RpsEngine,
    test_helpers::TestContext,
    token::InMemoryToken,
};

#[test]
fn set_bet_fee__non_owner_is_unauthorized_and_unchanged() {
    let mut ctx = TestContext::new();
    let alice = ctx.alice();

    let result = ctx.engine.set_bet_fee(alice, 5 * TOKEN_UNIT);

    assert_eq!(result, Err(Error::Unauthorized));
    assert_eq!(ctx.engine.bet_fee(), TOKEN_UNIT);
}

#[test]
fn set_deadline__non_owner_is_unauthorized_and_unchanged() {
    let mut ctx = TestContext::new();
    let bob = ctx.bob();

    let result = ctx.engine.set_deadline(bob, Duration::seconds(10));

    assert_eq!(result, Err(Error::Unauthorized));
    assert_eq!(ctx.engine.deadline(), Duration::seconds(90));
}

#[test]
fn set_bet_fee__rejects_zero() {
    let mut ctx = TestContext::new();
    let owner = ctx.owner();

    let result = ctx.engine.set_bet_fee(owner, 0);

    assert_eq!(result, Err(Error::InvalidParameter));
    assert_eq!(ctx.engine.bet_fee(), TOKEN_UNIT);
}

#[test]
fn set_deadline__rejects_zero() {
    let mut ctx = TestContext::new();
    let owner = ctx.owner();

    let result = ctx.engine.set_deadline(owner, Duration::zero());

    assert_eq!(result, Err(Error::InvalidParameter));
    assert_eq!(ctx.engine.deadline(), Duration::seconds(90));
}

#[test]
fn set_bet_fee__applies_to_subsequent_creates() {
    let mut ctx = TestContext::new();
    let (owner, alice, bob) = (ctx.owner(), ctx.alice(), ctx.bob());
    ctx.approve_stake(alice, 2 * TOKEN_UNIT);

    ctx.engine.set_bet_fee(owner, 2 * TOKEN_UNIT).unwrap();
    ctx.engine
        .create_game(alice, bob, Move::Rock, false)
        .unwrap();

    assert_eq!(ctx.engine.escrowed_total(), 2 * TOKEN_UNIT);
    assert_eq!(ctx.engine.get_balance(), 2 * TOKEN_UNIT);
}

#[test]
fn set_bet_fee__open_games_pay_out_at_current_fee() {
    let mut ctx = TestContext::new();
    let (owner, alice, bob) = (ctx.owner(), ctx.alice(), ctx.bob());
    ctx.approve_stake(alice, TOKEN_UNIT);
    ctx.approve_stake(bob, TOKEN_UNIT);
    ctx.engine
        .create_game(alice, bob, Move::Rock, false)
        .unwrap();
    ctx.engine
        .create_game(bob, alice, Move::Scissors, false)
        .unwrap();

    // when: the fee changes after both stakes were captured
    ctx.engine.set_bet_fee(owner, 3 * TOKEN_UNIT).unwrap();
    ctx.engine.finish_game(alice, bob).unwrap();

    // then: resolution reads the current fee, not a per-game snapshot
    assert_eq!(ctx.engine.earnings_of(alice), 6 * TOKEN_UNIT);
}

#[test]
fn set_deadline__lengthening_holds_open_games_back() {
    let mut ctx = TestContext::builder().with_deadline_secs(30).build();
    let (owner, alice, bob) = (ctx.owner(), ctx.alice(), ctx.bob());
    ctx.approve_stake(alice, TOKEN_UNIT);
    ctx.engine
        .create_game(alice, bob, Move::Rock, false)
        .unwrap();

    // when: the deadline grows while the challenge sits unanswered
    ctx.engine
        .set_deadline(owner, Duration::seconds(300))
        .unwrap();
    ctx.advance_secs(30);

    // then: the old deadline no longer applies
    assert_eq!(ctx.engine.finish_game(alice, bob), Err(Error::NotReady));
}

#[test]
fn setters__emit_parameter_changed_events() {
    let mut ctx = TestContext::new();
    let owner = ctx.owner();

    ctx.engine.set_bet_fee(owner, 2 * TOKEN_UNIT).unwrap();
    ctx.engine
        .set_deadline(owner, Duration::seconds(120))
        .unwrap();

    let events = ctx.engine.take_events();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0],
        Event::parameter_changed(owner, Parameter::BetFee(2 * TOKEN_UNIT))
    );
    assert_eq!(
        events[1],
        Event::parameter_changed(owner, Parameter::DeadlineSecs(120))
    );
}

#[test]
fn engine__rejects_zero_fee_config() {
    let owner = AccountId::new([0x11; 32]);
    let engine_account = AccountId::new([0x22; 32]);
    let config = EngineConfig::new(owner, engine_account).with_bet_fee(0);

    let result = RpsEngine::new(config, InMemoryToken::new(), SystemClock);

    assert!(matches!(result, Err(Error::InvalidParameter)));
}
