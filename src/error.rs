use std::fmt;

/// Failure conditions surfaced by engine operations. Every failure
/// leaves the ledger and registry untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A non-owner invoked an owner-only setter.
    Unauthorized,
    /// The submitted move was `Move::None`.
    InvalidMove,
    /// The caller or the named opponent already has an open game in
    /// the way; the payload names which side conflicted.
    GameConflict(&'static str),
    /// Earnings-funded stake exceeds the balance, or the external
    /// token transfer reported failure.
    InsufficientFunds,
    /// One-sided game and the deadline has not elapsed yet.
    NotReady,
    /// The caller has no open game with the named opponent.
    NoActiveGame,
    /// A governance setter was given a zero value.
    InvalidParameter,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unauthorized => write!(f, "caller is not the owner"),
            Error::InvalidMove => {
                write!(f, "move must be rock, paper or scissors")
            }
            Error::GameConflict(reason) => {
                write!(f, "conflicting open game: {reason}")
            }
            Error::InsufficientFunds => {
                write!(f, "insufficient funds to cover the bet fee")
            }
            Error::NotReady => {
                write!(f, "can't finish yet: opponent hasn't moved and the deadline hasn't elapsed")
            }
            Error::NoActiveGame => {
                write!(f, "no active game with that opponent")
            }
            Error::InvalidParameter => {
                write!(f, "parameter value must be positive")
            }
        }
    }
}

impl std::error::Error for Error {}
