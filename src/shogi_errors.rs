//! Errors used throughout the shogi engine.
//!
//! This module defines the canonical error type returned by game logic,
//! SFEN/notation parsing, and move validation. The enum `ShogiError` is used
//! as the single error type across the crate to simplify propagation and
//! matching. Every mutation failure is non-mutating: callers receiving an
//! error hold a game in exactly the state it had before the call.

use std::error::Error;
use std::fmt;

use crate::game_state::shogi_types::GameStatus;

pub type ShogiResult<T> = Result<T, ShogiError>;

/// Unified error type for the shogi engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShogiError {
    /// A board move failed validation: no piece on the origin, wrong owner,
    /// destination not reachable, or the move would expose the own king.
    IllegalMove(String),

    /// A drop failed validation: occupied destination, empty hand slot,
    /// dead square, nifu, uchifuzume, or self-check.
    IllegalDrop(String),

    /// Promotion was requested where it is forbidden, or omitted where it
    /// is mandatory.
    InvalidPromotionRequest(String),

    /// An SFEN record or coordinate-notation string could not be decoded.
    MalformedRecord(String),

    /// A mutation was attempted after checkmate or resignation. Carries the
    /// terminal status the game is frozen in.
    TerminalStateViolation(GameStatus),
}

impl fmt::Display for ShogiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShogiError::IllegalMove(msg) => write!(f, "illegal move: {msg}"),
            ShogiError::IllegalDrop(msg) => write!(f, "illegal drop: {msg}"),
            ShogiError::InvalidPromotionRequest(msg) => {
                write!(f, "invalid promotion request: {msg}")
            }
            ShogiError::MalformedRecord(msg) => write!(f, "malformed record: {msg}"),
            ShogiError::TerminalStateViolation(status) => {
                write!(f, "game is over ({status}); no further moves are accepted")
            }
        }
    }
}

impl Error for ShogiError {}
