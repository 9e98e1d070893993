//! Engine abstraction layer.
//!
//! Defines the minimal interface a move-selecting strategy needs so the
//! binary and test harnesses can drive different engines behind one trait.

use crate::game_state::shogi_game::ShogiGame;
use crate::moves::move_description::ShogiMove;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Reset any internal state before a fresh game.
    fn new_game(&mut self) {}

    /// Pick a move for the side to move, or `None` when no legal move
    /// exists or the game is over.
    fn choose_move(&mut self, game: &ShogiGame) -> Option<ShogiMove>;
}
