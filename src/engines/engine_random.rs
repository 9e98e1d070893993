//! Uniform random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for
//! diagnostics, playout-based property tests, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::shogi_game::ShogiGame;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_description::ShogiMove;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game: &ShogiGame) -> Option<ShogiMove> {
        if game.status().is_terminal() {
            return None;
        }

        let legal = generate_legal_moves(game.state(), game.rules());
        let mut rng = rand::rng();
        legal
            .as_slice()
            .choose(&mut rng)
            .map(|generated| generated.shogi_move)
    }
}
