//! Crate root module declarations for the Shogi rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! promotion/drop rules, SFEN handling, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod shogi_errors;

pub mod game_state {
    pub mod game_state;
    pub mod shogi_game;
    pub mod shogi_rules;
    pub mod shogi_types;
}

pub mod moves {
    pub mod move_description;
    pub mod move_patterns;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod promotion;
    pub mod pseudo_moves;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod coordinates;
    pub mod kif;
    pub mod render_game_state;
    pub mod sfen_generator;
    pub mod sfen_parser;
}
