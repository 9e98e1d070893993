//! Core position representation.
//!
//! `GameState` is the central model for the engine: a 9x9 mailbox of
//! optional pieces, the two hands, the side to move, and the move counter.
//! It carries no rule knowledge of its own; generation and validation code
//! reads it, and only move application and the game controller write it.

use crate::game_state::shogi_rules::STARTING_POSITION_SFEN;
use crate::game_state::shogi_types::{Color, Hand, Piece, Square};
use crate::shogi_errors::ShogiResult;
use crate::utils::sfen_generator::generate_sfen;
use crate::utils::sfen_parser::parse_sfen;

/// A complete shogi position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Board squares indexed `[rank_index][file_index]`; rank index 0 is
    /// rank 1 (the top row, SFEN rank `a`).
    pub board: [[Option<Piece>; 9]; 9],

    /// Captured-piece pools indexed by `Color::index()`.
    pub hands: [Hand; 2],

    pub side_to_move: Color,

    /// One-based move counter, incremented after every move or drop.
    pub move_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            board: [[None; 9]; 9],
            hands: [Hand::default(); 2],
            side_to_move: Color::Sente,
            move_number: 1,
        }
    }
}

impl GameState {
    /// Empty board, empty hands, Sente to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard opening layout.
    #[inline]
    pub fn new_game() -> Self {
        parse_sfen(STARTING_POSITION_SFEN).expect("starting SFEN should always parse")
    }

    #[inline]
    pub fn from_sfen(sfen: &str) -> ShogiResult<Self> {
        parse_sfen(sfen)
    }

    #[inline]
    pub fn to_sfen(&self) -> String {
        generate_sfen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.rank_index()][square.file_index()]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.rank_index()][square.file_index()] = piece;
    }

    #[inline]
    pub fn hand(&self, color: Color) -> &Hand {
        &self.hands[color.index()]
    }

    #[inline]
    pub fn hand_mut(&mut self, color: Color) -> &mut Hand {
        &mut self.hands[color.index()]
    }

    /// All occupied squares belonging to `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.color == color)
                .map(|piece| (square, piece))
        })
    }

    /// Per-base-kind totals across the board and both hands, indexed by
    /// `PieceKind::index()`. Promoted pieces count under their base kind.
    /// Drives the conservation property: this census never changes across
    /// legal mutations of a position.
    pub fn material_census(&self) -> [u8; 8] {
        let mut census = [0u8; 8];

        for square in Square::all() {
            if let Some(piece) = self.piece_at(square) {
                census[piece.kind.index()] += 1;
            }
        }

        for hand in &self.hands {
            for (kind, count) in hand.entries() {
                census[kind.index()] += count;
            }
        }

        census
    }
}
