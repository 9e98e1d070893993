//! Turn-taking game controller.
//!
//! `ShogiGame` owns the single mutable position, exposes the public
//! move/drop/resign API, and recomputes the check/checkmate status from a
//! full legal-move enumeration after every successful mutation. All
//! failures are non-mutating; a terminal status freezes the game.

use crate::game_state::game_state::GameState;
use crate::game_state::shogi_rules::RuleToggles;
use crate::game_state::shogi_types::{Color, GameStatus, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, legal_destinations, legal_drops, validate_board_move, validate_drop,
};
use crate::moves::move_description::ShogiMove;
use crate::shogi_errors::{ShogiError, ShogiResult};

#[derive(Debug, Clone)]
pub struct ShogiGame {
    state: GameState,
    status: GameStatus,
    rules: RuleToggles,
}

impl Default for ShogiGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ShogiGame {
    /// Standard opening layout, traditional rules.
    pub fn new() -> Self {
        Self::from_state(GameState::new_game(), RuleToggles::default())
    }

    /// Standard opening layout with explicit rule toggles.
    pub fn with_rules(rules: RuleToggles) -> Self {
        Self::from_state(GameState::new_game(), rules)
    }

    /// Import a position. Fails with `MalformedRecord` on a bad SFEN; the
    /// caller decides whether to fall back to a default position.
    pub fn from_sfen(sfen: &str) -> ShogiResult<Self> {
        Self::from_sfen_with_rules(sfen, RuleToggles::default())
    }

    pub fn from_sfen_with_rules(sfen: &str, rules: RuleToggles) -> ShogiResult<Self> {
        Ok(Self::from_state(GameState::from_sfen(sfen)?, rules))
    }

    fn from_state(state: GameState, rules: RuleToggles) -> Self {
        let mut game = ShogiGame {
            state,
            status: GameStatus::Ongoing,
            rules,
        };
        // An imported position may already be check or mate.
        game.refresh_status();
        game
    }

    // --- Queries ---

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.state.piece_at(square)
    }

    #[inline]
    pub fn hand_count(&self, color: Color, kind: PieceKind) -> u8 {
        self.state.hand(color).count(kind)
    }

    /// All hand entries for `color` in canonical order, zeroes included.
    pub fn hand_counts(&self, color: Color) -> Vec<(PieceKind, u8)> {
        self.state.hand(color).entries().collect()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn move_number(&self) -> u16 {
        self.state.move_number
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn rules(&self) -> RuleToggles {
        self.rules
    }

    #[inline]
    pub fn to_sfen(&self) -> String {
        self.state.to_sfen()
    }

    /// Legal destination squares for the piece on `square`.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        legal_destinations(&self.state, square)
    }

    /// Legal `(kind, square)` drops for `color`.
    pub fn legal_drops(&self, color: Color) -> Vec<(PieceKind, Square)> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        legal_drops(&self.state, self.rules, color)
    }

    // --- Mutators ---

    /// Relocate the side-to-move's piece, optionally promoting. On failure
    /// the game is left exactly as before.
    pub fn make_move(&mut self, from: Square, to: Square, promote: bool) -> ShogiResult<()> {
        self.ensure_ongoing()?;
        self.state = validate_board_move(&self.state, from, to, promote)?;
        self.refresh_status();
        Ok(())
    }

    /// Drop a piece from the side-to-move's hand onto an empty square.
    pub fn drop_piece(&mut self, kind: PieceKind, to: Square) -> ShogiResult<()> {
        self.ensure_ongoing()?;
        self.state = validate_drop(&self.state, self.rules, kind, to)?;
        self.refresh_status();
        Ok(())
    }

    /// Apply a move in either form; used by replay and engine drivers.
    pub fn play(&mut self, shogi_move: ShogiMove) -> ShogiResult<()> {
        match shogi_move {
            ShogiMove::Board { from, to, promote } => self.make_move(from, to, promote),
            ShogiMove::Drop { kind, to } => self.drop_piece(kind, to),
        }
    }

    /// Concede the game for the current mover. A no-op once the game is
    /// already over.
    pub fn resign(&mut self) {
        if !self.status.is_terminal() {
            self.status = GameStatus::Resigned(self.state.side_to_move);
        }
    }

    fn ensure_ongoing(&self) -> ShogiResult<()> {
        if self.status.is_terminal() {
            Err(ShogiError::TerminalStateViolation(self.status))
        } else {
            Ok(())
        }
    }

    /// Recompute the status for the side now on move. A side with no legal
    /// move at all has lost, whether or not it is in check; shogi has no
    /// stalemate draw.
    fn refresh_status(&mut self) {
        let mover = self.state.side_to_move;
        if generate_legal_moves(&self.state, self.rules).is_empty() {
            self.status = GameStatus::Checkmate(mover);
        } else if is_king_in_check(&self.state, mover) {
            self.status = GameStatus::Check(mover);
        } else {
            self.status = GameStatus::Ongoing;
        }
    }
}
