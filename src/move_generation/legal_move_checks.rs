//! Check detection primitives.
//!
//! Attack queries are answered the authoritative (and slow) way: every
//! opposing piece's geometric move set is generated against the current
//! board and tested for the target square. Nothing here mutates state.

use crate::game_state::game_state::GameState;
use crate::game_state::shogi_types::{Color, PieceKind, Square};
use crate::move_generation::pseudo_moves::piece_destinations;

/// Locate the king of `color`, if it is on the board at all. Imported
/// puzzle positions may legitimately omit a king.
pub fn king_square(state: &GameState, color: Color) -> Option<Square> {
    state
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// True if any piece of `attacker_color` could capture on `square`.
pub fn is_square_attacked(state: &GameState, square: Square, attacker_color: Color) -> bool {
    state
        .pieces_of(attacker_color)
        .any(|(from, _)| piece_destinations(state, from).contains(&square))
}

/// True if `color`'s king is currently attacked. A side with no king on the
/// board is never in check.
pub fn is_king_in_check(state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(state, color) else {
        return false;
    };
    is_square_attacked(state, king_sq, color.opposite())
}
