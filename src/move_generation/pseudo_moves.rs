//! Pure geometric destination generation.
//!
//! Walks a piece's movement template over the board with no check awareness:
//! steps are emitted once, slides run until the board edge or the first
//! occupied square (included only as a capture), and the knight jump ignores
//! interposition entirely.

use crate::game_state::game_state::GameState;
use crate::game_state::shogi_types::{Color, Square};
use crate::moves::move_patterns::movement_pattern;

/// Rotate a Sente-oriented template vector for the moving color.
#[inline]
fn oriented(color: Color, vector: (i8, i8)) -> (i8, i8) {
    match color {
        Color::Sente => vector,
        Color::Gote => (-vector.0, -vector.1),
    }
}

/// Geometric destinations for the piece on `from`.
///
/// Squares holding a same-color piece are excluded; squares holding an
/// opposing piece are included as captures. An empty `from` yields an empty
/// set.
pub fn piece_destinations(state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = state.piece_at(from) else {
        return Vec::new();
    };

    let pattern = movement_pattern(piece.kind, piece.promoted);
    let mut out = Vec::with_capacity(16);

    for &vector in pattern.steps {
        let (d_file, d_rank) = oriented(piece.color, vector);
        if let Some(to) = from.offset(d_file, d_rank) {
            match state.piece_at(to) {
                Some(blocker) if blocker.color == piece.color => {}
                _ => out.push(to),
            }
        }
    }

    for &vector in pattern.slides {
        let (d_file, d_rank) = oriented(piece.color, vector);
        let mut cursor = from;

        while let Some(to) = cursor.offset(d_file, d_rank) {
            match state.piece_at(to) {
                None => {
                    out.push(to);
                    cursor = to;
                }
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(to);
                    }
                    break;
                }
            }
        }
    }

    out
}
