//! Pure successor-state construction.
//!
//! Both functions clone the input position and return the resulting one;
//! the caller's state is never touched. Only structural preconditions are
//! checked here (a piece to move, an empty drop target, a non-empty hand
//! slot). Geometry, promotion rules, and self-check filtering live in the
//! legal move generator, which funnels every candidate through these
//! functions before judging the outcome.

use crate::game_state::game_state::GameState;
use crate::game_state::shogi_types::{Piece, PieceKind, Square};
use crate::shogi_errors::{ShogiError, ShogiResult};

/// Relocate the side-to-move's piece from `from` to `to`, capturing into
/// the mover's hand (demoted to base kind) and applying promotion. Advances
/// the turn and move counter.
pub fn apply_board_move(
    state: &GameState,
    from: Square,
    to: Square,
    promote: bool,
) -> ShogiResult<GameState> {
    let mover = state.side_to_move;
    let piece = state
        .piece_at(from)
        .ok_or_else(|| ShogiError::IllegalMove(format!("no piece on {from}")))?;

    if piece.color != mover {
        return Err(ShogiError::IllegalMove(format!(
            "piece on {from} belongs to the opponent"
        )));
    }

    let mut next = state.clone();

    if let Some(captured) = next.piece_at(to) {
        if captured.color == mover {
            return Err(ShogiError::IllegalMove(format!(
                "destination {to} holds an own piece"
            )));
        }
        // Captured pieces re-enter the pool in base form.
        next.hand_mut(mover).add(captured.kind);
    }

    next.set_piece(from, None);
    next.set_piece(
        to,
        Some(Piece {
            kind: piece.kind,
            promoted: piece.promoted || promote,
            color: mover,
        }),
    );

    next.side_to_move = mover.opposite();
    next.move_number = next.move_number.saturating_add(1);
    Ok(next)
}

/// Place one `kind` from the side-to-move's hand onto the empty square
/// `to`, always in base form. Advances the turn and move counter.
pub fn apply_drop(state: &GameState, kind: PieceKind, to: Square) -> ShogiResult<GameState> {
    let mover = state.side_to_move;

    if state.piece_at(to).is_some() {
        return Err(ShogiError::IllegalDrop(format!("{to} is occupied")));
    }
    if state.hand(mover).count(kind) == 0 {
        return Err(ShogiError::IllegalDrop(format!(
            "no {kind:?} in {mover:?}'s hand"
        )));
    }

    let mut next = state.clone();
    next.hand_mut(mover).remove(kind);
    next.set_piece(to, Some(Piece::new(kind, mover)));
    next.side_to_move = mover.opposite();
    next.move_number = next.move_number.saturating_add(1);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::{apply_board_move, apply_drop};
    use crate::game_state::game_state::GameState;
    use crate::game_state::shogi_types::{Color, Piece, PieceKind, Square};
    use crate::shogi_errors::ShogiError;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).expect("test square")
    }

    #[test]
    fn capture_demotes_into_the_hand() {
        let mut state = GameState::new_empty();
        state.set_piece(sq(5, 5), Some(Piece::new(PieceKind::Rook, Color::Sente)));
        let mut dragon = Piece::new(PieceKind::Rook, Color::Gote);
        dragon.promoted = true;
        state.set_piece(sq(5, 2), Some(dragon));

        let next = apply_board_move(&state, sq(5, 5), sq(5, 2), false).expect("capture applies");

        assert_eq!(next.hand(Color::Sente).count(PieceKind::Rook), 1);
        assert_eq!(next.side_to_move, Color::Gote);
        assert_eq!(next.move_number, state.move_number + 1);

        let landed = next.piece_at(sq(5, 2)).expect("rook landed");
        assert_eq!(landed.kind, PieceKind::Rook);
        assert!(!landed.promoted);

        // Input state untouched.
        assert!(state.piece_at(sq(5, 5)).is_some());
        assert_eq!(state.hand(Color::Sente).count(PieceKind::Rook), 0);
    }

    #[test]
    fn promotion_flag_sticks_to_the_moved_piece() {
        let mut state = GameState::new_empty();
        state.set_piece(sq(2, 4), Some(Piece::new(PieceKind::Pawn, Color::Sente)));

        let next = apply_board_move(&state, sq(2, 4), sq(2, 3), true).expect("push applies");
        let tokin = next.piece_at(sq(2, 3)).expect("pawn landed");
        assert!(tokin.promoted);
        assert_eq!(tokin.kind, PieceKind::Pawn);
    }

    #[test]
    fn moving_an_opponent_piece_is_rejected() {
        let mut state = GameState::new_empty();
        state.set_piece(sq(5, 5), Some(Piece::new(PieceKind::Gold, Color::Gote)));

        let result = apply_board_move(&state, sq(5, 5), sq(5, 4), false);
        assert!(matches!(result, Err(ShogiError::IllegalMove(_))));
    }

    #[test]
    fn drop_requires_an_empty_square_and_a_stocked_hand() {
        let mut state = GameState::new_empty();
        state.set_piece(sq(5, 5), Some(Piece::new(PieceKind::Pawn, Color::Gote)));

        let occupied = apply_drop(&state, PieceKind::Gold, sq(5, 5));
        assert!(matches!(occupied, Err(ShogiError::IllegalDrop(_))));

        let empty_hand = apply_drop(&state, PieceKind::Gold, sq(4, 4));
        assert!(matches!(empty_hand, Err(ShogiError::IllegalDrop(_))));

        state.hand_mut(Color::Sente).add(PieceKind::Gold);
        let next = apply_drop(&state, PieceKind::Gold, sq(4, 4)).expect("drop applies");
        assert_eq!(next.hand(Color::Sente).count(PieceKind::Gold), 0);
        let dropped = next.piece_at(sq(4, 4)).expect("gold dropped");
        assert!(!dropped.promoted);
    }
}
