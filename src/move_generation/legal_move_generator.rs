//! Full legal move generation pipeline.
//!
//! Every candidate runs the same road: geometric destinations (or an empty
//! target square for drops), structural application onto a cloned position,
//! then rejection of any outcome that leaves the mover's own king attacked.
//! Drop candidates additionally pass the dead-square rule and the
//! configurable nifu/uchifuzume restrictions. The full enumeration is the
//! authoritative terminal-state test; it is recomputed from scratch after
//! every mutation and never cached.

use crate::game_state::game_state::GameState;
use crate::game_state::shogi_rules::RuleToggles;
use crate::game_state::shogi_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::legal_move_apply::{apply_board_move, apply_drop};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::promotion::{
    drop_square_is_dead, promotion_allowed, promotion_forced,
};
use crate::move_generation::pseudo_moves::piece_destinations;
use crate::moves::move_description::ShogiMove;
use crate::shogi_errors::{ShogiError, ShogiResult};

/// A legal move together with the position it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub shogi_move: ShogiMove,
    pub state_after: GameState,
}

/// Validate one board move for the side to move and return the successor
/// position. Checks, in order: a piece of the mover on `from`, geometric
/// reachability, promotion validity, and the self-check rule.
pub fn validate_board_move(
    state: &GameState,
    from: Square,
    to: Square,
    promote: bool,
) -> ShogiResult<GameState> {
    let piece = state
        .piece_at(from)
        .ok_or_else(|| ShogiError::IllegalMove(format!("no piece on {from}")))?;

    if piece.color != state.side_to_move {
        return Err(ShogiError::IllegalMove(format!(
            "piece on {from} belongs to the opponent"
        )));
    }

    if !piece_destinations(state, from).contains(&to) {
        return Err(ShogiError::IllegalMove(format!(
            "{} cannot reach {to} from {from}",
            piece.sfen()
        )));
    }

    if promote && !promotion_allowed(piece, from, to) {
        return Err(ShogiError::InvalidPromotionRequest(format!(
            "{} may not promote on {from}{to}",
            piece.sfen()
        )));
    }
    if !promote && promotion_forced(piece, to) {
        return Err(ShogiError::InvalidPromotionRequest(format!(
            "{} must promote when landing on {to}",
            piece.sfen()
        )));
    }

    let next = apply_board_move(state, from, to, promote)?;
    if is_king_in_check(&next, piece.color) {
        return Err(ShogiError::IllegalMove(format!(
            "{from}{to} leaves the own king in check"
        )));
    }

    Ok(next)
}

/// Validate one drop for the side to move and return the successor
/// position. Checks, in order: dead square, nifu (if enforced), occupancy
/// and hand stock, the self-check rule, and uchifuzume (if enforced).
pub fn validate_drop(
    state: &GameState,
    rules: RuleToggles,
    kind: PieceKind,
    to: Square,
) -> ShogiResult<GameState> {
    let mover = state.side_to_move;

    if drop_square_is_dead(kind, mover, to) {
        return Err(ShogiError::IllegalDrop(format!(
            "a {kind:?} dropped on {to} could never move"
        )));
    }

    if rules.forbid_nifu
        && kind == PieceKind::Pawn
        && file_has_unpromoted_pawn(state, mover, to.file())
    {
        return Err(ShogiError::IllegalDrop(format!(
            "nifu: file {} already holds an unpromoted pawn",
            to.file()
        )));
    }

    let next = apply_drop(state, kind, to)?;
    if is_king_in_check(&next, mover) {
        return Err(ShogiError::IllegalDrop(format!(
            "{}*{to} leaves the own king in check",
            kind.sfen_char()
        )));
    }

    if rules.forbid_uchifuzume
        && kind == PieceKind::Pawn
        && is_king_in_check(&next, mover.opposite())
    {
        // The mate probe must not recurse into another uchifuzume probe.
        let probe_rules = RuleToggles {
            forbid_uchifuzume: false,
            ..rules
        };
        if generate_legal_moves(&next, probe_rules).is_empty() {
            return Err(ShogiError::IllegalDrop(format!(
                "uchifuzume: P*{to} would deliver checkmate"
            )));
        }
    }

    Ok(next)
}

/// Promotion choices to enumerate for one geometric candidate.
fn promotion_options(piece: Piece, from: Square, to: Square) -> &'static [bool] {
    if !promotion_allowed(piece, from, to) {
        &[false]
    } else if promotion_forced(piece, to) {
        &[true]
    } else {
        &[false, true]
    }
}

/// Every legal move and drop for the side to move, with successor states.
pub fn generate_legal_moves(state: &GameState, rules: RuleToggles) -> Vec<GeneratedMove> {
    let mover = state.side_to_move;
    let mut legal = Vec::with_capacity(128);

    for (from, piece) in state.pieces_of(mover) {
        for to in piece_destinations(state, from) {
            for &promote in promotion_options(piece, from, to) {
                if let Ok(state_after) = validate_board_move(state, from, to, promote) {
                    legal.push(GeneratedMove {
                        shogi_move: ShogiMove::Board { from, to, promote },
                        state_after,
                    });
                }
            }
        }
    }

    for kind in PieceKind::HAND_ORDER {
        if state.hand(mover).count(kind) == 0 {
            continue;
        }
        for to in Square::all() {
            if state.piece_at(to).is_some() {
                continue;
            }
            if let Ok(state_after) = validate_drop(state, rules, kind, to) {
                legal.push(GeneratedMove {
                    shogi_move: ShogiMove::Drop { kind, to },
                    state_after,
                });
            }
        }
    }

    legal
}

/// Legal destination squares for the piece on `from`, regardless of whose
/// turn it currently is (the query temporarily gives that piece's owner the
/// move, so a rendering layer can highlight either side). Promotion choice
/// does not affect reachability, so each square appears once.
pub fn legal_destinations(state: &GameState, from: Square) -> Vec<Square> {
    let Some(piece) = state.piece_at(from) else {
        return Vec::new();
    };

    let scratch;
    let state = if piece.color == state.side_to_move {
        state
    } else {
        let mut flipped = state.clone();
        flipped.side_to_move = piece.color;
        scratch = flipped;
        &scratch
    };

    piece_destinations(state, from)
        .into_iter()
        .filter(|&to| {
            promotion_options(piece, from, to)
                .iter()
                .any(|&promote| validate_board_move(state, from, to, promote).is_ok())
        })
        .collect()
}

/// Legal `(kind, square)` drop pairs for `color`, under the same
/// turn-flipping convention as [`legal_destinations`].
pub fn legal_drops(
    state: &GameState,
    rules: RuleToggles,
    color: Color,
) -> Vec<(PieceKind, Square)> {
    let scratch;
    let state = if color == state.side_to_move {
        state
    } else {
        let mut flipped = state.clone();
        flipped.side_to_move = color;
        scratch = flipped;
        &scratch
    };

    let mut out = Vec::new();
    for kind in PieceKind::HAND_ORDER {
        if state.hand(color).count(kind) == 0 {
            continue;
        }
        for to in Square::all() {
            if state.piece_at(to).is_none() && validate_drop(state, rules, kind, to).is_ok() {
                out.push((kind, to));
            }
        }
    }
    out
}

fn file_has_unpromoted_pawn(state: &GameState, color: Color, file: u8) -> bool {
    (1..=9u8).any(|rank| {
        Square::new(file, rank)
            .and_then(|square| state.piece_at(square))
            .is_some_and(|piece| {
                piece.color == color && piece.kind == PieceKind::Pawn && !piece.promoted
            })
    })
}
