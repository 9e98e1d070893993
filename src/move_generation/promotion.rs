//! Promotion-zone rules.
//!
//! The zone is the three ranks nearest the opponent's edge: ranks 1-3 for
//! Sente, 7-9 for Gote. Promotion is offered when a promotable piece starts
//! or ends a move inside its zone, and is mandatory only where the
//! unpromoted piece would be left with no moves at all. Drops always place
//! the base form, so the mandatory set doubles as the dead-square set for
//! drops.

use crate::game_state::shogi_rules::PROMOTION_ZONE_DEPTH;
use crate::game_state::shogi_types::{Color, Piece, PieceKind, Square};

/// True if `square` lies inside `color`'s promotion zone.
#[inline]
pub fn in_promotion_zone(color: Color, square: Square) -> bool {
    match color {
        Color::Sente => square.rank() <= PROMOTION_ZONE_DEPTH,
        Color::Gote => square.rank() > 9 - PROMOTION_ZONE_DEPTH,
    }
}

/// True if a move of `piece` from `from` to `to` may promote: the kind has
/// a promoted form, the piece is not already promoted, and at least one
/// endpoint is inside the owner's zone.
pub fn promotion_allowed(piece: Piece, from: Square, to: Square) -> bool {
    piece.kind.is_promotable()
        && !piece.promoted
        && (in_promotion_zone(piece.color, from) || in_promotion_zone(piece.color, to))
}

/// True if promotion is mandatory on a move landing at `to`: the unpromoted
/// piece would otherwise have zero moves from there (pawn or lance on the
/// final rank, knight on the final two ranks).
pub fn promotion_forced(piece: Piece, to: Square) -> bool {
    if piece.promoted {
        return false;
    }

    let ranks_to_edge = match piece.color {
        Color::Sente => to.rank() - 1,
        Color::Gote => 9 - to.rank(),
    };

    match piece.kind {
        PieceKind::Pawn | PieceKind::Lance => ranks_to_edge == 0,
        PieceKind::Knight => ranks_to_edge <= 1,
        _ => false,
    }
}

/// True if dropping `kind` for `color` on `to` would leave it permanently
/// immobile. Such drops are illegal under every rule profile.
#[inline]
pub fn drop_square_is_dead(kind: PieceKind, color: Color, to: Square) -> bool {
    promotion_forced(Piece::new(kind, color), to)
}

#[cfg(test)]
mod tests {
    use super::{drop_square_is_dead, in_promotion_zone, promotion_allowed, promotion_forced};
    use crate::game_state::shogi_types::{Color, Piece, PieceKind, Square};

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).expect("test square")
    }

    #[test]
    fn zone_boundary_pawn_push() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Sente);

        // Rank 4 to rank 3 crosses into the zone; 5 to 4 does not.
        assert!(promotion_allowed(pawn, sq(2, 4), sq(2, 3)));
        assert!(!promotion_allowed(pawn, sq(2, 5), sq(2, 4)));
    }

    #[test]
    fn leaving_the_zone_still_offers_promotion() {
        let silver = Piece::new(PieceKind::Silver, Color::Sente);
        assert!(promotion_allowed(silver, sq(4, 3), sq(5, 4)));
    }

    #[test]
    fn king_and_gold_never_promote() {
        assert!(!promotion_allowed(
            Piece::new(PieceKind::King, Color::Sente),
            sq(5, 2),
            sq(5, 1)
        ));
        assert!(!promotion_allowed(
            Piece::new(PieceKind::Gold, Color::Gote),
            sq(5, 8),
            sq(5, 9)
        ));
    }

    #[test]
    fn already_promoted_piece_cannot_promote_again() {
        let mut tokin = Piece::new(PieceKind::Pawn, Color::Sente);
        tokin.promoted = true;
        assert!(!promotion_allowed(tokin, sq(2, 2), sq(2, 1)));
        assert!(!promotion_forced(tokin, sq(2, 1)));
    }

    #[test]
    fn forced_promotion_on_dead_ranks() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Sente);
        let lance = Piece::new(PieceKind::Lance, Color::Sente);
        let knight = Piece::new(PieceKind::Knight, Color::Sente);

        assert!(promotion_forced(pawn, sq(7, 1)));
        assert!(!promotion_forced(pawn, sq(7, 2)));
        assert!(promotion_forced(lance, sq(7, 1)));
        assert!(promotion_forced(knight, sq(7, 2)));
        assert!(promotion_forced(knight, sq(7, 1)));
        assert!(!promotion_forced(knight, sq(7, 3)));

        // Gote mirror.
        let gote_knight = Piece::new(PieceKind::Knight, Color::Gote);
        assert!(promotion_forced(gote_knight, sq(3, 8)));
        assert!(!promotion_forced(gote_knight, sq(3, 7)));
    }

    #[test]
    fn dead_drop_squares_mirror_forced_promotion() {
        assert!(drop_square_is_dead(PieceKind::Pawn, Color::Sente, sq(5, 1)));
        assert!(drop_square_is_dead(PieceKind::Knight, Color::Gote, sq(5, 9)));
        assert!(!drop_square_is_dead(PieceKind::Silver, Color::Sente, sq(5, 1)));
        assert!(!drop_square_is_dead(PieceKind::Pawn, Color::Sente, sq(5, 2)));
    }

    #[test]
    fn zone_membership_per_color() {
        assert!(in_promotion_zone(Color::Sente, sq(9, 1)));
        assert!(in_promotion_zone(Color::Sente, sq(1, 3)));
        assert!(!in_promotion_zone(Color::Sente, sq(1, 4)));
        assert!(in_promotion_zone(Color::Gote, sq(5, 7)));
        assert!(!in_promotion_zone(Color::Gote, sq(5, 6)));
    }
}
