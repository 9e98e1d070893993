//! Static movement templates and display metadata per piece kind.
//!
//! This is the piece catalog: a pure lookup from (kind, promoted) to the
//! relative step vectors and slide directions that drive move generation,
//! plus the kanji/romaji metadata the renderer shows.
//!
//! Vectors are oriented for Sente, whose forward direction is toward rank 1
//! (negative rank delta). Gote pieces use the same templates rotated 180
//! degrees by the generator.

use crate::game_state::shogi_types::PieceKind;

/// Movement template: one-shot step vectors plus slide directions that are
/// walked until blocked.
#[derive(Debug, Clone, Copy)]
pub struct MovePattern {
    pub steps: &'static [(i8, i8)],
    pub slides: &'static [(i8, i8)],
}

const KING_STEPS: &[(i8, i8)] = &[
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const GOLD_STEPS: &[(i8, i8)] = &[(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (0, 1)];

const SILVER_STEPS: &[(i8, i8)] = &[(-1, -1), (0, -1), (1, -1), (-1, 1), (1, 1)];

const KNIGHT_STEPS: &[(i8, i8)] = &[(-1, -2), (1, -2)];

const PAWN_STEPS: &[(i8, i8)] = &[(0, -1)];

const ORTHOGONAL: &[(i8, i8)] = &[(0, -1), (0, 1), (-1, 0), (1, 0)];

const DIAGONAL: &[(i8, i8)] = &[(-1, -1), (1, -1), (-1, 1), (1, 1)];

const FORWARD_SLIDE: &[(i8, i8)] = &[(0, -1)];

const NO_VECTORS: &[(i8, i8)] = &[];

/// Look up the movement template for a piece.
///
/// Promoted silver, knight, lance, and pawn all move as gold. The dragon
/// (promoted rook) and horse (promoted bishop) keep their slides and gain
/// the one-step vectors of the other diagonal/orthogonal set. King and gold
/// have no promoted form; the flag is ignored for them.
pub fn movement_pattern(kind: PieceKind, promoted: bool) -> MovePattern {
    match (kind, promoted) {
        (PieceKind::King, _) => MovePattern {
            steps: KING_STEPS,
            slides: NO_VECTORS,
        },
        (PieceKind::Gold, _) => MovePattern {
            steps: GOLD_STEPS,
            slides: NO_VECTORS,
        },
        (PieceKind::Rook, false) => MovePattern {
            steps: NO_VECTORS,
            slides: ORTHOGONAL,
        },
        (PieceKind::Rook, true) => MovePattern {
            steps: DIAGONAL,
            slides: ORTHOGONAL,
        },
        (PieceKind::Bishop, false) => MovePattern {
            steps: NO_VECTORS,
            slides: DIAGONAL,
        },
        (PieceKind::Bishop, true) => MovePattern {
            steps: ORTHOGONAL,
            slides: DIAGONAL,
        },
        (PieceKind::Silver, false) => MovePattern {
            steps: SILVER_STEPS,
            slides: NO_VECTORS,
        },
        (PieceKind::Knight, false) => MovePattern {
            steps: KNIGHT_STEPS,
            slides: NO_VECTORS,
        },
        (PieceKind::Lance, false) => MovePattern {
            steps: NO_VECTORS,
            slides: FORWARD_SLIDE,
        },
        (PieceKind::Pawn, false) => MovePattern {
            steps: PAWN_STEPS,
            slides: NO_VECTORS,
        },
        (PieceKind::Silver | PieceKind::Knight | PieceKind::Lance | PieceKind::Pawn, true) => {
            MovePattern {
                steps: GOLD_STEPS,
                slides: NO_VECTORS,
            }
        }
    }
}

/// Kanji glyph shown on the board renderer.
pub fn kanji(kind: PieceKind, promoted: bool) -> char {
    match (kind, promoted) {
        (PieceKind::King, _) => '玉',
        (PieceKind::Rook, false) => '飛',
        (PieceKind::Rook, true) => '龍',
        (PieceKind::Bishop, false) => '角',
        (PieceKind::Bishop, true) => '馬',
        (PieceKind::Gold, _) => '金',
        (PieceKind::Silver, false) => '銀',
        (PieceKind::Silver, true) => '全',
        (PieceKind::Knight, false) => '桂',
        (PieceKind::Knight, true) => '圭',
        (PieceKind::Lance, false) => '香',
        (PieceKind::Lance, true) => '杏',
        (PieceKind::Pawn, false) => '歩',
        (PieceKind::Pawn, true) => 'と',
    }
}

/// Romaji piece name.
pub fn romaji(kind: PieceKind, promoted: bool) -> &'static str {
    match (kind, promoted) {
        (PieceKind::King, _) => "Gyoku",
        (PieceKind::Rook, false) => "Hisha",
        (PieceKind::Rook, true) => "Ryuo",
        (PieceKind::Bishop, false) => "Kakugyo",
        (PieceKind::Bishop, true) => "Ryuma",
        (PieceKind::Gold, _) => "Kinsho",
        (PieceKind::Silver, false) => "Ginsho",
        (PieceKind::Silver, true) => "Narigin",
        (PieceKind::Knight, false) => "Keima",
        (PieceKind::Knight, true) => "Narikei",
        (PieceKind::Lance, false) => "Kyosha",
        (PieceKind::Lance, true) => "Narikyo",
        (PieceKind::Pawn, false) => "Fuhyo",
        (PieceKind::Pawn, true) => "Tokin",
    }
}

#[cfg(test)]
mod tests {
    use super::movement_pattern;
    use crate::game_state::shogi_types::PieceKind;

    #[test]
    fn gold_template_has_six_steps_and_no_slides() {
        let pattern = movement_pattern(PieceKind::Gold, false);
        assert_eq!(pattern.steps.len(), 6);
        assert!(pattern.slides.is_empty());
    }

    #[test]
    fn promoted_minor_pieces_move_as_gold() {
        let gold = movement_pattern(PieceKind::Gold, false);
        for kind in [
            PieceKind::Silver,
            PieceKind::Knight,
            PieceKind::Lance,
            PieceKind::Pawn,
        ] {
            let promoted = movement_pattern(kind, true);
            assert_eq!(promoted.steps, gold.steps);
            assert!(promoted.slides.is_empty());
        }
    }

    #[test]
    fn dragon_merges_rook_slides_with_diagonal_steps() {
        let dragon = movement_pattern(PieceKind::Rook, true);
        assert_eq!(dragon.slides.len(), 4);
        assert_eq!(dragon.steps.len(), 4);
        assert!(dragon.steps.contains(&(-1, -1)));
        assert!(dragon.slides.contains(&(0, 1)));
    }

    #[test]
    fn knight_jumps_two_ranks_forward() {
        let knight = movement_pattern(PieceKind::Knight, false);
        assert_eq!(knight.steps, &[(-1, -2), (1, -2)]);
    }
}
