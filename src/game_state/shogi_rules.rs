//! Canonical shogi-rule constants and optional-rule configuration.
//!
//! This module stores static rule-related literals such as the standard
//! starting position SFEN and the fixed material set used to validate
//! conservation, plus the toggles for the traditional drop restrictions.

use crate::game_state::shogi_types::PieceKind;

/// Standard shogi starting position in SFEN.
pub const STARTING_POSITION_SFEN: &str =
    "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

/// Fixed piece census of a full game, both colors combined, counted by base
/// kind (promoted pieces count under their base kind).
pub const STARTING_COUNTS: [(PieceKind, u8); 8] = [
    (PieceKind::King, 2),
    (PieceKind::Rook, 2),
    (PieceKind::Bishop, 2),
    (PieceKind::Gold, 4),
    (PieceKind::Silver, 4),
    (PieceKind::Knight, 4),
    (PieceKind::Lance, 4),
    (PieceKind::Pawn, 18),
];

/// Number of ranks in each player's promotion zone, measured from the
/// opponent's back rank.
pub const PROMOTION_ZONE_DEPTH: u8 = 3;

/// Switches for the traditional drop restrictions.
///
/// Both default to enforced; [`RuleToggles::lenient`] switches both off for
/// casual play and puzzle import. Dead-square drops (a pawn, lance, or
/// knight dropped where it could never move) are illegal under every
/// profile and are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleToggles {
    /// Forbid dropping a pawn on a file that already holds an unpromoted
    /// pawn of the same color (nifu).
    pub forbid_nifu: bool,
    /// Forbid a pawn drop that delivers immediate checkmate (uchifuzume).
    pub forbid_uchifuzume: bool,
}

impl Default for RuleToggles {
    fn default() -> Self {
        RuleToggles {
            forbid_nifu: true,
            forbid_uchifuzume: true,
        }
    }
}

impl RuleToggles {
    /// Profile with both traditional drop restrictions switched off.
    pub const fn lenient() -> Self {
        RuleToggles {
            forbid_nifu: false,
            forbid_uchifuzume: false,
        }
    }
}
