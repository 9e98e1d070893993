//! Move representation shared by generation, validation, and notation.

use std::fmt;

use crate::game_state::shogi_types::{PieceKind, Square};

/// A candidate or played move: either relocating a piece already on the
/// board or dropping one from the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShogiMove {
    Board {
        from: Square,
        to: Square,
        promote: bool,
    },
    Drop {
        kind: PieceKind,
        to: Square,
    },
}

impl ShogiMove {
    #[inline]
    pub const fn to(self) -> Square {
        match self {
            ShogiMove::Board { to, .. } | ShogiMove::Drop { to, .. } => to,
        }
    }

    #[inline]
    pub const fn is_drop(self) -> bool {
        matches!(self, ShogiMove::Drop { .. })
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, ShogiMove::Board { promote: true, .. })
    }
}

impl fmt::Display for ShogiMove {
    /// USI notation: `7g7f`, `2d2c+` for promotions, `G*5b` for drops.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShogiMove::Board { from, to, promote } => {
                write!(f, "{from}{to}{}", if *promote { "+" } else { "" })
            }
            ShogiMove::Drop { kind, to } => write!(f, "{}*{to}", kind.sfen_char()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ShogiMove;
    use crate::game_state::shogi_types::{PieceKind, Square};

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).expect("test square")
    }

    #[test]
    fn display_matches_puzzle_notation() {
        let push = ShogiMove::Board {
            from: sq(7, 7),
            to: sq(7, 6),
            promote: false,
        };
        assert_eq!(push.to_string(), "7g7f");

        let promoting = ShogiMove::Board {
            from: sq(2, 4),
            to: sq(2, 3),
            promote: true,
        };
        assert_eq!(promoting.to_string(), "2d2c+");

        let drop = ShogiMove::Drop {
            kind: PieceKind::Gold,
            to: sq(5, 2),
        };
        assert_eq!(drop.to_string(), "G*5b");
    }
}
