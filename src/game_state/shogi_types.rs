//! Core type definitions for the Shogi position model.
//!
//! Pieces are stored as a base kind plus a promotion flag so captures can
//! demote back to the base kind without any lookup table.

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::shogi_game::ShogiGame;

/// Side to move. Sente moves first and plays "up" the board toward rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Sente,
    Gote,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Sente => 0,
            Color::Gote => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Sente => Color::Gote,
            Color::Gote => Color::Sente,
        }
    }

    /// SFEN side-to-move letter (`b` for Sente, `w` for Gote).
    #[inline]
    pub const fn sfen_char(self) -> char {
        match self {
            Color::Sente => 'b',
            Color::Gote => 'w',
        }
    }
}

/// Base piece kind. Promotion status lives on [`Piece`], not here, so a
/// captured dragon and a captured rook are the same hand entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Rook,
    Bishop,
    Gold,
    Silver,
    Knight,
    Lance,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 8] = [
        PieceKind::King,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Pawn,
    ];

    /// Hand slot ordering, strongest first; also the canonical ordering of
    /// the SFEN hand field.
    pub const HAND_ORDER: [PieceKind; 7] = [
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Pawn,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Rook => 1,
            PieceKind::Bishop => 2,
            PieceKind::Gold => 3,
            PieceKind::Silver => 4,
            PieceKind::Knight => 5,
            PieceKind::Lance => 6,
            PieceKind::Pawn => 7,
        }
    }

    /// Slot in a [`Hand`]. The king is never captured and has no slot.
    #[inline]
    pub const fn hand_index(self) -> Option<usize> {
        match self {
            PieceKind::King => None,
            PieceKind::Rook => Some(0),
            PieceKind::Bishop => Some(1),
            PieceKind::Gold => Some(2),
            PieceKind::Silver => Some(3),
            PieceKind::Knight => Some(4),
            PieceKind::Lance => Some(5),
            PieceKind::Pawn => Some(6),
        }
    }

    /// King and gold have no promoted form.
    #[inline]
    pub const fn is_promotable(self) -> bool {
        !matches!(self, PieceKind::King | PieceKind::Gold)
    }

    /// Uppercase SFEN letter for the unpromoted kind.
    #[inline]
    pub const fn sfen_char(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Gold => 'G',
            PieceKind::Silver => 'S',
            PieceKind::Knight => 'N',
            PieceKind::Lance => 'L',
            PieceKind::Pawn => 'P',
        }
    }

    /// Decode an SFEN piece letter. Uppercase is Sente, lowercase Gote.
    pub fn from_sfen_char(ch: char) -> Option<(Color, PieceKind)> {
        let color = if ch.is_ascii_uppercase() {
            Color::Sente
        } else {
            Color::Gote
        };
        let kind = match ch.to_ascii_uppercase() {
            'K' => PieceKind::King,
            'R' => PieceKind::Rook,
            'B' => PieceKind::Bishop,
            'G' => PieceKind::Gold,
            'S' => PieceKind::Silver,
            'N' => PieceKind::Knight,
            'L' => PieceKind::Lance,
            'P' => PieceKind::Pawn,
            _ => return None,
        };
        Some((color, kind))
    }
}

/// A piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub promoted: bool,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            promoted: false,
            color,
        }
    }

    /// SFEN spelling of this piece, including the `+` promotion prefix.
    pub fn sfen(self) -> String {
        let letter = match self.color {
            Color::Sente => self.kind.sfen_char(),
            Color::Gote => self.kind.sfen_char().to_ascii_lowercase(),
        };
        if self.promoted {
            format!("+{letter}")
        } else {
            letter.to_string()
        }
    }
}

/// Board coordinate.
///
/// Files run 9..=1 left to right and ranks 1..=9 top to bottom, matching
/// traditional notation: rank 1 is SFEN rank `a` (Gote's back rank) and
/// square `11` is the top-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Checked constructor; both coordinates must be in `1..=9`.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Square> {
        if file >= 1 && file <= 9 && rank >= 1 && rank <= 9 {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Zero-based index into a `[_; 9]` file dimension.
    #[inline]
    pub const fn file_index(self) -> usize {
        (self.file - 1) as usize
    }

    /// Zero-based index into a `[_; 9]` rank dimension.
    #[inline]
    pub const fn rank_index(self) -> usize {
        (self.rank - 1) as usize
    }

    /// Translate by a raw delta, returning `None` off the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (1..=9).contains(&file) && (1..=9).contains(&rank) {
            Square::new(file as u8, rank as u8)
        } else {
            None
        }
    }

    /// Every board square, rank 1 to rank 9, file 9 to file 1 within a rank
    /// (the order SFEN writes them).
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=9u8).flat_map(|rank| {
            (1..=9u8)
                .rev()
                .map(move |file| Square { file, rank })
        })
    }
}

/// USI spelling: file digit then rank letter, so `Square::new(7, 6)` prints
/// as `7f`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, char::from(b'a' + self.rank - 1))
    }
}

/// A player's pool of captured pieces, keyed by unpromoted base kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hand {
    counts: [u8; 7],
}

impl Hand {
    #[inline]
    pub fn count(&self, kind: PieceKind) -> u8 {
        match kind.hand_index() {
            Some(slot) => self.counts[slot],
            None => 0,
        }
    }

    /// Add one captured piece. Kings are never captured; adding one is a
    /// no-op rather than a representable state.
    #[inline]
    pub fn add(&mut self, kind: PieceKind) {
        if let Some(slot) = kind.hand_index() {
            self.counts[slot] = self.counts[slot].saturating_add(1);
        }
    }

    /// Remove one piece, saturating at zero.
    #[inline]
    pub fn remove(&mut self, kind: PieceKind) {
        if let Some(slot) = kind.hand_index() {
            self.counts[slot] = self.counts[slot].saturating_sub(1);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Kinds and counts in canonical hand order, zero entries included.
    pub fn entries(&self) -> impl Iterator<Item = (PieceKind, u8)> + '_ {
        PieceKind::HAND_ORDER
            .iter()
            .map(move |&kind| (kind, self.count(kind)))
    }
}

/// Game-controller state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The named color's king is attacked but the game continues.
    Check(Color),
    /// The named color is mated (or has no legal move at all); terminal.
    Checkmate(Color),
    /// The named color resigned; terminal.
    Resigned(Color),
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Resigned(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check(c) => write!(f, "{c:?} is in check"),
            GameStatus::Checkmate(c) => write!(f, "{c:?} is checkmated"),
            GameStatus::Resigned(c) => write!(f, "{c:?} resigned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Hand, PieceKind, Piece, Square};

    #[test]
    fn square_constructor_rejects_out_of_range() {
        assert!(Square::new(0, 5).is_none());
        assert!(Square::new(10, 5).is_none());
        assert!(Square::new(5, 0).is_none());
        assert!(Square::new(9, 9).is_some());
    }

    #[test]
    fn square_offset_stays_on_board() {
        let corner = Square::new(1, 1).expect("11 is a square");
        assert!(corner.offset(-1, 0).is_none());
        assert!(corner.offset(0, -1).is_none());
        assert_eq!(corner.offset(1, 1), Square::new(2, 2));
    }

    #[test]
    fn sfen_letters_round_trip_for_both_colors() {
        for kind in PieceKind::ALL {
            let upper = kind.sfen_char();
            assert_eq!(
                PieceKind::from_sfen_char(upper),
                Some((Color::Sente, kind))
            );
            assert_eq!(
                PieceKind::from_sfen_char(upper.to_ascii_lowercase()),
                Some((Color::Gote, kind))
            );
        }
        assert_eq!(PieceKind::from_sfen_char('q'), None);
    }

    #[test]
    fn hand_saturates_and_ignores_kings() {
        let mut hand = Hand::default();
        hand.remove(PieceKind::Pawn);
        assert_eq!(hand.count(PieceKind::Pawn), 0);

        hand.add(PieceKind::King);
        assert!(hand.is_empty());

        hand.add(PieceKind::Gold);
        hand.add(PieceKind::Gold);
        assert_eq!(hand.count(PieceKind::Gold), 2);
    }

    #[test]
    fn promoted_piece_sfen_has_prefix() {
        let mut piece = Piece::new(PieceKind::Pawn, Color::Gote);
        assert_eq!(piece.sfen(), "p");
        piece.promoted = true;
        assert_eq!(piece.sfen(), "+p");
    }
}
