//! USI coordinate and move-text conversions.
//!
//! Puzzle records and the interactive binary use USI notation: a square is
//! a file digit followed by a rank letter (`7f`), a board move is two
//! squares with a trailing `+` for promotion (`7g7f`, `2d2c+`), and a drop
//! is an uppercase piece letter before a `*` (`G*5b`). These helpers
//! convert between that text and the internal move/square types.

use crate::game_state::shogi_types::{PieceKind, Square};
use crate::moves::move_description::ShogiMove;
use crate::shogi_errors::{ShogiError, ShogiResult};

fn file_digit(ch: char) -> ShogiResult<u8> {
    match ch.to_digit(10) {
        Some(value @ 1..=9) => Ok(value as u8),
        _ => Err(ShogiError::MalformedRecord(format!(
            "invalid file digit '{ch}'"
        ))),
    }
}

fn rank_letter(ch: char) -> ShogiResult<u8> {
    match ch {
        'a'..='i' => Ok(ch as u8 - b'a' + 1),
        _ => Err(ShogiError::MalformedRecord(format!(
            "invalid rank letter '{ch}'"
        ))),
    }
}

fn square_from_chars(file: char, rank: char) -> ShogiResult<Square> {
    Square::new(file_digit(file)?, rank_letter(rank)?).ok_or_else(|| {
        ShogiError::MalformedRecord(format!("square '{file}{rank}' is off the board"))
    })
}

/// Parse a USI square such as `7f` (file 7, rank 6).
pub fn parse_square(text: &str) -> ShogiResult<Square> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 2 {
        return Err(ShogiError::MalformedRecord(format!(
            "invalid square '{text}'"
        )));
    }
    square_from_chars(chars[0], chars[1])
}

#[inline]
pub fn format_square(square: Square) -> String {
    square.to_string()
}

/// Parse USI move text: `7g7f`, `2d2c+`, or `G*5b`.
pub fn parse_move_text(text: &str) -> ShogiResult<ShogiMove> {
    if let Some((kind_part, square_part)) = text.split_once('*') {
        let mut kind_chars = kind_part.chars();
        let (letter, extra) = (kind_chars.next(), kind_chars.next());
        let Some(letter) = letter else {
            return Err(ShogiError::MalformedRecord(format!(
                "drop '{text}' is missing a piece letter"
            )));
        };
        if extra.is_some() || !letter.is_ascii_uppercase() {
            return Err(ShogiError::MalformedRecord(format!(
                "invalid drop piece '{kind_part}'"
            )));
        }

        let (_, kind) = PieceKind::from_sfen_char(letter).ok_or_else(|| {
            ShogiError::MalformedRecord(format!("unrecognized piece letter '{letter}'"))
        })?;
        if kind == PieceKind::King {
            return Err(ShogiError::MalformedRecord(
                "a king cannot be dropped".to_owned(),
            ));
        }

        let to = parse_square(square_part)?;
        return Ok(ShogiMove::Drop { kind, to });
    }

    let (body, promote) = match text.strip_suffix('+') {
        Some(body) => (body, true),
        None => (text, false),
    };

    let chars: Vec<char> = body.chars().collect();
    if chars.len() != 4 {
        return Err(ShogiError::MalformedRecord(format!(
            "invalid move text '{text}'"
        )));
    }

    let from = square_from_chars(chars[0], chars[1])?;
    let to = square_from_chars(chars[2], chars[3])?;

    Ok(ShogiMove::Board { from, to, promote })
}

/// Inverse of [`parse_move_text`].
#[inline]
pub fn format_move_text(shogi_move: ShogiMove) -> String {
    shogi_move.to_string()
}
