//! Terminal-oriented board renderer.
//!
//! Creates a human-readable view of a position for debugging, tests, and
//! the interactive binary. Pieces are shown with their kanji glyphs, Gote
//! pieces prefixed with `v` in the usual terminal convention, and both
//! hands are summarized below the grid.

use crate::game_state::game_state::GameState;
use crate::game_state::shogi_types::{Color, Hand, Square};
use crate::moves::move_patterns::kanji;

/// Render the position to a multi-line string for terminal output.
pub fn render_game_state(state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  9  8  7  6  5  4  3  2  1\n");

    for rank in 1..=9u8 {
        for file in (1..=9u8).rev() {
            let square = Square::new(file, rank).expect("coordinates are in 1..=9");
            match state.piece_at(square) {
                Some(piece) => {
                    out.push(match piece.color {
                        Color::Sente => ' ',
                        Color::Gote => 'v',
                    });
                    out.push(kanji(piece.kind, piece.promoted));
                }
                None => out.push_str(" ・"),
            }
        }
        out.push(' ');
        out.push(char::from(b'a' + rank - 1));
        out.push('\n');
    }

    out.push_str(&hand_line("Sente", state.hand(Color::Sente)));
    out.push('\n');
    out.push_str(&hand_line("Gote", state.hand(Color::Gote)));

    out
}

fn hand_line(label: &str, hand: &Hand) -> String {
    let mut line = format!("{label} hand:");

    if hand.is_empty() {
        line.push_str(" -");
        return line;
    }

    for (kind, count) in hand.entries() {
        if count == 0 {
            continue;
        }
        line.push(' ');
        line.push(kind.sfen_char());
        if count > 1 {
            line.push_str(&count.to_string());
        }
    }

    line
}
