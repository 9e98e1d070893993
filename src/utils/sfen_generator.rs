//! GameState-to-SFEN serializer, the structural inverse of the parser.

use crate::game_state::game_state::GameState;
use crate::game_state::shogi_types::{Color, Square};

pub fn generate_sfen(state: &GameState) -> String {
    format!(
        "{} {} {} {}",
        generate_board_field(state),
        state.side_to_move.sfen_char(),
        generate_hands_field(state),
        state.move_number
    )
}

fn generate_board_field(state: &GameState) -> String {
    let mut out = String::new();

    for rank in 1..=9u8 {
        let mut empty_run = 0u8;

        for file in (1..=9u8).rev() {
            let square = Square::new(file, rank).expect("file and rank are in 1..=9");
            match state.piece_at(square) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push_str(&piece.sfen());
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank < 9 {
            out.push('/');
        }
    }

    out
}

fn generate_hands_field(state: &GameState) -> String {
    let mut out = String::new();

    for color in [Color::Sente, Color::Gote] {
        for (kind, count) in state.hand(color).entries() {
            if count == 0 {
                continue;
            }
            if count > 1 {
                out.push_str(&count.to_string());
            }
            let letter = match color {
                Color::Sente => kind.sfen_char(),
                Color::Gote => kind.sfen_char().to_ascii_lowercase(),
            };
            out.push(letter);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}
