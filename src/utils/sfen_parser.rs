//! SFEN-to-GameState parser.
//!
//! Builds a fully-populated position from an SFEN record: board layout with
//! run-length empties and `+` promotion prefixes, side to move, hand
//! contents, and move number. Every rejection is a `MalformedRecord` with
//! the offending detail; no partially-built state ever escapes.

use crate::game_state::game_state::GameState;
use crate::game_state::shogi_types::{Color, Piece, PieceKind, Square};
use crate::shogi_errors::{ShogiError, ShogiResult};

pub fn parse_sfen(sfen: &str) -> ShogiResult<GameState> {
    let mut parts = sfen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| malformed("missing board field"))?;
    let side_part = parts
        .next()
        .ok_or_else(|| malformed("missing side-to-move field"))?;
    let hands_part = parts
        .next()
        .ok_or_else(|| malformed("missing hands field"))?;
    let move_number_part = parts
        .next()
        .ok_or_else(|| malformed("missing move-number field"))?;

    if parts.next().is_some() {
        return Err(malformed("extra trailing fields"));
    }

    let mut state = GameState::new_empty();

    parse_board(board_part, &mut state)?;
    state.side_to_move = match side_part {
        "b" => Color::Sente,
        "w" => Color::Gote,
        other => return Err(malformed(&format!("invalid side-to-move field '{other}'"))),
    };
    parse_hands(hands_part, &mut state)?;

    state.move_number = move_number_part
        .parse::<u16>()
        .map_err(|_| malformed(&format!("unparsable move number '{move_number_part}'")))?;
    if state.move_number == 0 {
        return Err(malformed("move number must be positive"));
    }

    Ok(state)
}

fn malformed(reason: &str) -> ShogiError {
    ShogiError::MalformedRecord(reason.to_owned())
}

fn parse_board(board_part: &str, state: &mut GameState) -> ShogiResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 9 {
        return Err(malformed(&format!(
            "board field has {} ranks, expected 9",
            ranks.len()
        )));
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = rank_idx as u8 + 1;
        // Files are written 9 down to 1; count down as squares are consumed.
        let mut files_left = 9i32;
        let mut promoted = false;

        for ch in rank_str.chars() {
            if let Some(empties) = ch.to_digit(10) {
                if promoted {
                    return Err(malformed("'+' must be followed by a piece letter"));
                }
                if empties == 0 {
                    return Err(malformed("empty-square count of zero"));
                }
                files_left -= empties as i32;
                continue;
            }

            if ch == '+' {
                if promoted {
                    return Err(malformed("doubled '+' promotion prefix"));
                }
                promoted = true;
                continue;
            }

            let (color, kind) = PieceKind::from_sfen_char(ch)
                .ok_or_else(|| malformed(&format!("unrecognized piece letter '{ch}'")))?;

            if promoted && !kind.is_promotable() {
                return Err(malformed(&format!("'+{ch}' names an unpromotable piece")));
            }
            if files_left < 1 {
                return Err(malformed(&format!("rank {rank} has more than 9 files")));
            }

            let square = Square::new(files_left as u8, rank)
                .ok_or_else(|| malformed(&format!("rank {rank} overflows the board")))?;
            state.set_piece(
                square,
                Some(Piece {
                    kind,
                    promoted,
                    color,
                }),
            );

            files_left -= 1;
            promoted = false;
        }

        if promoted {
            return Err(malformed("trailing '+' promotion prefix"));
        }
        if files_left != 0 {
            return Err(malformed(&format!(
                "rank {rank} does not sum to 9 files"
            )));
        }
    }

    Ok(())
}

fn parse_hands(hands_part: &str, state: &mut GameState) -> ShogiResult<()> {
    if hands_part == "-" {
        return Ok(());
    }

    let mut count = 0u32;
    let mut has_count = false;

    for ch in hands_part.chars() {
        if let Some(digit) = ch.to_digit(10) {
            count = count * 10 + digit;
            has_count = true;
            // No hand slot exceeds 18; bailing here also bounds the
            // accumulator against arbitrarily long digit runs.
            if count > 18 {
                return Err(malformed(&format!("hand count {count} out of range")));
            }
            continue;
        }

        let (color, kind) = PieceKind::from_sfen_char(ch)
            .ok_or_else(|| malformed(&format!("unrecognized hand letter '{ch}'")))?;
        if kind == PieceKind::King {
            return Err(malformed("a king cannot be held in hand"));
        }

        let n = if has_count { count } else { 1 };
        if n == 0 {
            return Err(malformed("hand count of zero"));
        }

        for _ in 0..n {
            state.hand_mut(color).add(kind);
        }

        count = 0;
        has_count = false;
    }

    if has_count {
        return Err(malformed("trailing digits in hand field"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_sfen;
    use crate::game_state::shogi_rules::STARTING_POSITION_SFEN;
    use crate::game_state::shogi_types::{Color, PieceKind, Square};
    use crate::shogi_errors::ShogiError;

    fn assert_malformed(sfen: &str) {
        match parse_sfen(sfen) {
            Err(ShogiError::MalformedRecord(_)) => {}
            other => panic!("expected MalformedRecord for {sfen:?}, got {other:?}"),
        }
    }

    #[test]
    fn parses_the_starting_position() {
        let state = parse_sfen(STARTING_POSITION_SFEN).expect("startpos parses");
        assert_eq!(state.side_to_move, Color::Sente);
        assert_eq!(state.move_number, 1);
        assert!(state.hand(Color::Sente).is_empty());
        assert!(state.hand(Color::Gote).is_empty());

        let lance = state
            .piece_at(Square::new(9, 1).expect("91"))
            .expect("gote lance on 91");
        assert_eq!(lance.kind, PieceKind::Lance);
        assert_eq!(lance.color, Color::Gote);
    }

    #[test]
    fn parses_promoted_pieces_and_hands() {
        let state =
            parse_sfen("7+P1/9/9/9/4+r4/9/9/9/9 w S2Pb3p 1").expect("mixed record parses");

        let tokin = state
            .piece_at(Square::new(2, 1).expect("21"))
            .expect("tokin on 21");
        assert!(tokin.promoted);
        assert_eq!(tokin.kind, PieceKind::Pawn);
        assert_eq!(tokin.color, Color::Sente);

        let dragon = state
            .piece_at(Square::new(5, 5).expect("55"))
            .expect("dragon on 55");
        assert!(dragon.promoted);
        assert_eq!(dragon.color, Color::Gote);

        assert_eq!(state.hand(Color::Sente).count(PieceKind::Silver), 1);
        assert_eq!(state.hand(Color::Sente).count(PieceKind::Pawn), 2);
        assert_eq!(state.hand(Color::Gote).count(PieceKind::Bishop), 1);
        assert_eq!(state.hand(Color::Gote).count(PieceKind::Pawn), 3);
    }

    #[test]
    fn rank_summing_to_eight_files_is_rejected() {
        assert_malformed("4k4/9/9/9/9/9/9/9/4K3 b - 1");
    }

    #[test]
    fn structural_failures_are_rejected() {
        // Wrong rank count.
        assert_malformed("9/9/9/9/9/9/9/9 b - 1");
        // Overfull rank.
        assert_malformed("9/9/ppppppppp1/9/9/9/9/9/9 b - 1");
        // Unknown piece letter.
        assert_malformed("4q4/9/9/9/9/9/9/9/9 b - 1");
        // Promotion prefix on an unpromotable piece.
        assert_malformed("4+k4/9/9/9/9/9/9/9/9 b - 1");
        // Dangling promotion prefix.
        assert_malformed("8+/9/9/9/9/9/9/9/9 b - 1");
        // Bad side letter.
        assert_malformed("9/9/9/9/9/9/9/9/9 x - 1");
        // King in hand.
        assert_malformed("9/9/9/9/9/9/9/9/9 b K 1");
        // Unparsable and non-positive move numbers.
        assert_malformed("9/9/9/9/9/9/9/9/9 b - x");
        assert_malformed("9/9/9/9/9/9/9/9/9 b - 0");
        // Missing and extra fields.
        assert_malformed("9/9/9/9/9/9/9/9/9 b -");
        assert_malformed("9/9/9/9/9/9/9/9/9 b - 1 extra");
    }

    #[test]
    fn out_of_range_hand_counts_are_rejected() {
        assert_malformed("9/9/9/9/9/9/9/9/9 b 0P 1");
        assert_malformed("9/9/9/9/9/9/9/9/9 b 19P 1");
        // A digit run of any length must fail cleanly, not overflow.
        assert_malformed("9/9/9/9/9/9/9/9/9 b 99999999999P 1");
        assert!(parse_sfen("9/9/9/9/9/9/9/9/9 b 18P 1").is_ok());
    }
}
