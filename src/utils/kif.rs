//! KIF-style record utilities for game interchange.
//!
//! Writes a played game as a headed, numbered move list in the same USI
//! notation the puzzle data uses, and replays textual move
//! sequences onto a live game (the engine-side half of puzzle-solution
//! playback). The writer replays the history itself, so an illegal record
//! is rejected rather than silently serialized.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::game_state::GameState;
use crate::game_state::shogi_game::ShogiGame;
use crate::game_state::shogi_rules::{RuleToggles, STARTING_POSITION_SFEN};
use crate::moves::move_description::ShogiMove;
use crate::shogi_errors::ShogiResult;
use crate::utils::coordinates::parse_move_text;

/// Serialize a game with default headers.
pub fn write_record(
    initial_state: &GameState,
    rules: RuleToggles,
    move_history: &[ShogiMove],
    result: &str,
) -> ShogiResult<String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Shogi Engine Game".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y/%m/%d").to_string(),
    );
    headers.insert("Sente".to_owned(), "Sente".to_owned());
    headers.insert("Gote".to_owned(), "Gote".to_owned());
    headers.insert("Result".to_owned(), result.to_owned());

    let initial_sfen = initial_state.to_sfen();
    if initial_sfen != STARTING_POSITION_SFEN {
        headers.insert("SFEN".to_owned(), initial_sfen);
    }

    write_record_with_headers(initial_state, rules, move_history, &headers)
}

/// Serialize a game with caller-supplied headers.
pub fn write_record_with_headers(
    initial_state: &GameState,
    rules: RuleToggles,
    move_history: &[ShogiMove],
    headers: &BTreeMap<String, String>,
) -> ShogiResult<String> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("{key}: {value}\n"));
    }
    out.push('\n');

    let mut game = ShogiGame::from_sfen_with_rules(&initial_state.to_sfen(), rules)?;
    for (index, &shogi_move) in move_history.iter().enumerate() {
        game.play(shogi_move)?;
        out.push_str(&format!("{:>4} {}\n", index + 1, shogi_move));
    }

    Ok(out)
}

/// Parse and apply a textual move sequence, stopping at the first failure.
pub fn replay_move_texts(game: &mut ShogiGame, move_texts: &[&str]) -> ShogiResult<()> {
    for text in move_texts {
        game.play(parse_move_text(text)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{replay_move_texts, write_record};
    use crate::game_state::game_state::GameState;
    use crate::game_state::shogi_game::ShogiGame;
    use crate::game_state::shogi_rules::RuleToggles;
    use crate::game_state::shogi_types::{Color, GameStatus, Square};
    use crate::moves::move_description::ShogiMove;
    use crate::shogi_errors::ShogiError;

    fn board_move(text: &str) -> ShogiMove {
        crate::utils::coordinates::parse_move_text(text).expect("test move text")
    }

    #[test]
    fn record_lists_headers_and_numbered_moves() {
        let initial = GameState::new_game();
        let history = vec![board_move("7g7f"), board_move("3c3d"), board_move("8h2b+")];

        let record = write_record(&initial, RuleToggles::default(), &history, "ongoing")
            .expect("record writes");

        assert!(record.contains("Date: "));
        assert!(record.contains("Event: Shogi Engine Game"));
        assert!(record.contains("   1 7g7f"));
        assert!(record.contains("   3 8h2b+"));
        // Standard opening needs no SFEN header.
        assert!(!record.contains("SFEN: "));
    }

    #[test]
    fn illegal_history_is_rejected() {
        let initial = GameState::new_game();
        let history = vec![board_move("7g7e")];

        let err = write_record(&initial, RuleToggles::default(), &history, "ongoing");
        assert!(matches!(err, Err(ShogiError::IllegalMove(_))));
    }

    #[test]
    fn replay_solves_a_mate_in_one_puzzle() {
        let mut game = ShogiGame::from_sfen("4k4/9/4K4/9/9/9/9/9/9 b G 1")
            .expect("puzzle parses");

        replay_move_texts(&mut game, &["G*5b"]).expect("solution replays");
        assert_eq!(game.status(), GameStatus::Checkmate(Color::Gote));
    }

    #[test]
    fn replay_stops_on_the_first_bad_move() {
        let mut game = ShogiGame::new();
        let err = replay_move_texts(&mut game, &["7g7f", "nonsense"]);
        assert!(matches!(err, Err(ShogiError::MalformedRecord(_))));

        // The first move stuck; the bad one did not.
        assert_eq!(game.side_to_move(), Color::Gote);
        assert!(game
            .piece_at(Square::new(7, 6).expect("76"))
            .is_some());
    }
}
