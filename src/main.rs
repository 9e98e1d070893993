use std::env;
use std::io::{self, BufRead};

use shogi_engine::game_state::shogi_game::ShogiGame;
use shogi_engine::utils::coordinates::parse_move_text;
use shogi_engine::utils::render_game_state::render_game_state;

/// Interactive two-seat game loop. An optional SFEN argument selects the
/// starting position; a malformed one falls back to the standard layout.
fn main() {
    let args: Vec<String> = env::args().collect();
    let mut game = match args.get(1) {
        Some(sfen) => match ShogiGame::from_sfen(sfen) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("{err}; starting a standard game instead");
                ShogiGame::new()
            }
        },
        None => ShogiGame::new(),
    };

    println!("{}", render_game_state(game.state()));
    println!(
        "{:?} to move. Moves look like 7g7f, 2d2c+, or G*5b; commands: sfen, resign, quit.",
        game.side_to_move()
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "sfen" => {
                println!("{}", game.to_sfen());
                continue;
            }
            "resign" => {
                game.resign();
                println!("{}", game.status());
                break;
            }
            _ => {}
        }

        match parse_move_text(input).and_then(|shogi_move| game.play(shogi_move)) {
            Ok(()) => {
                println!("{}", render_game_state(game.state()));
                println!("status: {} (move {})", game.status(), game.move_number());
                if game.status().is_terminal() {
                    break;
                }
            }
            Err(err) => println!("{err}"),
        }
    }
}
