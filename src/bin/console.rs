//! Terminal front-end
//!
//! Reads squares in algebraic notation ("e2") from stdin and feeds them to
//! the engine as clicks: first click selects, second click moves. Renders
//! the board and capture trays after every accepted move.

use std::io::{self, BufRead, Write};

use chess_rules::{ClickOutcome, GameState, SelectionChange, Square};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parse "e2" style input into a board square. Rank 1 is White's back row.
fn parse_square(input: &str) -> Option<Square> {
    let mut chars = input.chars();
    let file = chars.next()?;
    let rank = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || !file.is_ascii_lowercase() {
        return None;
    }
    let col = file as i8 - b'a' as i8;
    let row = 8 - rank as i8;
    Square::new(row, col).ok()
}

fn print_state(game: &GameState) {
    println!("{}", game.board());
    let advantage = game.captured().material_advantage();
    if advantage != 0 {
        println!("Material: {advantage:+} for White");
    }
    println!("{:?} to move.", game.turn());
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("[CONSOLE] Starting interactive session");

    let mut game = GameState::new_standard_game();
    print_state(&game);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "new" => {
                game = GameState::new_standard_game();
                print_state(&game);
                continue;
            }
            "board" => {
                print_state(&game);
                continue;
            }
            _ => {}
        }

        let Some(square) = parse_square(input) else {
            println!("Expected a square like e2, or: board, new, quit.");
            continue;
        };

        match game.handle_click(square) {
            ClickOutcome::Selection(SelectionChange::Selected { piece, destinations })
            | ClickOutcome::Selection(SelectionChange::Reselected { piece, destinations }) => {
                let list: Vec<String> =
                    destinations.iter().map(|s| s.to_string()).collect();
                println!(
                    "Selected {:?} on {}. Moves: {}",
                    piece.piece_type,
                    piece.square,
                    if list.is_empty() {
                        "none".to_string()
                    } else {
                        list.join(" ")
                    }
                );
            }
            ClickOutcome::Selection(SelectionChange::Deselected) => {
                println!("Selection cleared.");
            }
            ClickOutcome::Selection(SelectionChange::Unchanged) => {
                println!("Nothing to select there.");
            }
            ClickOutcome::Moved(outcome) => {
                let mut note = format!(
                    "{:?} {} to {}",
                    outcome.piece_type, outcome.from, outcome.to
                );
                if let Some(taken) = outcome.captured {
                    note.push_str(&format!(", takes {taken:?}"));
                }
                if outcome.promoted {
                    note.push_str(", promotes to Queen");
                }
                println!("{note}.");
                print_state(&game);
            }
            ClickOutcome::Rejected(err) => println!("Rejected: {err}"),
            ClickOutcome::Ignored => println!("It is {:?}'s turn.", game.turn()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square_corners() {
        assert_eq!(parse_square("a1"), Square::new(7, 0).ok());
        assert_eq!(parse_square("h8"), Square::new(0, 7).ok());
        assert_eq!(parse_square("e2"), Square::new(6, 4).ok());
    }

    #[test]
    fn test_parse_square_rejects_garbage() {
        assert_eq!(parse_square(""), None);
        assert_eq!(parse_square("e9"), None);
        assert_eq!(parse_square("i1"), None);
        assert_eq!(parse_square("e22"), None);
        assert_eq!(parse_square("E2"), None);
    }
}
