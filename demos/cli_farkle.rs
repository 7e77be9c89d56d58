//! CLI Farkle score keeper example.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use farkle_keeper::{Game, GameOptions, Phase, ScoreOutcome};

fn main() {
    println!("Farkle score keeper (type 'q' to quit)");

    let game = Game::new(GameOptions::default());

    loop {
        match game.phase() {
            Phase::Setup => {
                if !setup(&game) {
                    break;
                }
            }
            Phase::InProgress => {
                if !play(&game) {
                    break;
                }
            }
            Phase::Won => {
                if !won(&game) {
                    break;
                }
            }
        }
    }
}

/// Handles one setup command. Returns `false` to quit.
fn setup(game: &Game) -> bool {
    print_roster(game);
    let input = prompt_line("Name to add, '-N' to remove, 's' to start: ");

    match input.as_str() {
        "q" | "quit" => return false,
        "s" | "start" => {
            if let Err(err) = game.start_game() {
                println!("Start error: {err}");
            }
        }
        _ => {
            if let Some(index) = input.strip_prefix('-').and_then(parse_index) {
                match game.remove_player(index) {
                    Ok(player) => println!("Removed {}.", player.name),
                    Err(err) => println!("Remove error: {err}"),
                }
            } else if let Err(err) = game.add_player(&input) {
                println!("Add error: {err}");
            }
        }
    }

    true
}

/// Handles one score entry. Returns `false` to quit.
fn play(game: &Game) -> bool {
    print_roster(game);
    let input = prompt_line("Player number to score, 'r' to restart: ");

    match input.as_str() {
        "q" | "quit" => return false,
        "r" | "restart" => {
            game.restart_game();
            return true;
        }
        _ => {}
    }

    let Some(index) = parse_index(&input) else {
        println!("Unknown command.");
        return true;
    };

    if let Err(err) = game.select_player(index) {
        println!("Select error: {err}");
        return true;
    }

    if let Some(player) = game.selected_player() {
        println!("Current score for {}: {}", player.name, player.score);
    }

    let text = prompt_line("Points (blank to cancel): ");
    if text.is_empty() {
        game.cancel_score_entry();
        return true;
    }

    match game.submit_score_text(&text) {
        Ok(ScoreOutcome::Continued { score, .. }) => println!("New total: {score}"),
        Ok(ScoreOutcome::Won { .. }) => {
            // Give the table a moment before the announcement.
            thread::sleep(Duration::from_secs(1));
        }
        Err(err) => {
            println!("Score error: {err}");
            game.cancel_score_entry();
        }
    }

    true
}

/// Announces the winner and asks how to proceed. Returns `false` to quit.
fn won(game: &Game) -> bool {
    if let Some(winner) = game.winner() {
        println!(
            "\nCongrats {} wins with a total score of {} points!",
            winner.name, winner.score
        );
    }

    loop {
        match prompt_line("(c)ontinue or (r)estart? ").as_str() {
            "c" | "continue" => {
                if let Err(err) = game.continue_after_win() {
                    println!("Continue error: {err}");
                }
                return true;
            }
            "r" | "restart" => {
                game.restart_game();
                return true;
            }
            "q" | "quit" => return false,
            _ => println!("Please answer 'c' or 'r'."),
        }
    }
}

fn print_roster(game: &Game) {
    let players = game.players();
    if players.is_empty() {
        println!("\nNo players yet.");
        return;
    }

    println!();
    for (index, player) in players.iter().enumerate() {
        println!("{:>2}. {:<16} {:>7}", index + 1, player.name, player.score);
    }
    if let Some(leader) = game.leader().filter(|_| game.phase() != Phase::Setup) {
        println!("Leader: {} ({})", leader.name, leader.score);
    }
    println!();
}

/// Parses a one-based player number into a roster index.
fn parse_index(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_string()
}
