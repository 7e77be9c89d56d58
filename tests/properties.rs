//! Property tests for roster and scoring rules.

use farkle_keeper::{Game, GameError, Phase, WIN_THRESHOLD};
use proptest::prelude::*;

fn started_game(players: usize) -> Game {
    let game = Game::default();
    for index in 0..players {
        game.add_player(&format!("Player {index}")).unwrap();
    }
    game.start_game().unwrap();
    game
}

proptest! {
    #[test]
    fn roster_matches_non_blank_names(names in prop::collection::vec("[ a-z]{0,6}", 0..12)) {
        let game = Game::default();
        let mut expected = Vec::new();
        for name in &names {
            match game.add_player(name) {
                Ok(_) => expected.push(name.trim().to_string()),
                Err(err) => {
                    prop_assert_eq!(err, GameError::InvalidInput);
                    prop_assert!(name.trim().is_empty());
                }
            }
        }

        let actual: Vec<String> = game.players().into_iter().map(|p| p.name).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn submit_adds_exactly_delta_to_selected_only(
        players in 1usize..6,
        pick in any::<prop::sample::Index>(),
        delta in -1_000_000i64..1_000_000,
    ) {
        let game = started_game(players);
        let index = pick.index(players);
        let before: Vec<i64> = game.players().iter().map(|p| p.score).collect();

        game.select_player(index).unwrap();
        let outcome = game.submit_score(delta).unwrap();

        let after: Vec<i64> = game.players().iter().map(|p| p.score).collect();
        for (i, (old, new)) in before.iter().zip(&after).enumerate() {
            if i == index {
                prop_assert_eq!(*new, old + delta);
            } else {
                prop_assert_eq!(new, old);
            }
        }
        prop_assert_eq!(outcome.score(), after[index]);
        prop_assert_eq!(outcome.is_won(), after[index] >= WIN_THRESHOLD);
        prop_assert_eq!(game.phase() == Phase::Won, outcome.is_won());
    }

    #[test]
    fn roster_is_frozen_after_start(players in 1usize..6, index in 0usize..8) {
        let game = started_game(players);

        prop_assert_eq!(game.add_player("Late").unwrap_err(), GameError::WrongPhase);
        prop_assert_eq!(game.remove_player(index).unwrap_err(), GameError::WrongPhase);
        prop_assert_eq!(game.player_count(), players);
    }

    #[test]
    fn restart_always_returns_to_setup(players in 0usize..5, win in any::<bool>()) {
        let game = Game::default();
        for index in 0..players {
            game.add_player(&format!("Player {index}")).unwrap();
        }
        if players > 0 {
            game.start_game().unwrap();
            if win {
                game.select_player(0).unwrap();
                game.submit_score(WIN_THRESHOLD).unwrap();
            }
        }

        game.restart_game();
        prop_assert_eq!(game.phase(), Phase::Setup);
        prop_assert!(game.players().is_empty());
        prop_assert_eq!(game.winner_name(), None);
    }
}
