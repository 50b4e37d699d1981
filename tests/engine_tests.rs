//! Turn engine integration tests.
//!
//! Drives whole games through scripted and seeded dice: queue fairness,
//! win detection, cancellation, determinism, and the concrete redirection
//! scenario from the classic 10x10 board.

use rust_snl::{
    Board, BoardEntity, GameBuilder, GameStatus, Player, PlayerKind, ScriptedDie, StandardDie,
    StateError,
};

fn bot(name: &str) -> Player {
    Player::new(PlayerKind::Bot, name)
}

fn classic_board() -> Board {
    let mut board = Board::new(10).unwrap();
    board
        .place_entities(&[
            BoardEntity::ladder(2, 38).unwrap(),
            BoardEntity::snake(99, 7).unwrap(),
        ])
        .unwrap();
    board
}

/// Classic scenario: standing on 95, a roll of 4 lands on 99 and the snake
/// drops the player to 7.
#[test]
fn test_snake_at_99_drops_to_7() {
    // Nineteen 5s walk the player to 95, then the 4 hits the snake.
    let mut script = vec![5; 19];
    script.push(4);

    let mut game = GameBuilder::new(classic_board())
        .die(ScriptedDie::new(script))
        .player(bot("Ada"))
        .build()
        .unwrap();

    for _ in 0..19 {
        game.play_turn().unwrap();
    }
    assert_eq!(game.position_of("Ada"), Some(95));

    let record = game.play_turn().unwrap();
    assert_eq!(record.tentative, Some(99));
    assert_eq!(record.entity, Some(BoardEntity::snake(99, 7).unwrap()));
    assert_eq!(record.to, 7);
    assert_eq!(game.position_of("Ada"), Some(7));
}

#[test]
fn test_ladder_carries_player_up() {
    let mut game = GameBuilder::new(classic_board())
        .die(ScriptedDie::new(vec![2]))
        .player(bot("Ada"))
        .build()
        .unwrap();

    let record = game.play_turn().unwrap();
    assert_eq!(record.tentative, Some(2));
    assert_eq!(record.to, 38);
}

/// Without extra turns, every player is dequeued and requeued exactly once
/// per cycle, preserving relative order.
#[test]
fn test_turn_queue_fairness() {
    let mut game = GameBuilder::new(Board::new(10).unwrap())
        .die(ScriptedDie::new(vec![1]))
        .players([bot("Ada"), bot("Grace"), bot("Edsger")])
        .build()
        .unwrap();

    for _ in 0..9 {
        game.play_turn().unwrap();
    }

    let order: Vec<_> = game.history().iter().map(|r| r.player.clone()).collect();
    assert_eq!(
        order,
        vec!["Ada", "Grace", "Edsger", "Ada", "Grace", "Edsger", "Ada", "Grace", "Edsger"]
    );
}

#[test]
fn test_win_finishes_the_game_for_everyone() {
    let mut board = Board::new(10).unwrap();
    board
        .place_entities(&[BoardEntity::ladder(3, 99).unwrap()])
        .unwrap();

    // Ada: 3 -> ladder to 99, then 1 wins. Grace never gets a third turn.
    let mut game = GameBuilder::new(board)
        .die(ScriptedDie::new(vec![3, 1, 1, 1]))
        .player(bot("Ada"))
        .player(bot("Grace"))
        .build()
        .unwrap();

    let winner = game.run().unwrap();
    assert_eq!(winner.name(), "Ada");
    assert_eq!(winner.position(), 100);
    assert_eq!(game.status(), GameStatus::Finished);
    assert_eq!(game.turns_played(), 3);

    assert_eq!(
        game.play_turn(),
        Err(StateError::GameFinished {
            winner: "Ada".to_string()
        })
    );
}

#[test]
fn test_overshoot_stay_put_forfeits_the_move() {
    // 96 + 6 overshoots a 100-cell board under the default rule.
    let mut game = GameBuilder::new(Board::new(10).unwrap())
        .die(ScriptedDie::new(vec![6; 17]))
        .player(bot("Ada"))
        .build()
        .unwrap();

    for _ in 0..16 {
        game.play_turn().unwrap();
    }
    assert_eq!(game.position_of("Ada"), Some(96));

    let record = game.play_turn().unwrap();
    assert_eq!(record.tentative, Some(96), "overshoot forfeits");
    assert_eq!(game.position_of("Ada"), Some(96));
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_cancellation_checkpoint_stops_between_turns() {
    let mut game = GameBuilder::new(Board::new(10).unwrap())
        .die(ScriptedDie::new(vec![1]))
        .players([bot("Ada"), bot("Grace")])
        .build()
        .unwrap();

    let mut remaining = 7;
    let outcome = game
        .run_while(|| {
            remaining -= 1;
            remaining >= 0
        })
        .unwrap();

    assert!(outcome.is_none());
    assert_eq!(game.turns_played(), 7);

    // The game is resumable afterwards.
    game.play_turn().unwrap();
    assert_eq!(game.turns_played(), 8);
}

#[test]
fn test_same_seed_same_game() {
    let build = |seed| {
        GameBuilder::new(classic_board())
            .die(StandardDie::new(seed))
            .players([bot("Ada"), bot("Grace")])
            .build()
            .unwrap()
    };

    let mut game1 = build(42);
    let mut game2 = build(42);

    let mut cap = 20_000;
    game1.run_while(|| { cap -= 1; cap > 0 }).unwrap();
    let mut cap = 20_000;
    game2.run_while(|| { cap -= 1; cap > 0 }).unwrap();

    assert_eq!(game1.history(), game2.history());
    assert_eq!(
        game1.winner().map(Player::name),
        game2.winner().map(Player::name)
    );
}

#[test]
fn test_different_seeds_diverge() {
    let mut game1 = GameBuilder::new(classic_board())
        .die(StandardDie::new(1))
        .player(bot("Ada"))
        .build()
        .unwrap();
    let mut game2 = GameBuilder::new(classic_board())
        .die(StandardDie::new(2))
        .player(bot("Ada"))
        .build()
        .unwrap();

    for _ in 0..30 {
        if game1.status() != GameStatus::Finished {
            game1.play_turn().unwrap();
        }
        if game2.status() != GameStatus::Finished {
            game2.play_turn().unwrap();
        }
    }
    assert_ne!(game1.history(), game2.history());
}

#[test]
fn test_history_serde_round_trip() {
    let mut game = GameBuilder::new(classic_board())
        .die(ScriptedDie::new(vec![2, 5, 6]))
        .players([bot("Ada"), bot("Grace")])
        .build()
        .unwrap();

    for _ in 0..6 {
        game.play_turn().unwrap();
    }

    let json = serde_json::to_string(game.history()).unwrap();
    let back: Vec<rust_snl::TurnRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_slice(), game.history());
}
