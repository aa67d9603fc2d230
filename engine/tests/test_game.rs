use c5_engine::errors::GameError;
use c5_engine::game::{GameSession, TurnAssignment};
use c5_engine::player::Symbol::{O, X};
use c5_engine::rules::GameRules;

fn session() -> GameSession {
    GameSession::new(GameRules::default())
}

fn full_session() -> GameSession {
    let mut game = session();
    game.register("alice").unwrap();
    game.register("bob").unwrap();
    game.initial_assignment("alice").unwrap();
    game
}

#[test]
fn assignment_is_unset_until_two_players_register() {
    let mut game = session();
    assert_eq!(game.initial_assignment("alice"), None);
    game.register("alice").unwrap();
    assert_eq!(game.initial_assignment("alice"), None);
    assert_eq!(game.is_active("alice"), None);

    game.register("bob").unwrap();
    assert_eq!(
        game.initial_assignment("alice"),
        Some(TurnAssignment {
            active: true,
            symbol: X
        })
    );
    assert_eq!(
        game.initial_assignment("bob"),
        Some(TurnAssignment {
            active: false,
            symbol: O
        })
    );
}

#[test]
fn a_late_assignment_query_does_not_move_the_turn() {
    let mut game = full_session();
    game.apply_move(0, X).unwrap();
    assert_eq!(game.is_active("bob"), Some(true));

    let again = game.initial_assignment("alice").unwrap();
    assert!(!again.active);
    assert_eq!(game.is_active("bob"), Some(true));
}

#[test]
fn accepted_moves_alternate_the_turn() {
    let mut game = full_session();
    assert_eq!(game.is_active("alice"), Some(true));
    game.apply_move(0, X).unwrap();
    assert_eq!(game.is_active("bob"), Some(true));
    game.apply_move(1, O).unwrap();
    assert_eq!(game.is_active("alice"), Some(true));
}

#[test]
fn a_rejected_move_does_not_touch_turn_or_board() {
    let mut game = full_session();
    let rows = game.rules().rows;
    for i in 0..rows {
        let symbol = if i % 2 == 0 { X } else { O };
        game.apply_move(0, symbol).unwrap();
    }
    // An even number of accepted moves puts the turn back with alice.
    assert_eq!(game.is_active("alice"), Some(true));
    let rendered = game.render_board();

    assert_eq!(game.apply_move(0, O), Err(GameError::ColumnFull));
    assert_eq!(game.is_active("alice"), Some(true));
    assert_eq!(game.render_board(), rendered);
}

#[test]
fn out_of_range_column_is_rejected_before_the_board() {
    let mut game = full_session();
    let cols = game.rules().cols;
    assert_eq!(
        game.apply_move(cols, X),
        Err(GameError::InvalidColumn { column: cols, cols })
    );
    assert!(game.board().is_empty());
    assert_eq!(game.is_active("alice"), Some(true));
}

#[test]
fn five_in_a_column_wins_and_stays_won() {
    let mut game = full_session();
    for i in 0..5 {
        let outcome = game.apply_move(0, X).unwrap();
        assert_eq!(outcome.row, i);
        assert_eq!(outcome.winner, i == 4);
    }
    assert!(game.check_winner());
    assert!(game.check_winner(), "the winner flag must be stable");

    // Bottom five rows of column 0 render as X, top row stays blank.
    let rendered = game.render_board();
    let lines: Vec<&str> = rendered.lines().map(|l| &l[..3]).collect();
    assert_eq!(lines, vec!["[ ]", "[X]", "[X]", "[X]", "[X]", "[X]"]);
}

#[test]
fn the_winning_move_does_not_pass_the_turn() {
    let mut game = full_session();
    for _ in 0..4 {
        game.apply_move(0, X).unwrap();
    }
    let active_before = game.is_active("alice");
    let outcome = game.apply_move(0, X).unwrap();
    assert!(outcome.winner);
    assert_eq!(game.is_active("alice"), active_before);
}

#[test]
fn alternating_symbols_in_one_column_never_win() {
    let mut game = full_session();
    for i in 0..5 {
        let symbol = if i % 2 == 0 { X } else { O };
        let outcome = game.apply_move(0, symbol).unwrap();
        assert!(!outcome.winner);
    }
    assert!(!game.check_winner());
}

#[test]
fn registering_against_a_won_game_starts_fresh() {
    let mut game = full_session();
    for _ in 0..5 {
        game.apply_move(0, X).unwrap();
    }
    assert!(game.check_winner());

    game.register("carol").unwrap();
    assert!(!game.check_winner());
    assert!(game.board().is_empty());
    assert_eq!(game.players(), (Some("carol"), None));
}

#[test]
fn registering_against_a_partial_session_starts_fresh() {
    let mut game = session();
    game.register("alice").unwrap();
    // Moves on the board with only one player registered: treated as a
    // recovered-from-crash condition.
    game.apply_move(2, X).unwrap();
    assert!(!game.board().is_empty());

    game.register("carol").unwrap();
    assert!(game.board().is_empty());
    assert_eq!(game.players(), (Some("carol"), None));
}

#[test]
fn reset_clears_everything_for_a_new_game() {
    let mut game = full_session();
    game.apply_move(4, X).unwrap();
    game.reset();

    assert!(game.board().is_empty());
    assert_eq!(game.players(), (None, None));
    assert_eq!(game.roster(), "[None, None]");
    assert_eq!(game.is_active("alice"), None);

    game.register("alice").unwrap();
    game.register("bob").unwrap();
    let assignment = game.initial_assignment("alice").unwrap();
    assert!(assignment.active);
    assert_eq!(assignment.symbol, X);
}
