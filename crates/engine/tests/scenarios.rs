use engine::{Board, Color, EngineError, Game, GameLogger, PieceKind, Square};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn at(column: i32, row: i32) -> Square {
    Square::new(column, row).unwrap()
}

fn play(game: &mut Game, moves: &str) {
    for mv in moves.split_whitespace() {
        let (from, to) = mv.split_at(2);
        game.try_move(sq(from), sq(to))
            .unwrap_or_else(|e| panic!("{mv} should be legal: {e}"));
    }
}

/// Drive a move the way a pointer would: press, a few hover frames, release.
fn drag(game: &mut Game, from: Square, hover: &[Square], to: Square) -> bool {
    if !game.select_at(from) {
        return false;
    }
    for &square in hover {
        game.preview_move_to(square);
    }
    game.preview_move_to(to);
    game.release_at(to).committed
}

#[test]
fn opening_sequence_with_a_king_step() {
    let mut game = Game::new();

    assert!(drag(&mut game, at(4, 6), &[at(4, 5)], at(4, 4)));
    assert_eq!(game.color_to_move(), Color::Black);

    assert!(drag(&mut game, at(3, 1), &[], at(3, 3)));
    assert_eq!(game.color_to_move(), Color::White);

    assert!(drag(&mut game, at(4, 7), &[at(4, 5)], at(4, 6)));
    assert_eq!(game.color_to_move(), Color::Black);

    let board = game.board();
    assert_eq!(board.piece_at(at(4, 4)).unwrap().kind(), PieceKind::Pawn);
    assert_eq!(board.piece_at(at(3, 3)).unwrap().kind(), PieceKind::Pawn);
    let king = board.piece_at(at(4, 6)).unwrap();
    assert_eq!((king.kind(), king.color()), (PieceKind::King, Color::White));
    assert!(board.piece_at(at(4, 7)).is_none());
    assert_eq!(game.board_state().len(), 32);
}

#[test]
fn en_passant_is_open_for_exactly_one_reply() {
    let mut game = Game::new();
    play(&mut game, "a2a3 d7d5 a3a4 d5d4");

    assert!(drag(&mut game, at(4, 6), &[], at(4, 4)));
    assert!(game.board().piece_at(at(4, 4)).unwrap().is_en_passant_eligible());

    game.select_at(at(3, 4));
    let preview = game.preview_move_to(at(4, 5));
    assert!(preview.legal);
    assert!(preview.will_capture);
    assert!(game.display_board().piece_at(at(4, 4)).is_none());

    let outcome = game.release_at(at(4, 5));
    assert!(outcome.committed);
    let captured = outcome.captured.unwrap();
    assert_eq!((captured.kind, captured.color), (PieceKind::Pawn, Color::White));
    assert_eq!(captured.square, at(4, 4));
    assert!(game.board().piece_at(at(4, 4)).is_none());
    assert_eq!(game.board().piece_at(at(4, 5)).unwrap().color(), Color::Black);
    assert_eq!(game.board().len(), 31);
}

#[test]
fn en_passant_window_closes_after_an_intervening_move() {
    let mut game = Game::new();
    play(&mut game, "a2a3 d7d5 a3a4 d5d4 e2e4 h7h6 a4a5");

    let before = game.board().clone();
    assert!(!drag(&mut game, at(3, 4), &[], at(4, 5)));
    assert_eq!(game.board(), &before);
    assert_eq!(game.color_to_move(), Color::Black);
    assert!(matches!(
        game.try_move(at(3, 4), at(4, 5)),
        Err(EngineError::IllegalMove { .. })
    ));
}

#[test]
fn pawn_promotes_to_a_queen_of_its_own_color() {
    let mut board = Board::empty();
    board.place(PieceKind::King, Color::White, sq("e1")).unwrap();
    board.place(PieceKind::King, Color::Black, sq("h8")).unwrap();
    let pawn = board.place(PieceKind::Pawn, Color::White, sq("b7")).unwrap();
    let mut game = Game::from_board(board, Color::White);

    let outcome = game.try_move(sq("b7"), sq("b8")).unwrap();
    let queen = outcome.promoted.unwrap();
    assert_eq!((queen.kind, queen.color, queen.square), (PieceKind::Queen, Color::White, sq("b8")));
    assert!(game.board().piece(pawn).is_none());
    assert_eq!(game.board().piece_at(sq("b8")).unwrap().id(), queen.id);

    // The new queen moves like one on the next turn.
    play(&mut game, "h8g8");
    assert!(game.legal_targets(sq("b8")).contains(&sq("b1")));
    assert!(game.legal_targets(sq("b8")).contains(&sq("f4")));
}

#[test]
fn rejected_attempts_leave_the_board_untouched() {
    let mut game = Game::new();
    play(&mut game, "e2e4 e7e5");
    let before = game.board().clone();
    let snapshot = game.board_state();

    for _ in 0..10 {
        assert!(!drag(&mut game, sq("d1"), &[sq("e2"), sq("f3")], sq("d3")));
        assert!(!drag(&mut game, sq("f1"), &[sq("e2")], sq("f3")));
        assert!(!drag(&mut game, sq("e4"), &[sq("e5")], sq("e5")));
    }

    assert_eq!(game.board(), &before);
    assert_eq!(game.board_state(), snapshot);
    assert_eq!(game.color_to_move(), Color::White);
}

#[test]
fn a_pawn_double_steps_only_once() {
    let mut game = Game::new();
    play(&mut game, "e2e4 a7a6");
    assert!(matches!(
        game.try_move(sq("e4"), sq("e6")),
        Err(EngineError::IllegalMove { .. })
    ));
    assert_eq!(game.legal_targets(sq("e4")), vec![sq("e5")]);
}

#[test]
fn journal_covers_the_whole_game() {
    let mut game = Game::new().with_logger(GameLogger::new());
    play(&mut game, "a2a3 d7d5 a3a4 d5d4 e2e4 d4e3");

    let logger = game.logger().unwrap();
    assert_eq!(logger.move_count(), 6);
    assert!(logger.log_buffer.contains("6. black pawn d4-e3 takes pawn e4 en passant"));
}
