use lib::chess::{Board, Castles, Color, Move, Outcome, Role, Square};
use lib::game::{Event, Game, IllegalMove, MoveOptions, PlayError, Played, Status};
use lib::util::Integer;
use proptest::sample::Selector;
use test_strategy::proptest;

fn game(fen: &str) -> Game {
    let mut g = Game::default();
    g.load(fen).unwrap();
    g
}

fn play_at(g: &mut Game, whence: (i32, i32), whither: (i32, i32)) -> Vec<Event> {
    g.play_at(whence, whither, MoveOptions::default())
        .unwrap()
        .events()
        .to_vec()
}

#[proptest]
fn printing_a_parsed_fen_is_an_identity(b: Board) {
    let fen = b.to_string();
    assert_eq!(game(&fen).fen(), fen);
}

#[proptest]
fn reloading_the_previous_fen_restores_the_board(
    #[filter(!#b.moves().is_empty())] b: Board,
    #[map(|s: Selector| s.select(#b.moves()))] m: Move,
) {
    let fen = b.to_string();
    let mut g = game(&fen);
    let options = MoveOptions {
        promotion: m.promotion(),
        ..MoveOptions::default()
    };

    if g.play(m.whence(), m.whither(), options).is_ok() {
        let after = g.fen();
        assert_ne!(after, fen);

        g.load(&fen)?;
        assert_eq!(*g.position().board(), fen.parse::<Board>()?);
    }
}

#[proptest]
fn legal_moves_never_leave_the_king_attacked(b: Board) {
    for m in b.moves() {
        let mut next = b;
        next.make(m)?;
        assert!(!next.in_check(b.turn()));
    }
}

#[test]
fn starting_position_has_twenty_legal_moves() {
    let g = Game::default();
    let count: usize = Square::iter()
        .filter(|&sq| g.get(sq).map(|p| p.color) == Some(Color::White))
        .map(|sq| g.legal_moves(sq).len())
        .sum();

    assert_eq!(count, 20);
    assert_eq!(Board::default().moves().len(), 20);
}

#[test]
fn fen_with_gaps_round_trips() {
    let fen = "8/3r1k1r/8/8/5p2/8/8/R3K2R w - - 0 1";
    assert_eq!(game(fen).fen(), fen);
}

#[test]
fn castling_relocates_the_rook_and_clears_castling_rights() {
    let mut g = game("8/7k/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let events = play_at(&mut g, (7, 4), (7, 6));

    let record = events.iter().find_map(|e| match e {
        Event::Moved(r) => Some(r),
        _ => None,
    });

    assert_eq!(record.and_then(|r| r.castling), Some((Square::H1, Square::F1)));
    assert_eq!(g.get(Square::H1), None);
    assert_eq!(g.get(Square::F1).map(|p| p.role), Some(Role::Rook));
    assert_eq!(g.get(Square::G1).map(|p| p.role), Some(Role::King));
    assert!(g.get(Square::F1).map_or(false, |p| p.moved));
    assert!(g.get(Square::G1).map_or(false, |p| p.moved));
    assert!(!g.position().castles.intersects(Castles::of(Color::White)));
}

#[test]
fn checkmate_ends_the_game() {
    let mut g = game("r3k3/7R/2r5/8/8/8/8/R3K3 w - - 2 2");

    let events = play_at(&mut g, (7, 0), (0, 0));
    assert_eq!(events.last(), Some(&Event::Check(Color::Black)));

    play_at(&mut g, (2, 2), (0, 2));

    let events = play_at(&mut g, (0, 0), (0, 2));
    assert_eq!(events.last(), Some(&Event::Checkmate(Color::Black)));
    assert!(!events.contains(&Event::Check(Color::Black)));
    assert_eq!(g.status(), Status::Ended(Outcome::Checkmate(Color::Black)));

    assert_eq!(
        g.play_at((6, 7), (6, 6), MoveOptions::default()),
        Err(PlayError::IllegalMove(IllegalMove::GameOver(
            Outcome::Checkmate(Color::Black)
        )))
    );
}

#[test]
fn stalemate_ends_the_game() {
    let mut g = game("7k/5Q2/8/7K/8/8/8/8 w - - 0 1");
    let events = play_at(&mut g, (3, 7), (2, 7));
    assert_eq!(events.last(), Some(&Event::Stalemate(Color::Black)));
    assert_eq!(g.status(), Status::Ended(Outcome::Stalemate(Color::Black)));
}

#[test]
fn en_passant_removes_the_pawn_that_double_pushed() {
    let mut g = game("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play_at(&mut g, (1, 3), (3, 3));
    assert_eq!(g.position().en_passant, Some(Square::D6));

    let events = play_at(&mut g, (3, 4), (2, 3));
    let record = events.iter().find_map(|e| match e {
        Event::Moved(r) => Some(r),
        _ => None,
    });

    assert!(record.map_or(false, |r| r.is_en_passant()));
    assert_eq!(g.get(Square::D5), None);
    assert_eq!(g.get(Square::E5), None);
    assert_eq!(
        g.get(Square::D6).map(|p| (p.color, p.role)),
        Some((Color::White, Role::Pawn))
    );
}

#[test]
fn capturing_the_last_piece_leaves_insufficient_material() {
    let mut g = game("1rK5/8/8/8/8/8/8/k7");
    let events = play_at(&mut g, (0, 2), (0, 1));

    assert_eq!(g.locate(Role::King, Color::White), [Square::B8]);
    assert_eq!(g.locate(Role::King, Color::Black), [Square::A1]);
    assert_eq!(events.last(), Some(&Event::InsufficientMaterial));
    assert_eq!(g.status(), Status::Ended(Outcome::DrawByInsufficientMaterial));
}

#[test]
fn promotion_waits_for_a_role() {
    let mut g = game("8/P6k/8/8/8/8/8/4K3 w - - 0 1");

    let played = g.play(Square::A7, Square::A8, MoveOptions::default());
    assert!(matches!(played, Ok(Played::PromotionRequired(_))));
    assert_eq!(g.get(Square::A7).map(|p| p.role), Some(Role::Pawn));

    let played = g.play(Square::A7, Square::A8, MoveOptions::promote(Role::Knight));
    assert!(matches!(played, Ok(Played::Moved(_))));
    assert_eq!(g.get(Square::A8).map(|p| p.role), Some(Role::Knight));
}
