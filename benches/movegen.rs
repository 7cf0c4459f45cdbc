use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lib::chess::Board;
use lib::game::{Game, MoveOptions, Rules};

fn positions() -> impl Iterator<Item = Board> {
    [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ]
    .into_iter()
    .map(|fen| fen.parse().unwrap())
    .collect::<Vec<_>>()
    .into_iter()
    .cycle()
}

fn bench(c: &mut Criterion) {
    let mut boards = positions();
    c.benchmark_group("benches")
        .bench_function("moves", |b| {
            b.iter_batched_ref(
                || boards.next().unwrap(),
                |board| board.moves(),
                BatchSize::SmallInput,
            );
        })
        .bench_function("perft/3", |b| {
            b.iter_batched_ref(
                || boards.next().unwrap(),
                |board| board.perft(3),
                BatchSize::SmallInput,
            );
        })
        .bench_function("play", |b| {
            b.iter_batched_ref(
                || {
                    let board = boards.next().unwrap();
                    let m = board.moves()[0];
                    (Game::from_board(board, Rules::default()), m)
                },
                |(game, m)| {
                    let options = MoveOptions::promote(lib::chess::Role::Queen);
                    game.play(m.whence(), m.whither(), options)
                },
                BatchSize::SmallInput,
            );
        });
}

criterion_group!(benches, bench);
criterion_main!(benches);
