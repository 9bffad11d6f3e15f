use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_gridgames::games::{Go, Gomoku, Reversi};
use rust_gridgames::rules::Game;
use rust_gridgames::search::{AlphaBeta, Greedy, StrategyConfig};

fn gomoku_midgame() -> Game<Gomoku> {
    let mut game = Game::<Gomoku>::new(15).unwrap();
    for (x, y) in [(7, 7), (8, 8), (6, 8), (8, 6), (8, 7), (6, 6), (5, 9), (9, 7)] {
        game.attempt_move(x, y).unwrap();
    }
    game
}

fn reversi_opening() -> Game<Reversi> {
    let mut game = Game::<Reversi>::new(8).unwrap();
    for (x, y) in [(2, 3), (2, 2), (2, 1), (2, 4)] {
        game.attempt_move(x, y).unwrap();
    }
    game
}

fn go_opening() -> Game<Go> {
    let mut game = Game::<Go>::new(9).unwrap();
    for (x, y) in [(2, 2), (6, 6), (6, 2), (2, 6)] {
        game.attempt_move(x, y).unwrap();
    }
    game
}

fn bench_greedy(c: &mut Criterion) {
    let mut game = gomoku_midgame();
    let mut greedy = Greedy::new(StrategyConfig::greedy());
    c.bench_function("greedy_gomoku", |b| {
        b.iter(|| {
            let side = game.to_move();
            black_box(greedy.choose(&mut game, side).unwrap())
        })
    });
}

fn bench_alpha_beta(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta");
    group.sample_size(20);

    let mut gomoku = gomoku_midgame();
    let mut search = AlphaBeta::new(StrategyConfig::alpha_beta(2));
    group.bench_function("gomoku_depth_2", |b| {
        b.iter(|| {
            let side = gomoku.to_move();
            black_box(search.choose(&mut gomoku, side).unwrap())
        })
    });

    let mut reversi = reversi_opening();
    let mut search = AlphaBeta::new(StrategyConfig::alpha_beta(4));
    group.bench_function("reversi_depth_4", |b| {
        b.iter(|| {
            let side = reversi.to_move();
            black_box(search.choose(&mut reversi, side).unwrap())
        })
    });

    let mut go = go_opening();
    let mut search = AlphaBeta::new(StrategyConfig::alpha_beta(2));
    group.bench_function("go_depth_2", |b| {
        b.iter(|| {
            let side = go.to_move();
            black_box(search.choose(&mut go, side).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_greedy, bench_alpha_beta);
criterion_main!(benches);
