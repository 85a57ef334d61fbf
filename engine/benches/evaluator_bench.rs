use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use tictactoe_engine::{best_move, evaluate, Board, GameState, Mark, MatchRng, Player};

fn bench_evaluate_empty_board() {
    let board = Board::new();
    evaluate(&board, Mark::X);
}

fn bench_best_move_mid_game() {
    let board = Board::new().with_move(4, Mark::X).with_move(0, Mark::O);
    best_move(&board, Mark::X);
}

fn bench_optimal_self_play() {
    let one = Player::computer("One", Mark::X, "impossible").unwrap();
    let two = Player::computer("Two", Mark::O, "impossible").unwrap();
    let mut state = GameState::new(one, two).unwrap();
    let mut rng = MatchRng::new(7);
    while !state.is_over() {
        let _ = state.play_computer(&mut rng);
    }
}

fn evaluator_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluator");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("evaluate_empty", |b| b.iter(bench_evaluate_empty_board));

    group.bench_function("best_move_mid_game", |b| b.iter(bench_best_move_mid_game));

    group.bench_function("optimal_self_play", |b| b.iter(bench_optimal_self_play));

    group.finish();
}

criterion_group!(benches, evaluator_bench);
criterion_main!(benches);
