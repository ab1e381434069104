use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::tictactoe::{calculate_move, select_move, Board, BotInput, Mark};

fn bench_self_play_full_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while !board.outcome().is_over() {
        let input = BotInput {
            board,
            current_mark,
        };

        match calculate_move(input) {
            Ok(index) => {
                if board.place(index, current_mark).is_err() {
                    break;
                }
                current_mark = current_mark.opponent().unwrap();
            }
            Err(_) => break,
        }
    }
}

fn bench_single_move_empty_board() {
    let board = Board::new();
    let _ = select_move(black_box(&board), Mark::X);
}

fn bench_single_move_mid_game() {
    let board: Board = "X../.O./..X".parse().unwrap();
    let _ = select_move(black_box(&board), Mark::O);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("self_play_full_game", |b| {
        b.iter(bench_self_play_full_game)
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
