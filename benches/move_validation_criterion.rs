use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_arbiter::game_state::chess_rules::SelfCheckPolicy;
use chess_arbiter::game_state::chess_types::{Color, Coordinate};
use chess_arbiter::game_state::game_state::GameState;
use chess_arbiter::move_generation::legal_move_generator::generate_all_moves;
use chess_arbiter::utils::state_codec::{decode_cells, CELL_COUNT};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    /// `(cell index, tag)` pairs; an empty list is the opening layout.
    cells: &'static [(usize, &'static str)],
    side: Color,
    expected_moves: usize,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "opening_white",
        cells: &[],
        side: Color::White,
        expected_moves: 20,
    },
    BenchCase {
        name: "opening_black",
        cells: &[],
        side: Color::Black,
        expected_moves: 20,
    },
    BenchCase {
        name: "rook_ending",
        cells: &[(0, "wr"), (4, "wki"), (60, "bki")],
        side: Color::White,
        expected_moves: 16,
    },
];

fn game_for(case: &BenchCase) -> GameState {
    let mut tokens = vec![""; if case.cells.is_empty() { 0 } else { CELL_COUNT }];
    for (index, tag) in case.cells {
        tokens[*index] = *tag;
    }
    let board = decode_cells(&tokens).expect("benchmark position should decode");
    GameState::from_board(board, case.side)
}

fn bench_generate_all_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_all_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(30);

    for case in CASES {
        let game = game_for(case);

        // Correctness guard before benchmarking.
        let warmup = generate_all_moves(&game.board, case.side, SelfCheckPolicy::Uniform);
        assert_eq!(
            warmup.len(),
            case.expected_moves,
            "move count mismatch in warmup for {}",
            case.name
        );

        group.throughput(Throughput::Elements(case.expected_moves as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(case.name),
            &case.expected_moves,
            |b, expected| {
                b.iter(|| {
                    let moves = generate_all_moves(
                        black_box(&game.board),
                        black_box(case.side),
                        SelfCheckPolicy::Uniform,
                    );
                    assert_eq!(moves.len(), *expected);
                    black_box(moves.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_controller_move(c: &mut Criterion) {
    let game = GameState::new_game();
    let from = Coordinate::new(4, 1);
    let to = Coordinate::new(4, 3);

    let mut warmup = game.clone();
    warmup
        .apply_move(from, to)
        .expect("e2-e4 should be legal in the opening");

    c.bench_function("controller_apply_e2e4", |b| {
        b.iter(|| {
            let mut game = game.clone();
            let report = game
                .apply_move(black_box(from), black_box(to))
                .expect("benchmark move should stay legal");
            black_box(report.condition)
        });
    });
}

criterion_group!(move_validation_benches, bench_generate_all_moves, bench_controller_move);
criterion_main!(move_validation_benches);
