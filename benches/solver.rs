//! Benchmarks for the pocket cube solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pocket_solver::geometry::Angle::{Deg180, Deg270, Deg90};
use pocket_solver::turn::Face::{Front, Right, Upper};
use pocket_solver::{PermutationTables, Solver, State, Turn};

/// Six-turn scramble whose shortest solution is also six turns.
const SCRAMBLE: [Turn; 6] = [
    Turn::new(Right, Deg90),
    Turn::new(Upper, Deg90),
    Turn::new(Front, Deg270),
    Turn::new(Right, Deg180),
    Turn::new(Upper, Deg270),
    Turn::new(Front, Deg90),
];

/// Benchmark deriving both permutation tables.
fn bench_tables(c: &mut Criterion) {
    c.bench_function("build_tables", |b| b.iter(PermutationTables::new));
}

/// Benchmark a full search for a deep scramble.
fn bench_solve(c: &mut Criterion) {
    let tables = PermutationTables::new().unwrap();
    let state = State::solved().apply_all(&SCRAMBLE, &tables);

    let mut group = c.benchmark_group("solve");
    group.sample_size(10);
    group.bench_function("six_turns", |b| {
        b.iter(|| Solver::new(&tables).solve(black_box(&state)))
    });
    group.finish();
}

/// Benchmark computing the canonical state of an equivalence class.
fn bench_canonical(c: &mut Criterion) {
    let tables = PermutationTables::new().unwrap();
    let state = State::solved().apply_all(&SCRAMBLE, &tables);

    c.bench_function("canonical", |b| {
        b.iter(|| black_box(&state).canonical(&tables))
    });
}

/// Benchmark applying a single face turn.
fn bench_apply_turn(c: &mut Criterion) {
    let tables = PermutationTables::new().unwrap();
    let state = State::solved();
    let turn = Turn::new(Front, Deg90);

    c.bench_function("apply_turn", |b| {
        b.iter(|| black_box(&state).apply(turn, &tables))
    });
}

criterion_group!(
    benches,
    bench_tables,
    bench_solve,
    bench_canonical,
    bench_apply_turn
);
criterion_main!(benches);
