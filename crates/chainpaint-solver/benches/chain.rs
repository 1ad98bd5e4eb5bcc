//! Benchmarks for chain simulation.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench chain
//! ```

use std::hint;

use chainpaint_core::{Color, Grid, Position, PositionSet};
use chainpaint_solver::{ChainBoard, ChainSimulator, step};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

fn parse(s: &str) -> Grid {
    s.parse().unwrap()
}

fn boards() -> [(&'static str, Grid); 4] {
    [
        // stable mix of colors, no link at all
        (
            "stable",
            parse(
                "
                RBGYPRBG
                BGYPRBGY
                GYPRBGYP
                YPRBGYPR
                PRBGYPRB
                RBGYPRBG",
            ),
        ),
        (
            "two_links",
            parse(
                "
                ........
                ........
                R.......
                G.......
                GR......
                GGRR....",
            ),
        ),
        // stacked layers that cascade row by row
        (
            "cascade",
            parse(
                "
                YYYBBB..
                GGGYBB..
                RRRGYY..
                BBBRGG..
                PPPBRR..
                JJJPBB..",
            ),
        ),
        ("filled", Grid::filled(Color::Green)),
    ]
}

fn bench_find_matches(c: &mut Criterion) {
    for (param, grid) in boards() {
        c.bench_with_input(BenchmarkId::new("find_matches", param), &grid, |b, grid| {
            b.iter(|| hint::black_box(step::find_matches(hint::black_box(grid))));
        });
    }
}

fn bench_chain_run(c: &mut Criterion) {
    let simulator = ChainSimulator::new();
    let marks = PositionSet::from_elem(Position::new(0, 2));

    for (param, grid) in boards() {
        c.bench_with_input(BenchmarkId::new("chain_run", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || ChainBoard::with_zero_score(hint::black_box(*grid), marks),
                |board| hint::black_box(simulator.run(board)),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_find_matches, bench_chain_run);
criterion_main!(benches);
