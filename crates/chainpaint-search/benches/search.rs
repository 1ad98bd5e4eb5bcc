//! Benchmarks for candidate pruning and full searches.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::hint;

use chainpaint_core::{Color, Grid};
use chainpaint_search::{
    RecolorWindow, SearchConfig, SearchRequest, Searcher, TriggerHeuristic, pruning,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const STAIRS: &str = "
    BYPGBYPG
    PGBYPGBY
    RYPGBYPG
    PGBYPGBY
    RYPGBYPG
    RGBYPGBY";

const SPARSE: &str = "
    ........
    ........
    ..Y.....
    .RGB..P.
    RGBY.PYB
    GBYRRPYB";

fn request(board: &str) -> SearchRequest {
    SearchRequest::new(board.parse().unwrap(), "PPGGBBYY".parse().unwrap())
}

fn bench_pruning(c: &mut Criterion) {
    for (param, board) in [("stairs", STAIRS), ("sparse", SPARSE)] {
        let grid: Grid = board.parse().unwrap();
        c.bench_with_input(BenchmarkId::new("recolor_candidates", param), &grid, |b, grid| {
            b.iter(|| pruning::recolor_candidates(hint::black_box(grid), Color::Red));
        });
        for heuristic in [TriggerHeuristic::Neighborhood, TriggerHeuristic::Collapse] {
            let id = BenchmarkId::new(format!("trigger_candidates/{heuristic:?}"), param);
            c.bench_with_input(id, &grid, |b, grid| {
                b.iter(|| pruning::trigger_candidates(hint::black_box(grid), heuristic));
            });
        }
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for max in 1..=2 {
        for (param, board) in [("stairs", STAIRS), ("sparse", SPARSE)] {
            let request = request(board);
            let searcher = Searcher::new(
                SearchConfig::new(Color::Red)
                    .with_max_recolor(max)
                    .with_window(RecolorWindow::Range { min: 0, max }),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("up_to_{max}"), param),
                &request,
                |b, request| {
                    b.iter(|| hint::black_box(searcher.run(hint::black_box(request)).unwrap()));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_pruning, bench_search);
criterion_main!(benches);
