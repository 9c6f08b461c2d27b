//! Benchmarks for the splitter solver and input paths.
//!
//! Run with: cargo bench -p splitter-layout

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use splitter_layout::collapse::{collapse, expand};
use splitter_layout::{
    KeyCode, KeyEvent, PanelSpec, PercentBounds, PointerPosition, Splitter, SplitterConfig,
    resize_pair,
};
use std::hint::black_box;

fn even(n: usize) -> Vec<f64> {
    vec![100.0 / n as f64; n]
}

fn bench_resize_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("splitter/resize_pair");

    for n in [2, 8, 32, 128] {
        let sizes = even(n);
        let bounds = vec![
            PercentBounds {
                min: 100.0 / (4 * n) as f64,
                max: 75.0,
            };
            n
        ];
        group.bench_with_input(BenchmarkId::new("middle_divider", n), &sizes, |b, sizes| {
            b.iter(|| black_box(resize_pair(sizes, (n - 1) / 2, black_box(3.5), &bounds)))
        });
    }

    group.finish();
}

fn bench_collapse_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("splitter/collapse_expand");

    for n in [3, 16, 64] {
        let sizes = even(n);
        let expanded = vec![true; n];
        let mins = vec![100.0 / (2 * n) as f64; n];
        group.bench_with_input(BenchmarkId::new("round_trip", n), &sizes, |b, sizes| {
            b.iter(|| {
                let collapsed = collapse(sizes, 0, &expanded);
                black_box(expand(&collapsed, 0, sizes[0], &expanded, &mins))
            })
        });
    }

    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("splitter/drag_session");

    for n in [2, 8, 32] {
        group.bench_function(BenchmarkId::new("hundred_moves", n), |b| {
            b.iter_batched(
                || {
                    let mut splitter =
                        Splitter::new(SplitterConfig::default(), vec![PanelSpec::new(); n])
                            .expect("valid splitter");
                    splitter.set_container_length(1920.0);
                    splitter
                },
                |mut splitter| {
                    let _ = splitter.pointer_down(0, PointerPosition::new(60.0, 0.0));
                    for step in 0..100 {
                        let x = 60.0 + f64::from(step) * 3.0;
                        let _ = black_box(splitter.pointer_move(PointerPosition::new(x, 0.0)));
                    }
                    black_box(splitter.pointer_up())
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_keyboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("splitter/keyboard");
    let right = KeyEvent::new(KeyCode::Right);
    let left = KeyEvent::new(KeyCode::Left);

    group.bench_function("alternating_steps", |b| {
        let mut splitter = Splitter::new(SplitterConfig::default(), vec![PanelSpec::new(); 4])
            .expect("valid splitter");
        splitter.set_container_length(1200.0);
        b.iter(|| {
            black_box(splitter.key_down(1, &right));
            black_box(splitter.key_down(1, &left))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resize_pair,
    bench_collapse_expand,
    bench_drag_session,
    bench_keyboard
);
criterion_main!(benches);
