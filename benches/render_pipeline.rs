use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use mandelbrot_render::{
    EscapeEngine, Execution, PaletteKind, Region, RenderConfig, build_grid, colourize,
    palette_factory, render_mandelbrot,
};

fn bench_escape_engine(c: &mut Criterion) {
    let grid = build_grid(Region::default(), 400, 267).expect("valid grid");
    let mut group = c.benchmark_group("escape_engine");

    for execution in [Execution::Serial, Execution::Parallel] {
        let engine = EscapeEngine::new(100)
            .expect("non-zero budget")
            .with_execution(execution);

        group.bench_function(execution.display_name(), |b| {
            b.iter(|| black_box(engine.run(black_box(&grid))))
        });
    }

    group.finish();
}

fn bench_colourize(c: &mut Criterion) {
    let grid = build_grid(Region::default(), 400, 267).expect("valid grid");
    let state = EscapeEngine::new(100).expect("non-zero budget").run(&grid);
    let palette = palette_factory(PaletteKind::Inferno);

    c.bench_function("colourize_inferno", |b| {
        b.iter(|| {
            colourize(
                black_box(state.escape_counts()),
                grid.resolution(),
                100,
                &palette,
            )
            .expect("valid palette")
        })
    });
}

fn bench_full_render(c: &mut Criterion) {
    let config = RenderConfig {
        width: 300,
        height: 200,
        max_iterations: 50,
        execution: Execution::Parallel,
        ..RenderConfig::default()
    };

    c.bench_function("render_300x200_parallel", |b| {
        b.iter(|| render_mandelbrot(black_box(&config)).expect("valid config"))
    });
}

criterion_group!(benches, bench_escape_engine, bench_colourize, bench_full_render);
criterion_main!(benches);
