use criterion::{criterion_group, criterion_main, Criterion, black_box};
use glam::Vec3;
use roam::engine::RoamEngine;
use roam::layout::{self, LayoutSeed};
use roam::options::{LayoutOptions, Options};
use roam::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicOut;
    c.bench_function("cubic_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn layout_benchmark(c: &mut Criterion) {
    let params = LayoutOptions::default();

    c.bench_function("generate_shelf_run", |b| {
        let mut variant = 0;
        b.iter(|| {
            variant += 1;
            black_box(layout::generate(
                LayoutSeed { variant, slot: 2 },
                black_box(1.55),
                &params,
            ))
        })
    });
}

fn engine_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_tick");

    group.bench_function("idle", |b| {
        let mut engine = RoamEngine::new(Options::default());
        b.iter(|| engine.tick(black_box(1.0 / 60.0)));
    });

    group.bench_function("agent_walking", |b| {
        let mut engine = RoamEngine::new(Options::default());
        engine.move_agent_to(Vec3::new(8.0, 0.1, 8.0));
        b.iter(|| {
            engine.tick(black_box(1.0 / 60.0));
            // Keep the walk alive across iterations.
            if !engine.transition_active() && engine.agent().arrived {
                engine.move_agent_to(Vec3::new(-8.0, 0.1, -8.0));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    layout_benchmark,
    engine_tick_benchmark
);
criterion_main!(benches);
