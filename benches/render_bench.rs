use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use tandav::rendering::Surface;
use tandav::{clamp_resolution, render_scene, PREVIEW_CAP};

fn bench_preview_frame(c: &mut Criterion) {
    let resolution = clamp_resolution(1280, PREVIEW_CAP);
    let mut surface = Surface::new();
    let mut rng = Pcg64::seed_from_u64(1);

    c.bench_function("render_scene_preview_1x", |b| {
        b.iter(|| render_scene(&mut surface, resolution, 1.0, &mut rng))
    });

    c.bench_function("render_scene_preview_2x", |b| {
        b.iter(|| render_scene(&mut surface, resolution, 2.0, &mut rng))
    });
}

criterion_group!(benches, bench_preview_frame);
criterion_main!(benches);
