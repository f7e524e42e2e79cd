use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use menger_kifs::camera::{Axis, Camera};

fn bench_basis_derivation(c: &mut Criterion) {
    let camera = Camera::new(Vec3::new(0.5, 1.0, -2.0), 1.1, -0.4, 0.1, 0.025);

    c.bench_function("camera_basis", |b| {
        b.iter(|| {
            let cam = black_box(&camera);
            (cam.forward(), cam.right(), cam.up())
        })
    });
}

fn bench_walk_step(c: &mut Criterion) {
    c.bench_function("camera_walk_step", |b| {
        let mut camera = Camera::default();
        b.iter(|| {
            camera.translate(Axis::Forward, true, black_box(0.016));
            camera.update_rotation(black_box(1.0), black_box(-1.0));
            black_box(camera.position)
        })
    });
}

criterion_group!(benches, bench_basis_derivation, bench_walk_step);
criterion_main!(benches);
