use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::Rgb;
use molgif_math::Vec3;
use molgif_raytrace::{Cylinder, Material, PointLight, Renderer, Scene, Shape, Sphere, View};

/// Ring of six carbons with bonds, roughly benzene-sized.
fn ring_scene(size: u32) -> Scene {
    let gray = Material::new(Rgb([146, 146, 146]));
    let atoms: Vec<Vec3> = (0..6)
        .map(|i| {
            let a = i as f32 * std::f32::consts::PI / 3.0;
            Vec3::new(1.4 * a.cos(), 1.4 * a.sin(), 0.0)
        })
        .collect();

    let mut shapes: Vec<Shape> = atoms
        .iter()
        .map(|p| Sphere::new(*p, 0.4, gray).into())
        .collect();
    for i in 0..6 {
        let (a, b) = (atoms[i], atoms[(i + 1) % 6]);
        let mid = (a + b) * 0.5;
        shapes.push(Cylinder::new(a, mid, 0.2, gray).into());
        shapes.push(Cylinder::new(b, mid, 0.2, gray).into());
    }

    Scene::new(shapes, View::fit(size, size, 1.4), PointLight::default(), Rgb([0, 0, 0]))
}

fn bench_render(c: &mut Criterion) {
    let scene = ring_scene(256);
    let renderer = Renderer::new(0, 64).expect("thread pool");

    c.bench_function("render_256_parallel", |b| {
        b.iter(|| renderer.render(black_box(&scene)))
    });
    c.bench_function("render_256_sequential", |b| {
        b.iter(|| renderer.render_sequential(black_box(&scene)))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
