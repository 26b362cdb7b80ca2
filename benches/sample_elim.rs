use divan::{Bencher, black_box};
use synthkit::Point3;
use synthkit::keypoints::{SphereSurface, SurfaceSource, sample_eliminate};

fn main() {
    divan::main();
}

fn sphere_cloud(count: usize) -> (Vec<Point3>, f64) {
    let sphere = SphereSurface::new(Point3::origin(), 1.0);
    (sphere.sample_surface(count, 7).unwrap(), sphere.volume())
}

#[divan::bench]
fn eliminate_1k_to_100(bencher: Bencher) {
    let (points, volume) = sphere_cloud(1000);
    bencher.bench_local(move || {
        sample_eliminate(black_box(&points), volume, 100, 1).unwrap();
    });
}

#[divan::bench]
fn eliminate_10k_to_1k(bencher: Bencher) {
    let (points, volume) = sphere_cloud(10_000);
    bencher.bench_local(move || {
        sample_eliminate(black_box(&points), volume, 1000, 1).unwrap();
    });
}

#[divan::bench]
fn eliminate_without_refinement(bencher: Bencher) {
    let (points, volume) = sphere_cloud(10_000);
    bencher.bench_local(move || {
        sample_eliminate(black_box(&points), volume, 1000, 1000).unwrap();
    });
}
