use criterion::{black_box, criterion_group, criterion_main, Criterion};

use geodist::ellipsoid::{BESSEL, GRS80, WGS84};
use geodist::{azimuth, hubeny_distance, trigonometric_distance, GeoPoint};

fn points() -> (GeoPoint, GeoPoint) {
    (
        GeoPoint::new(36.10056, 140.09111),
        GeoPoint::new(35.65500, 139.74472),
    )
}

fn bench_distance(c: &mut Criterion) {
    let (from, to) = points();

    c.bench_function("trigonometric", |b| {
        b.iter(|| trigonometric_distance(black_box(from), black_box(to)))
    });

    let mut group = c.benchmark_group("hubeny");
    for params in [WGS84, GRS80, BESSEL] {
        group.bench_function(params.name, |b| {
            b.iter(|| hubeny_distance(black_box(from), black_box(to), black_box(&params)))
        });
    }
    group.finish();
}

fn bench_azimuth(c: &mut Criterion) {
    let (from, to) = points();
    c.bench_function("azimuth", |b| b.iter(|| azimuth(black_box(from), black_box(to))));
}

criterion_group!(benches, bench_distance, bench_azimuth);
criterion_main!(benches);
