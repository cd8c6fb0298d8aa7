use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use astrolabe::body::Body;
use astrolabe::geocentric::GeocentricPosition;
use astrolabe::kepler::solve_kepler_equation;
use astrolabe::settings::SolverSettings;
use astrolabe::time::Moment;
use astrolabe::units::Radians;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> Radians {
    Radians::new(rng.random::<f64>() * std::f64::consts::TAU)
}

fn random_cases(seed: u64, eccentricities: std::ops::Range<f64>) -> Vec<(Radians, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..10_000)
        .map(|_| {
            let e = rng.random_range(eccentricities.clone());
            (rand_angle(&mut rng), e)
        })
        .collect()
}

/// Planetary regime: e ∈ [0.0, 0.25)
fn bench_planetary(c: &mut Criterion) {
    let settings = SolverSettings::default();

    c.bench_function("solve_kepler_equation/planetary_e<0.25", |b| {
        b.iter_batched(
            || random_cases(0xDEADBEEF, 0.0..0.25),
            |cases| {
                for (m, e) in cases {
                    let sol = solve_kepler_equation(black_box(m), black_box(e), &settings).unwrap();
                    black_box(sol);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High eccentricity, still converging: e ∈ [0.7, 0.9)
fn bench_high_e(c: &mut Criterion) {
    let settings = SolverSettings::default();

    c.bench_function("solve_kepler_equation/high_e_0.7..0.9", |b| {
        b.iter_batched(
            || random_cases(0xBADF00D, 0.7..0.9),
            |cases| {
                for (m, e) in cases {
                    let _ = solve_kepler_equation(black_box(m), black_box(e), &settings);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Full geocentric reduction of a planet, two Kepler solutions per light-time step.
fn bench_geocentric_venus(c: &mut Criterion) {
    let settings = SolverSettings::default();
    let moment = Moment::from_date(1992, 12, 20).unwrap();

    c.bench_function("geocentric/venus_1992_12_20", |b| {
        b.iter(|| {
            let position =
                GeocentricPosition::new(black_box(Body::Venus), black_box(&moment), &settings);
            black_box(position.ok());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_geocentric_venus
);
criterion_main!(benches);
