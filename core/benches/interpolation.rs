use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math::IntPolynomial;
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use secret_core::{Point, SecretRecovery};

const THRESHOLDS: &[usize] = &[3, 8, 16, 32];

fn fabricate_points(k: usize) -> Vec<Point> {
    // Fixed seed keeps runs comparable.
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let coefficients = (0..k)
        .map(|_| {
            (BigInt::from(rng.random::<i128>()) << 128)
                + BigInt::from(rng.random::<u128>())
        })
        .collect();
    let poly = IntPolynomial::new(coefficients);

    (1..=k as i64)
        .map(|x| {
            let x = BigInt::from(x);
            let y = poly.evaluate(&x);
            Point::new(x, y)
        })
        .collect()
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct");

    for &k in THRESHOLDS {
        let points = fabricate_points(k);
        let recovery =
            SecretRecovery::with_threshold(k).expect("valid threshold");
        group.bench_function(format!("k={k}"), |b| {
            b.iter(|| {
                let result = recovery
                    .reconstruct(black_box(&points))
                    .expect("reconstruction succeeds");
                black_box(result);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconstruct);
criterion_main!(benches);
