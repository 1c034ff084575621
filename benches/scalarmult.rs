use curve13318::scalarmult;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn base_point() -> [u8; 64] {
    let mut p = [0u8; 64];
    p[32..64].copy_from_slice(
        &hex::decode("b32b6af7ceb0c94d89e07ab04c5d1d45be89116769acecace148f3075e80f011")
            .unwrap(),
    );
    p
}

pub fn bench_scalarmult(c: &mut Criterion) {
    let point = base_point();
    let key: [u8; 32] = core::array::from_fn(|i| (151 * i + 47) as u8);

    c.bench_function("scalarmult", |b| {
        b.iter(|| scalarmult(black_box(&key), black_box(&point)))
    });
}

criterion_group!(benches, bench_scalarmult);
criterion_main!(benches);
