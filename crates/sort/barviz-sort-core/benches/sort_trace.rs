use criterion::{black_box, criterion_group, criterion_main, Criterion};

use barviz_sort_core::strategies::Strategy;

/// Deterministic pseudo-shuffled input; LCG keeps the bench reproducible
/// without pulling in a rand dependency.
fn shuffled(n: usize) -> Vec<u32> {
    let mut state = 0x2545_f491u64;
    let mut values: Vec<u32> = (0..n as u32).collect();
    for i in (1..n).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        values.swap(i, j);
    }
    values
}

fn bench_sort_trace(c: &mut Criterion) {
    let input = shuffled(512);
    for strategy in Strategy::ALL {
        c.bench_function(&format!("sort_trace/{}/512", strategy.name()), |b| {
            b.iter(|| {
                let mut values = input.clone();
                black_box(strategy.sort(black_box(&mut values)))
            })
        });
    }
}

criterion_group!(benches, bench_sort_trace);
criterion_main!(benches);
