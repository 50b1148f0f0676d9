use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tidepool::WorkerPool;

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("enqueue_noop", |b| {
        let pool = WorkerPool::new(4).unwrap();
        b.iter(|| pool.enqueue(|| {}));
    });

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");
    group.sample_size(20);

    for &workers in &[1usize, 2, 4, 8] {
        group.throughput(Throughput::Elements(10_000));
        group.bench_function(format!("10k_tasks_{workers}_workers"), |b| {
            b.iter(|| {
                let pool = WorkerPool::new(workers).unwrap();
                let sum = Arc::new(AtomicU64::new(0));

                for i in 0..10_000u64 {
                    let sum = Arc::clone(&sum);
                    pool.enqueue(move || {
                        sum.fetch_add(black_box(i), Ordering::Relaxed);
                    });
                }

                pool.shutdown();
                black_box(sum.load(Ordering::Relaxed))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_drain);
criterion_main!(benches);
