// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_breadcrumb::reconcile::{apply, plan_append, plan_start};
use understory_breadcrumb::store::BreadcrumbStore;
use understory_breadcrumb::types::BreadcrumbItem;

fn gen_trail(depth: usize) -> Vec<BreadcrumbItem> {
    (0..depth)
        .map(|d| {
            BreadcrumbItem::new(format!("/level/{d}"), format!("level{d}"))
                .with_params([format!("p{d}")])
        })
        .collect()
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// A mix of starts and appends over a small key space, as page lifecycles would emit.
fn gen_events(count: usize, keys: u64) -> Vec<(bool, BreadcrumbItem)> {
    let mut rng = Rng::new(0xB4EA_DC4B_5EED_0001);
    (0..count)
        .map(|_| {
            let k = rng.below(keys);
            let start = rng.below(8) == 0;
            let item = BreadcrumbItem::new(format!("/k/{k}"), format!("k{k}"))
                .with_params([format!("{}", rng.below(3))]);
            (start, item)
        })
        .collect()
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    for &depth in &[4usize, 16, 64] {
        let trail = gen_trail(depth);
        let leaf = trail[depth - 1].clone();
        let novel = BreadcrumbItem::new("/novel", "novel");
        group.bench_function(format!("leaf_noop_d{depth}"), |b| {
            b.iter(|| black_box(plan_append(&trail, black_box(&leaf))));
        });
        group.bench_function(format!("novel_append_d{depth}"), |b| {
            b.iter(|| black_box(plan_append(&trail, black_box(&novel))));
        });
        group.bench_function(format!("truncate_root_d{depth}"), |b| {
            b.iter_batched(
                || (trail.clone(), trail[0].clone()),
                |(mut path, root)| {
                    let t = plan_start(&path, &root);
                    apply(&mut path, t, root);
                    black_box(path);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_store_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_stream");
    for &keys in &[8u64, 64] {
        let events = gen_events(1024, keys);
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_function(format!("events_1024_keys{keys}"), |b| {
            b.iter_batched(
                || events.clone(),
                |events| {
                    let mut store = BreadcrumbStore::new();
                    store.subscribe(|snap, changes| {
                        black_box((snap.path.len(), changes));
                    });
                    for (start, item) in events {
                        if start {
                            black_box(store.start_breadcrumb(item));
                        } else {
                            black_box(store.append_breadcrumb(item));
                        }
                    }
                    black_box(store.path().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan, bench_store_stream);
criterion_main!(benches);
