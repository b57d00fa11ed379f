//! Performance benchmarks for treelist

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use treelist::test_utils::TestDir;
use treelist::tree::{EntryOrder, ListerConfig, TreeLister};
use treelist::IndentedFormatter;

fn bench_walk(c: &mut Criterion) {
    let dir = TestDir::new();
    dir.populate(5, 3);

    let mut group = c.benchmark_group("walk");
    for (label, order) in [("sorted", EntryOrder::Sorted), ("native", EntryOrder::Native)] {
        let lister = TreeLister::new(ListerConfig {
            order,
            ..Default::default()
        });
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut formatter = IndentedFormatter::new(Vec::with_capacity(64 * 1024));
                let summary = lister
                    .walk(black_box(dir.path()), &mut formatter)
                    .expect("walk failed");
                black_box((summary, formatter.into_inner()))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walk);
criterion_main!(benches);
