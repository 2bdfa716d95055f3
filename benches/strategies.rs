#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use hashlab::{HashTable, Strategy};
use proptest::{
    collection::vec,
    prelude::any,
    strategy::{Strategy as _, ValueTree},
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const TABLE_SIZE: usize = 4096;
const SAMPLE_SIZE: usize = 10;

fn strategy_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items: Vec<(String, String)> = vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Collision strategy comparison benchmark");
    group.sample_size(SAMPLE_SIZE);

    for strategy in Strategy::ALL {
        let mut table: HashTable<String, String> = HashTable::new(strategy, TABLE_SIZE).unwrap();
        group.bench_function(format!("{strategy} insert"), |b| {
            b.iter(|| {
                for (key, value) in items.clone() {
                    table.insert(key, value).ok();
                }
            });
        });
        group.bench_function(format!("{strategy} search"), |b| {
            b.iter(|| {
                for (key, _) in &items {
                    let _ = table.search(key.as_str());
                }
            });
        });
    }

    let mut rust_map = HashMap::new();
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, strategy_benches);

criterion_main!(benches);
