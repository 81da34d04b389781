//! Criterion benchmarks for record store operations.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use user_store_core::{User, UserStore};

/// Creates a store pre-populated with `count` records.
fn populated_store(count: i64) -> UserStore {
    let users = (0..count)
        .map(|id| User::new(id, format!("user{}", id), format!("user{}@e.com", id)))
        .collect();
    UserStore::with_users(users)
}

/// Benchmark: lookup by id at the end of the collection
fn benchmark_get(c: &mut Criterion) {
    let store = populated_store(1000);
    c.bench_function("get_last_of_1000", |b| {
        b.iter(|| black_box(store.get(black_box(999)).unwrap()))
    });
}

/// Benchmark: snapshot of the whole collection
fn benchmark_list_all(c: &mut Criterion) {
    let store = populated_store(1000);
    c.bench_function("list_all_1000", |b| {
        b.iter(|| black_box(store.list_all().unwrap()))
    });
}

/// Benchmark: in-place replacement
fn benchmark_update(c: &mut Criterion) {
    let store = populated_store(1000);
    c.bench_function("update_middle_of_1000", |b| {
        b.iter(|| {
            store
                .update(black_box(User::new(500, "updated", "u@e.com")))
                .unwrap()
        })
    });
}

/// Benchmark: add then delete one record
fn benchmark_add_delete(c: &mut Criterion) {
    let store = populated_store(1000);
    c.bench_function("add_delete_1000", |b| {
        b.iter(|| {
            store.add(User::new(-1, "tmp", "t@e.com")).unwrap();
            black_box(store.delete(-1).unwrap())
        })
    });
}

criterion_group!(
    benches,
    benchmark_get,
    benchmark_list_all,
    benchmark_update,
    benchmark_add_delete
);
criterion_main!(benches);
