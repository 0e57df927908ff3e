use chrono::NaiveDateTime;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use stockbook::{Config, Inventory, Product, ProductStore};

fn catalogue(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| Product::new(format!("P{i}"), format!("item {i}"), 1.0 + i as f64, "bench", 1_000_000))
        .collect()
}

fn bench_save_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("save_load");
    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("products", size), &size, |b, &size| {
            let dir = tempfile::tempdir().unwrap();
            let store = ProductStore::open(dir.path().join("products.json"));
            let products = catalogue(size);
            b.iter(|| {
                store.save(&products).unwrap();
                black_box(store.load().unwrap());
            });
        });
    }
}

fn bench_record_sale(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_sale");
    group.sample_size(50);
    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("catalogue", size), &size, |b, &size| {
            let dir = tempfile::tempdir().unwrap();
            let inv = Inventory::new(&Config::in_dir(dir.path()).pretty(false));
            inv.products.save(&catalogue(size)).unwrap();
            let at = NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap();
            let last = format!("P{}", size - 1);
            b.iter(|| {
                // keep the ledger from growing across iterations
                inv.sales.save(&[]).unwrap();
                black_box(inv.record_sale_at(&last, 1, at).unwrap());
            });
        });
    }
}

criterion_group!(benches, bench_save_load, bench_record_sale);
criterion_main!(benches);
