//! Helper benchmarks.
//!
//!   lookup_by_title_200 ...... title scan over a 200-entry listing
//!   lookup_by_index_200 ...... positional lookup
//!   memoize_hit .............. cached call
//!   date_iso_string .......... ISO date text coercion
//!   translate_row_50 ......... 5 renames on a 50-column row

use std::borrow::Cow;
use std::collections::HashMap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use analytics_core::{affix, to_date, translate, Addressable, AddressableList, Memoized};

#[derive(Debug, Clone)]
struct Metric {
    id: String,
    title: String,
}

impl Addressable for Metric {
    fn title(&self) -> &str {
        &self.title
    }

    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}

fn metric_list(count: usize) -> AddressableList<Metric> {
    AddressableList::new(
        (0..count).map(|i| Metric {
            id: format!("metrics/event{i}"),
            title: format!("Custom Event {i}"),
        }),
        "metrics",
    )
}

fn report_row(width: usize) -> HashMap<String, u64> {
    (0..width).map(|i| (format!("col{i}"), i as u64)).collect()
}

fn bench_lookup(c: &mut Criterion) {
    let metrics = metric_list(200);

    c.bench_function("lookup_by_title_200", |b| {
        b.iter(|| {
            let found = metrics.get(black_box("Custom Event 150"));
            black_box(found.is_ok());
        });
    });

    c.bench_function("lookup_by_index_200", |b| {
        b.iter(|| {
            let found = metrics.get(black_box(-1));
            black_box(found.is_ok());
        });
    });
}

fn bench_memoize(c: &mut Criterion) {
    let name = Memoized::infallible(|(base, prefix): &(String, String)| {
        affix(base, prefix, "", "_")
    });
    let key = ("report".to_string(), "daily".to_string());
    name.get(key.clone());

    c.bench_function("memoize_hit", |b| {
        b.iter(|| black_box(name.get(black_box(key.clone()))));
    });
}

fn bench_date(c: &mut Criterion) {
    c.bench_function("date_iso_string", |b| {
        b.iter(|| black_box(to_date(black_box("2020-01-15"))));
    });
}

fn bench_translate(c: &mut Criterion) {
    let row = report_row(50);
    let names: Vec<(String, String)> = (0..5)
        .map(|i| (format!("col{i}"), format!("renamed{i}")))
        .collect();

    c.bench_function("translate_row_50", |b| {
        b.iter(|| {
            let renamed = translate(black_box(&row), names.iter().map(|(old, new)| (old, new)));
            black_box(renamed);
        });
    });
}

criterion_group!(benches, bench_lookup, bench_memoize, bench_date, bench_translate);
criterion_main!(benches);
