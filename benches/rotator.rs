// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame work of the page.
//!
//! Measures the performance of:
//! - Rotator ticks and manual selection
//! - Count-up value computation for the statistics row
//! - Translation lookups with and without arguments

use criterion::{criterion_group, criterion_main, Criterion};
use fluent_bundle::FluentValue;
use podium::content::STATS;
use podium::i18n::I18n;
use podium::locale::Locale;
use podium::ui::state::counter::{value_at, Easing};
use podium::ui::state::Rotator;
use std::hint::black_box;
use std::time::Duration;

/// Benchmark rotator advancement and selection.
fn bench_rotator(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotator");

    let mut rotator =
        Rotator::new((0..4).collect::<Vec<u32>>(), Duration::from_millis(3500)).unwrap();

    group.bench_function("advance", |b| {
        b.iter(|| {
            rotator.advance();
            black_box(rotator.current_index());
        });
    });

    group.bench_function("select_then_advance", |b| {
        b.iter(|| {
            black_box(rotator.select_index(black_box(2)));
            rotator.advance();
        });
    });

    group.finish();
}

/// Benchmark one animation frame of the four statistic counters.
fn bench_counter_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter");

    for easing in [Easing::Linear, Easing::EaseOutCubic] {
        group.bench_function(format!("{easing:?}"), |b| {
            b.iter(|| {
                for stat in &STATS {
                    black_box(value_at(stat.value, black_box(0.42), easing));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark translation lookups done on every view.
fn bench_translations(c: &mut Criterion) {
    let mut group = c.benchmark_group("i18n");
    let i18n = I18n::new(Locale::Hebrew);

    group.bench_function("tr", |b| {
        b.iter(|| black_box(i18n.tr(black_box("hero-subtitle"))));
    });

    group.bench_function("tr_args", |b| {
        b.iter(|| {
            black_box(i18n.tr_args(
                "footer-copyright",
                &[("year", FluentValue::from("2026"))],
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_rotator, bench_counter_frame, bench_translations);
criterion_main!(benches);
