//! Criterion benchmarks for levelgate

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::fmt;
use std::sync::Arc;

use levelgate::prelude::*;
use levelgate::{error, info, trace, verbose};

/// Swallows emissions so the benchmarks measure gating, not console I/O.
struct NullAction;

impl Action for NullAction {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        black_box((level, fmt::format(message)));
    }

    fn flush(&self) {}

    fn name(&self) -> &str {
        "null"
    }
}

fn null_system(name: &str, initial: Level) -> LogSystem {
    LogSystem::with_action(name, initial, Arc::new(NullAction) as Arc<dyn Action>)
}

// ============================================================================
// Call-Site Tier Benchmarks
// ============================================================================

fn bench_call_site_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("call_site_tiers");
    group.throughput(Throughput::Elements(1));

    let system = null_system("bench", Level::Info);

    group.bench_function("hardwired_error", |b| {
        b.iter(|| {
            error!(system, "request failed: {}", black_box(500));
        });
    });

    group.bench_function("dynamic_permitted_info", |b| {
        b.iter(|| {
            info!(system, "processed {} items", black_box(100));
        });
    });

    group.bench_function("dynamic_suppressed_verbose", |b| {
        b.iter(|| {
            verbose!(system, "cache hit for {}", black_box("key"));
        });
    });

    group.bench_function("compiled_out_trace", |b| {
        b.iter(|| {
            trace!(system, "entering handler {}", black_box(7));
        });
    });

    group.finish();
}

// ============================================================================
// Accessor Benchmarks
// ============================================================================

fn bench_level_accessors(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_accessors");
    group.throughput(Throughput::Elements(1));

    let system = null_system("accessors", Level::Info);

    group.bench_function("level", |b| {
        b.iter(|| black_box(system.level()));
    });

    group.bench_function("set_level", |b| {
        b.iter(|| {
            system.set_level(black_box(Level::Info));
        });
    });

    group.bench_function("permits", |b| {
        b.iter(|| black_box(system.permits(black_box(Level::Verbose))));
    });

    group.bench_function("clamped", |b| {
        b.iter(|| black_box(LevelFilter::from_raw(black_box(42)).clamped()));
    });

    group.finish();
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    group.throughput(Throughput::Elements(1));

    group.bench_function("define", |b| {
        let mut counter = 0u64;
        let registry = Registry::with_action(Arc::new(NullAction) as Arc<dyn Action>);
        b.iter(|| {
            counter += 1;
            let name = format!("system_{}", counter);
            black_box(registry.define(&name, Level::Info).unwrap())
        });
    });

    group.bench_function("declare", |b| {
        let registry = Registry::with_action(Arc::new(NullAction) as Arc<dyn Action>);
        registry.define("hot", Level::Info).unwrap();
        b.iter(|| black_box(registry.declare(black_box("hot")).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_call_site_tiers,
    bench_level_accessors,
    bench_registry
);

criterion_main!(benches);
