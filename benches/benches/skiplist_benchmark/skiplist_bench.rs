use std::{hint::black_box, io::Cursor};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use skipdict::{Ascending, Dictionary, LoadPolicy, SkipList};

const MAX_HEIGHT: usize = 16;

fn make_sample_keys(
    n: usize,
    seed: u64,
) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut v = Vec::with_capacity(n);

    for _ in 0..n {
        v.push(rng.gen_range(i64::MIN..=i64::MAX));
    }

    v
}

fn make_sample_words(
    n: usize,
    seed: u64,
) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..n)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_insert");
    for &n in &[1_000usize, 10_000, 50_000] {
        let keys = make_sample_keys(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                // Каждый прогон новый список
                let mut sl = SkipList::with_seed(MAX_HEIGHT, Ascending, 7).unwrap();
                for k in keys.iter() {
                    sl.insert(*k).unwrap();
                }
                black_box(sl);
            })
        });
    }
    group.finish();
}

fn bench_search_hit_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_search");
    for &n in &[1_000usize, 10_000, 50_000] {
        let mut sl = SkipList::with_seed(MAX_HEIGHT, Ascending, 7).unwrap();
        let keys = make_sample_keys(n, 123);
        for k in &keys {
            sl.insert(*k).unwrap();
        }

        let misses = make_sample_keys(n, 9999);

        group.bench_with_input(BenchmarkId::new("search_hit", n), &n, |b, &_n| {
            b.iter(|| {
                for k in keys.iter().take(1000) {
                    black_box(sl.search(k));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("search_miss", n), &n, |b, &_n| {
            b.iter(|| {
                for k in misses.iter().take(1000) {
                    black_box(sl.search(k));
                }
            })
        });
    }
    group.finish();
}

fn bench_max_height(c: &mut Criterion) {
    let mut group = c.benchmark_group("skiplist_max_height");
    let keys = make_sample_keys(10_000, 5);
    group.throughput(Throughput::Elements(keys.len() as u64));

    // Высота 1 вырождает список в связный.
    for &height in &[1usize, 4, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(height), &height, |b, &h| {
            b.iter(|| {
                let mut sl = SkipList::with_seed(h, Ascending, 11).unwrap();
                for k in keys.iter().take(2_000) {
                    sl.insert(*k).unwrap();
                }
                for k in keys.iter().take(2_000) {
                    black_box(sl.search(k));
                }
            })
        });
    }
    group.finish();
}

fn bench_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary");
    let words = make_sample_words(20_000, 77);
    let source = words.join("\n");

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("load", |b| {
        b.iter(|| {
            let mut dict = Dictionary::with_seed(MAX_HEIGHT, 3).unwrap();
            dict.load(Cursor::new(source.as_bytes()), LoadPolicy::Skip)
                .unwrap();
            black_box(dict);
        })
    });

    let mut dict = Dictionary::with_seed(MAX_HEIGHT, 3).unwrap();
    dict.load(Cursor::new(source.as_bytes()), LoadPolicy::Skip)
        .unwrap();
    let probes: Vec<String> = words.iter().take(1000).map(|w| w.to_uppercase()).collect();

    group.bench_function("contains_case_insensitive", |b| {
        b.iter(|| {
            for w in &probes {
                black_box(dict.contains(w));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_search_hit_miss,
    bench_max_height,
    bench_dictionary
);
criterion_main!(benches);
