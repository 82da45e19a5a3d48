use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use mulhash::{hash_str, tally, ArrayedList, HashTable, Multiplier, WordCount, WordCounts};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

const VOCAB: u64 = 20_000;

fn word(n: u64) -> String {
    format!("w{:05}", n)
}

// Skewed token stream: low word ids are far more frequent, like prose.
fn token_stream(seed: u64, n: usize) -> ArrayedList<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut out = ArrayedList::with_capacity(n);
    for _ in 0..n {
        let a = rng.next_u64() % VOCAB;
        let b = rng.next_u64() % VOCAB;
        out.push(word(a * b / VOCAB));
    }
    out
}

fn bench_count(c: &mut Criterion) {
    let tokens = token_stream(1, 200_000);
    let mut group = c.benchmark_group("count::tokens");
    group.throughput(Throughput::Elements(tokens.len() as u64));

    group.bench_function("mulhash_200k", |b| {
        b.iter_batched(
            || HashTable::with_multiplier(tokens.len(), Multiplier::new(0x9e37_79b9)).unwrap(),
            |mut t| {
                tally(&mut t, &tokens);
                black_box(t)
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("mulhash_undersized_200k", |b| {
        b.iter_batched(
            || HashTable::with_multiplier(64, Multiplier::new(0x9e37_79b9)).unwrap(),
            |mut t| {
                tally(&mut t, &tokens);
                black_box(t)
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("hashbrown_200k", |b| {
        b.iter_batched(
            || hashbrown::HashMap::<String, u64>::with_capacity(tokens.len()),
            |mut m| {
                for t in &tokens {
                    match m.get_mut(t.as_str()) {
                        Some(n) => *n += 1,
                        None => {
                            m.insert(t.clone(), 1);
                        }
                    }
                }
                black_box(m)
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("std_200k", |b| {
        b.iter_batched(
            || std::collections::HashMap::<String, u64>::with_capacity(tokens.len()),
            |mut m| {
                for t in &tokens {
                    match m.get_mut(t.as_str()) {
                        Some(n) => *n += 1,
                        None => {
                            m.insert(t.clone(), 1);
                        }
                    }
                }
                black_box(m)
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let tokens = token_stream(7, 100_000);
    let mut t = HashTable::with_multiplier(tokens.len(), Multiplier::new(0x2545_f491)).unwrap();
    tally(&mut t, &tokens);

    let mut rng = SmallRng::seed_from_u64(0x9e37_79b9_7f4a_7c15);
    let hits: Vec<String> = (0..10_000)
        .map(|_| tokens[(rng.next_u64() as usize) % tokens.len()].clone())
        .collect();
    let misses: Vec<String> = (0..10_000).map(|i| format!("miss{i}")).collect();

    let mut group = c.benchmark_group("count::query");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("hit_10k", |b| {
        b.iter(|| {
            for w in &hits {
                black_box(t.count_of(w));
            }
        })
    });
    group.bench_function("miss_10k", |b| {
        b.iter(|| {
            for w in &misses {
                black_box(t.count_of(w));
            }
        })
    });
    // Probing with a full entry, as a caller without the raw-hash API would.
    group.bench_function("hit_10k_by_entry", |b| {
        let probes: Vec<WordCount> = hits.iter().map(|w| WordCount::new(w.as_str(), 0)).collect();
        b.iter(|| {
            for p in &probes {
                black_box(t.find(p));
            }
        })
    });
    group.bench_function("hash_str_10k", |b| {
        b.iter(|| {
            for w in &hits {
                black_box(hash_str(w));
            }
        })
    });
    group.finish();
}

fn bench_config() -> Criterion {
    Criterion::default()
}

criterion_group! {
    name = benches_count;
    config = bench_config();
    targets = bench_count, bench_query
}
criterion_main!(benches_count);
