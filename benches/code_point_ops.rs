//! Benchmarks for code-point indexed operations.
//!
//! Every operation decodes from the start of its input, so cost grows with the
//! number of code points scanned. Content is generated from a seeded RNG over
//! a fixed alphabet mixing 1-4 byte sequences.
//!
//! ## Sizes
//!
//! - 1KB, 10KB, 100KB, 1MB

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cpstr::{char_code_at, index_of, last_index_of, length, pad_start, replace, trim};

const SIZES: [usize; 4] = [1024, 10 * 1024, 100 * 1024, 1024 * 1024];

/// Characters drawn by the generator; roughly 60% ASCII by weight.
const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', ' ', ' ', ',', '.', 'é', 'ü', 'ñ', 'ß',
    '日', '本', '世', '界', '🌍', '🚀',
];

/// Generate valid UTF-8 of at most `size` bytes.
fn generate_text(size: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut result = Vec::with_capacity(size);
    let mut buf = [0u8; 4];
    loop {
        let c = ALPHABET[rng.gen_range(0..ALPHABET.len())];
        let encoded = c.encode_utf8(&mut buf).as_bytes();
        if result.len() + encoded.len() > size {
            break;
        }
        result.extend_from_slice(encoded);
    }
    result
}

/// Generated text with `needle` appended, so searches scan the whole input.
fn with_needle_at_end(size: usize, needle: &[u8]) -> Vec<u8> {
    let mut data = generate_text(size.saturating_sub(needle.len()), 7);
    data.extend_from_slice(needle);
    data
}

fn bench_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("length");

    for size in SIZES {
        let data = generate_text(size, 1);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(format_size(size)), &data, |b, data| {
            b.iter(|| length(black_box(data)));
        });
    }

    group.finish();
}

fn bench_char_code_at_last(c: &mut Criterion) {
    let mut group = c.benchmark_group("char_code_at_last");

    for size in SIZES {
        let data = generate_text(size, 2);
        let last = length(&data).unwrap_or(1).saturating_sub(1);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(format_size(size)), &data, |b, data| {
            b.iter(|| char_code_at(black_box(data), black_box(last)));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let needle = "needle🧵".as_bytes();

    for size in SIZES {
        let data = with_needle_at_end(size, needle);
        let size_name = format_size(size);
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("index_of", &size_name), &data, |b, data| {
            b.iter(|| index_of(black_box(data), black_box(needle)));
        });
        group.bench_with_input(
            BenchmarkId::new("last_index_of", &size_name),
            &data,
            |b, data| {
                b.iter(|| last_index_of(black_box(data), black_box(b"a")));
            },
        );
    }

    group.finish();
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace");

    for size in SIZES {
        let data = generate_text(size, 3);
        let mut out = Vec::with_capacity(size * 2);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(format_size(size)), &data, |b, data| {
            b.iter(|| {
                let result = replace(black_box(data), "世界".as_bytes(), b"world", &mut out);
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_trim(c: &mut Criterion) {
    let mut group = c.benchmark_group("trim");

    for size in SIZES {
        let padding = " \t\u{3000}\n".repeat(size / 64);
        let mut data = padding.as_bytes().to_vec();
        data.extend_from_slice(&generate_text(size / 2, 4));
        data.extend_from_slice(padding.as_bytes());

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(format_size(size)), &data, |b, data| {
            b.iter(|| trim(black_box(data)).map(|t| t.len()));
        });
    }

    group.finish();
}

fn bench_pad(c: &mut Criterion) {
    let mut group = c.benchmark_group("pad_start");
    let input = "Pad 世界".as_bytes();

    for target in [16, 256, 4096, 65536] {
        let mut out = Vec::new();
        group.bench_with_input(BenchmarkId::from_parameter(target), &target, |b, &target| {
            b.iter(|| {
                let pad = "·-".as_bytes();
                let result = pad_start(input, black_box(target), pad, &mut out, 1 << 20);
                black_box(result)
            });
        });
    }

    group.finish();
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{}mb", bytes / (1024 * 1024))
    } else if bytes >= 1024 {
        format!("{}kb", bytes / 1024)
    } else {
        format!("{}b", bytes)
    }
}

criterion_group!(
    benches,
    bench_length,
    bench_char_code_at_last,
    bench_search,
    bench_replace,
    bench_trim,
    bench_pad,
);

criterion_main!(benches);
