use packer::{be_to_u32s, be_to_u64_at, u32_to_be, u32s_to_be, u64_to_le_into};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_scalars(c: &mut Criterion) {
    c.bench_function("u32_to_be", |b| b.iter(|| u32_to_be(black_box(0xDEADBEEF))));

    let mut buf = [0u8; 16];
    c.bench_function("u64_to_le_into offset 3", |b| {
        b.iter(|| u64_to_le_into(black_box(0x0102030405060708), &mut buf, black_box(3)))
    });

    let src = [0x5Au8; 16];
    c.bench_function("be_to_u64_at offset 5", |b| {
        b.iter(|| be_to_u64_at(black_box(&src), black_box(5)))
    });
}

pub fn bench_arrays(c: &mut Criterion) {
    let words = [0x0123_4567u32; 16];
    c.bench_function("u32s_to_be 64 bytes", |b| {
        b.iter(|| u32s_to_be(black_box(&words)))
    });

    let block = [0xA5u8; 64];
    c.bench_function("be_to_u32s 64 bytes", |b| {
        b.iter(|| be_to_u32s(black_box(&block), 0, 16))
    });
}

criterion_group!(benches, bench_scalars, bench_arrays);
criterion_main!(benches);
