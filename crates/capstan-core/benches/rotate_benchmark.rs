// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use capstan_core::array::rotate::{shift, shift_range};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 4] = [64, 1_024, 16_384, 262_144];

fn bench_shift_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift_full");

    for &size in &SIZES {
        let mut values: Vec<u64> = (0..size as u64).collect();
        // An offset coprime to the length forces the longest reduction chain.
        let offset = (size / 3 + 1) as isize;

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &offset, |b, &offset| {
            b.iter(|| shift(black_box(values.as_mut_slice()), black_box(offset)));
        });
    }

    group.finish();
}

fn bench_shift_sub_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift_sub_range");

    for &size in &SIZES {
        let mut values: Vec<u64> = (0..size as u64).collect();
        let start = (size / 4) as isize;
        let end = (3 * size / 4) as isize;

        group.throughput(Throughput::Elements((size / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                shift_range(
                    black_box(values.as_mut_slice()),
                    black_box(start),
                    black_box(end),
                    black_box(-7),
                )
            });
        });
    }

    group.finish();
}

fn bench_std_rotate_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("std_rotate_right");

    for &size in &SIZES {
        let mut values: Vec<u64> = (0..size as u64).collect();
        let offset = size / 3 + 1;

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &offset, |b, &offset| {
            b.iter(|| black_box(values.as_mut_slice()).rotate_right(black_box(offset)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_shift_full,
    bench_shift_sub_range,
    bench_std_rotate_baseline
);
criterion_main!(benches);
