use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use be::action::{Direction, SplitMode};
use be::buffer::Buffer;

fn buffer_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_insertion");

    // Single byte insertion at the end of a line
    group.bench_function("insert_byte_end", |b| {
        b.iter_batched(
            Buffer::new,
            |mut buf| {
                for _ in 0..100 {
                    buf.insert_byte(black_box(b'a'));
                }
                buf
            },
            criterion::BatchSize::SmallInput,
        )
    });

    // Insertion at the front shifts the whole line
    static LINE: &str = "The quick brown fox jumps over the lazy dog. ";
    group.throughput(Throughput::Bytes(LINE.len() as u64));
    group.bench_function("insert_byte_front", |b| {
        b.iter_batched(
            || Buffer::from_bytes(LINE.repeat(20).as_bytes(), None),
            |mut buf| {
                for byte in LINE.bytes() {
                    buf.insert_byte(black_box(byte));
                    buf.move_to_line_start();
                }
                buf
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn buffer_deletion(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_deletion");

    let setup_buf = || {
        let mut buf = Buffer::from_bytes("Some text to delete. ".repeat(100).as_bytes(), None);
        buf.move_to_line_end();
        buf
    };

    group.bench_function("delete_byte", |b| {
        b.iter_batched(
            setup_buf,
            |mut buf| {
                for _ in 0..50 {
                    buf.delete_byte();
                }
                buf
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn buffer_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_lines");

    let text = "This is a line of text for testing line splitting.\n".repeat(10_000);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("load_split", |b| {
        b.iter(|| black_box(Buffer::from_bytes(black_box(text.as_bytes()), None)))
    });

    group.bench_function("serialize", |b| {
        let buf = Buffer::from_bytes(text.as_bytes(), None);
        b.iter(|| black_box(buf.to_bytes()))
    });

    group.bench_function("split_at_cursor", |b| {
        b.iter_batched(
            || Buffer::from_bytes(text.as_bytes(), None),
            |mut buf| {
                for _ in 0..100 {
                    buf.move_cursor(Direction::Right);
                    buf.split_line(SplitMode::AtCursor);
                }
                buf
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, buffer_insertion, buffer_deletion, buffer_lines);
criterion_main!(benches);
