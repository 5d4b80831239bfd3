// Criterion benchmark suite: breakscan default scan and pipeline
//
// Run: cargo bench
// Specific group: cargo bench -- log_attrs
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use breakscan::logattr::LogAttr;
use breakscan::paragraph::paragraphs;
use breakscan::props::{Script, UnicodeOracle};
use breakscan::scan::default_break;
use breakscan::tailor::TailorContext;
use breakscan::utf8::Utf8Chars;
use breakscan::{log_attrs, Segmenter};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn corpus() -> Vec<(&'static str, String)> {
    vec![
        (
            "ascii",
            "The quick brown fox jumps over the lazy dog. Mr. Smith isn't here! "
                .repeat(64),
        ),
        (
            "cjk",
            "\u{65E5}\u{672C}\u{8A9E}\u{306E}\u{6587}\u{7AE0}\u{3002}\u{30AB}\u{30BF}\u{30AB}\u{30CA}\u{3001}"
                .repeat(128),
        ),
        (
            "hangul",
            "\u{D55C}\u{AD6D}\u{C5B4} \u{1100}\u{1161}\u{11A8} \u{AC00}\u{B098}. ".repeat(128),
        ),
        (
            "mixed",
            "caf\u{E9} \u{0915}\u{093F} \u{0E01}\u{0E32}\u{0E19} (\u{03B1}\u{03B2}) 3.14\r\n"
                .repeat(64),
        ),
    ]
}

fn keep_default(_: &str, _: &TailorContext<'_>, _: &mut [LogAttr]) -> bool {
    true
}

// ---------------------------------------------------------------------------
// 1. log_attrs -- default scan over a whole text
// ---------------------------------------------------------------------------

fn bench_log_attrs(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_attrs");
    for (name, text) in corpus() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("str", name), &text[..], |b, text| {
            b.iter(|| log_attrs(black_box(text)))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. default_break -- caller-owned buffer, bytes input
// ---------------------------------------------------------------------------

fn bench_default_break(c: &mut Criterion) {
    let mut group = c.benchmark_group("default_break");
    for (name, text) in corpus() {
        let bytes = text.as_bytes();
        let mut attrs = vec![LogAttr::default(); text.chars().count() + 1];
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("bytes", name), bytes, |b, bytes| {
            b.iter(|| default_break(Utf8Chars::new(black_box(bytes)), &UnicodeOracle, &mut attrs))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. pipeline -- script runs plus a no-op tailor
// ---------------------------------------------------------------------------

fn bench_pipeline(c: &mut Criterion) {
    let seg = Segmenter::builder()
        .tailor(Script::Thai, keep_default)
        .tailor(Script::Han, keep_default)
        .build();
    let mut group = c.benchmark_group("pipeline");
    for (name, text) in corpus() {
        group.bench_with_input(BenchmarkId::new("tailored", name), &text[..], |b, text| {
            b.iter(|| seg.log_attrs(black_box(text)))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 4. paragraphs -- delimiter scanning
// ---------------------------------------------------------------------------

fn bench_paragraphs(c: &mut Criterion) {
    let text = "First line of a paragraph.\nSecond\r\nThird\u{2029}Fourth\u{2028}".repeat(256);
    c.bench_function("paragraphs/split", |b| {
        b.iter(|| paragraphs(black_box(&text)).count())
    });
}

criterion_group!(
    benches,
    bench_log_attrs,
    bench_default_break,
    bench_pipeline,
    bench_paragraphs
);
criterion_main!(benches);
