//! Benchmarks for pdfinfo output parsing.
//!
//! Run with: cargo bench
//!
//! These benchmarks parse synthetic pdfinfo output of various page counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Creates pdfinfo output as printed with `-f 1 -l <page_count>`.
fn create_pdfinfo_output(page_count: usize) -> String {
    let mut out = String::new();

    out.push_str("Producer:        pdfTeX-1.40.25\n");
    out.push_str("CreationDate:    Wed Apr 19 12:58:37 2023 CEST\n");
    out.push_str("Tagged:          no\n");
    out.push_str(&format!("Pages:           {}\n", page_count));
    out.push_str("Encrypted:       no\n");

    for page in 1..=page_count {
        out.push_str(&format!(
            "Page {:>4} size:  595.32 x 841.92 pts (A4)\n",
            page
        ));
        out.push_str(&format!("Page {:>4} rot:   0\n", page));
    }

    out.push_str("File size:       230296 bytes\n");
    out.push_str("PDF version:     1.7\n");
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_str");

    for page_count in [1, 10, 100, 1000] {
        let text = create_pdfinfo_output(page_count);
        group.bench_with_input(BenchmarkId::from_parameter(page_count), &text, |b, text| {
            b.iter(|| popkit::parse_str(black_box(text)).unwrap())
        });
    }

    group.finish();
}

fn bench_page_size(c: &mut Criterion) {
    let info = popkit::parse_str(&create_pdfinfo_output(1)).unwrap();
    let page = info.page(1).unwrap();

    c.bench_function("page_size", |b| b.iter(|| black_box(page).size()));
}

criterion_group!(benches, bench_parse, bench_page_size);
criterion_main!(benches);
