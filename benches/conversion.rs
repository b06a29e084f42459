// Benchmarks for Markdown to XHTML conversion.

use criterion::{criterion_group, criterion_main, Criterion};
use md2xhtml::{convert, convert_document, Options};

const SECTION: &str = "\
## Section

Some *emphasis*, **strong text**, `inline code` and a [link](page.md).
Bare URLs like https://example.org/path are linked too.

- first item
  - nested item with `code`
  - another nested item
- second item

    fn preformatted() -> bool {
        true
    }

";

fn bench_simple(c: &mut Criterion) {
    let md = "# Hello\n\nThis is a **simple** document.\n";
    c.bench_function("simple_document", |b| {
        b.iter(|| convert(md));
    });
}

fn bench_large(c: &mut Criterion) {
    let md = SECTION.repeat(200);
    c.bench_function("large_document", |b| {
        b.iter(|| convert(&md));
    });
}

fn bench_envelope(c: &mut Criterion) {
    let options = Options::default();
    c.bench_function("full_document", |b| {
        b.iter(|| convert_document(SECTION, &options));
    });
}

criterion_group!(benches, bench_simple, bench_large, bench_envelope);
criterion_main!(benches);
