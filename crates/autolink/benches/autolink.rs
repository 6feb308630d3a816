//! Benchmarks for autolinking throughput.

use autolink::{Autolinker, HtmlAttributes, LinkOptions, UrlEntity, auto_link};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SHORT: &str = "Check #ruby and @jack's http://example.com";

/// Build a message with `n` repetitions of every entity kind.
fn generate_text(n: usize) -> String {
    (0..n)
        .map(|i| format!("Post {i} about #topic{i} by @user{i} in @user{i}/list{i} at http://example.com/p/{i}. "))
        .collect()
}

fn bench_short_message(c: &mut Criterion) {
    let options = LinkOptions::new();
    let attrs = HtmlAttributes::new();

    c.bench_function("auto_link_short", |b| {
        b.iter(|| auto_link(SHORT, &options, &attrs));
    });
}

fn bench_plain_text(c: &mut Criterion) {
    let options = LinkOptions::new();
    let attrs = HtmlAttributes::new();
    let text = "Nothing to link in this sentence at all. ".repeat(20);

    c.bench_function("auto_link_plain", |b| {
        b.iter(|| auto_link(&text, &options, &attrs));
    });
}

fn bench_with_entities_and_overrides(c: &mut Criterion) {
    let mut options = LinkOptions::new().with_target("_blank");
    for i in 0..50 {
        options = options.with_url_entity(UrlEntity::new(
            format!("http://example.com/p/{i}"),
            format!("example.com/p/{i}"),
        ));
    }
    let linker = Autolinker::new()
        .with_options(options)
        .with_html_attrs(HtmlAttributes::new().with("data-source", "bench"));
    let text = generate_text(10);

    c.bench_function("auto_link_overrides", |b| {
        b.iter(|| linker.auto_link(&text));
    });
}

fn bench_varying_sizes(c: &mut Criterion) {
    let linker = Autolinker::new();
    let mut group = c.benchmark_group("auto_link_by_size");

    for entities in [1, 10, 100] {
        let text = generate_text(entities);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("entities", entities), &text, |b, text| {
            b.iter(|| linker.auto_link(text));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_short_message,
    bench_plain_text,
    bench_with_entities_and_overrides,
    bench_varying_sizes
);
criterion_main!(benches);
