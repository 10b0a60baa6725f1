//! Benchmarks for the article rendering pipeline.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use weft_pipeline::{ArticleRecord, ContentType, Pipeline};

/// Generate an article body with the given structure.
fn generate_body(sections: usize, paragraphs_per_section: usize) -> String {
    let mut body = String::with_capacity(sections * paragraphs_per_section * 200);
    for i in 0..sections {
        body.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            body.push_str(&format!(
                "Paragraph {j} of section {i} with **bold** and *italic* text, long enough \
                 to clear the link-eligibility threshold by a comfortable margin.\n\n"
            ));
        }
    }
    body
}

fn generate_corpus(n: usize, body: &str) -> Vec<ArticleRecord> {
    (0..n)
        .map(|i| ArticleRecord {
            slug: format!("article-{i}"),
            title: format!("Article {i} (2024) - Complete Guide"),
            content_type: match i % 4 {
                0 => ContentType::DirectoryItem,
                1 => ContentType::Listicle,
                2 => ContentType::Comparison,
                _ => ContentType::Blog,
            },
            category: Some("widgets".to_owned()),
            body: body.to_owned(),
        })
        .collect()
}

fn bench_render_single_article(c: &mut Criterion) {
    let body = generate_body(8, 3);
    let corpus = generate_corpus(1, &body);
    let pipeline = Pipeline::new().with_link_injection(false);

    c.bench_function("render_single_article", |b| {
        b.iter(|| pipeline.render_article(&corpus[0], &corpus));
    });
}

fn bench_render_with_corpus_sizes(c: &mut Criterion) {
    let body = generate_body(8, 3);
    let pipeline = Pipeline::new();
    let mut group = c.benchmark_group("render_with_link_injection");

    for corpus_size in [10, 50, 200] {
        let corpus = generate_corpus(corpus_size, &body);
        group.throughput(Throughput::Elements(corpus_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(corpus_size),
            &corpus,
            |b, corpus| {
                b.iter(|| pipeline.render_article(&corpus[0], corpus));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_render_single_article,
    bench_render_with_corpus_sizes
);
criterion_main!(benches);
