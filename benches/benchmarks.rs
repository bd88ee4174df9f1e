//! Benchmarks for the pagination core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use page_flow::{
    FontMetrics, PageConfig, Paginator, RichContent, TextMetricsOracle,
};

fn bench_oracle() -> TextMetricsOracle {
    TextMetricsOracle::new(PageConfig::default(), FontMetrics::default())
}

fn lorem_paragraphs(count: usize, words_per_paragraph: usize) -> RichContent {
    let words = [
        "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
    ];
    let text = (0..count)
        .map(|p| {
            (0..words_per_paragraph)
                .map(|w| words[(p + w) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n");
    RichContent::from_plain(&text)
}

fn bench_set_content_small(c: &mut Criterion) {
    c.bench_function("set_content_small", |b| {
        let oracle = bench_oracle();
        let content = lorem_paragraphs(5, 20);
        b.iter(|| {
            let mut paginator = Paginator::new();
            paginator
                .set_content(black_box(content.clone()), &oracle)
                .unwrap();
            black_box(paginator.page_count())
        });
    });
}

fn bench_set_content_medium(c: &mut Criterion) {
    c.bench_function("set_content_medium", |b| {
        let oracle = bench_oracle();
        let content = lorem_paragraphs(60, 120);
        b.iter(|| {
            let mut paginator = Paginator::new();
            paginator
                .set_content(black_box(content.clone()), &oracle)
                .unwrap();
            black_box(paginator.page_count())
        });
    });
}

fn bench_settled_reflow(c: &mut Criterion) {
    c.bench_function("settled_reflow", |b| {
        let oracle = bench_oracle();
        let mut paginator = Paginator::new();
        paginator
            .set_content(lorem_paragraphs(30, 100), &oracle)
            .unwrap();
        b.iter(|| black_box(paginator.reflow(&oracle).unwrap()));
    });
}

fn bench_incremental_edit(c: &mut Criterion) {
    c.bench_function("incremental_edit_reflow", |b| {
        let oracle = bench_oracle();
        let mut paginator = Paginator::new();
        paginator
            .set_content(lorem_paragraphs(20, 80), &oracle)
            .unwrap();
        let id = paginator.pages().page(0).get(0).unwrap().id();
        let base_len = paginator.pages().paragraph(id).unwrap().len();

        b.iter(|| {
            // pair the insert with a delete so content stays bounded
            if let Some(para) = paginator.paragraph_mut(id) {
                para.truncate(base_len);
                para.push_str("x");
            }
            paginator.schedule_reflow();
            black_box(paginator.run_scheduled(&oracle).unwrap())
        });
    });
}

criterion_group!(
    benches,
    bench_set_content_small,
    bench_set_content_medium,
    bench_settled_reflow,
    bench_incremental_edit
);
criterion_main!(benches);
