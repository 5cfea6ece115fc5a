use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexpace_core::{merge, AnnotatedToken, RuleTable};
use std::hint::black_box;

fn sample_document(sentences: usize) -> Vec<AnnotatedToken> {
    let sentence = [
        ("The", "DET", false),
        ("committee", "NOUN", false),
        ("in", "ADP", false),
        ("Geneva", "PROPN", true),
        (",", "PUNCT", false),
        ("after", "SCONJ", false),
        ("3", "NUM", false),
        ("days", "NOUN", false),
        (",", "PUNCT", false),
        ("finally", "ADV", false),
        ("agreed", "VERB", false),
        ("!", "PUNCT", false),
        ("\n", "SPACE", false),
    ];

    (0..sentences)
        .flat_map(|_| sentence.iter())
        .map(|(text, tag, entity)| AnnotatedToken {
            text: text.to_string(),
            pos_tag: tag.to_string(),
            is_named_entity: *entity,
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let table = RuleTable::reference();
    let mut group = c.benchmark_group("merge");

    for sentences in [1usize, 100, 10_000] {
        let tokens = sample_document(sentences);
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(sentences),
            &tokens,
            |b, tokens| b.iter(|| merge(black_box(tokens), table)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
