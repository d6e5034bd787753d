//! Criterion benchmarks for assent.
//!
//! Covers the per-utterance hot path: tokenization, positional similarity
//! and two-pass classification, plus corpus synthesis.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use assent::analysis::tokenize;
use assent::classification::{Classifier, LexicalClassifier};
use assent::config::LexiconConfig;
use assent::corpus::CorpusSynthesizer;
use assent::util::similarity::{DEFAULT_THRESHOLD, is_similar};

fn generate_utterances(count: usize) -> Vec<String> {
    let lexicon = LexiconConfig::default();
    let synthesizer = CorpusSynthesizer::new(lexicon.seed_phrases, lexicon.context_phrases)
        .expect("default lexicon has seed phrases");
    synthesizer.generate(count, &mut StdRng::seed_from_u64(42))
}

fn bench_tokenize(c: &mut Criterion) {
    let utterances = generate_utterances(300);
    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Elements(utterances.len() as u64));
    group.bench_function("space", |b| {
        b.iter(|| {
            for text in &utterances {
                black_box(tokenize(black_box(text)));
            }
        })
    });
    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let pairs = [
        ("开始烹饪吧", "开始烹饪"),
        ("我觉得可以这样：启动吧", "启动吧"),
        ("OK", "ok"),
        ("abcdefghij", "abcdefghiz"),
    ];
    c.bench_function("is_similar", |b| {
        b.iter(|| {
            for (left, right) in &pairs {
                black_box(is_similar(black_box(left), black_box(right), DEFAULT_THRESHOLD));
            }
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    let utterances: Vec<_> = generate_utterances(300).iter().map(|t| tokenize(t)).collect();
    let classifier = LexicalClassifier::new(LexiconConfig::default().affirmative_terms);

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(utterances.len() as u64));
    group.bench_function("lexical_default_lexicon", |b| {
        b.iter(|| {
            for utterance in &utterances {
                black_box(classifier.classify(black_box(utterance)));
            }
        })
    });
    group.finish();
}

fn bench_synthesize(c: &mut Criterion) {
    let lexicon = LexiconConfig::default();
    let synthesizer = CorpusSynthesizer::new(lexicon.seed_phrases, lexicon.context_phrases)
        .expect("default lexicon has seed phrases");
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("synthesize_300", |b| {
        b.iter(|| black_box(synthesizer.generate(300, &mut rng)))
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_similarity,
    bench_classify,
    bench_synthesize
);
criterion_main!(benches);
