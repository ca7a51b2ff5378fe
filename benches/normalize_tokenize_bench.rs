// benches/normalize_tokenize_bench.rs
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use ro_pretok::{normalize_str, InferencePreTokenizer, Lexicon, LexiconPaths, Tokenizer};

const SENTENCE: &str = "Ți-am spus că merg și abrevierile, cum ar fi S.U.A. și nr. 1, \
    dar în același timp și expresiile! Sunt curios dacă reîntregirea textului se poate pârî.";

fn corpus() -> String {
    SENTENCE.repeat(2000)
}

fn lexicon() -> Lexicon {
    let paths = LexiconPaths::in_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
    Lexicon::load(&paths).expect("bench fixture lexicon should load")
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Romanian normalize + tokenize");
    let text = corpus();
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("normalize_str", |b| {
        b.iter(|| normalize_str(black_box(&text)));
    });

    let lex = lexicon();
    let tokenizer = Tokenizer::new(&lex);
    let normalized = normalize_str(&text);

    group.bench_function("tokenize", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&normalized)));
    });

    let pre = InferencePreTokenizer::new(Tokenizer::new(&lex));
    group.bench_function("inference_pre_tokenize", |b| {
        b.iter(|| pre.pre_tokenize_str(black_box(&normalized)));
    });

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
