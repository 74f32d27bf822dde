use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use symptomatch::catalog::Catalog;
use symptomatch::matching::MatchingEngine;
use symptomatch::resolve::SymptomResolver;
use symptomatch::spelling::{
    SpellingCorrector, SuggestionEngine, levenshtein_distance, levenshtein_distance_threshold,
};

const TYPOS: &[&str] = &[
    "heaadache",
    "feverr",
    "sore throt",
    "nausia",
    "shortnes of breth",
    "joint pian",
    "qqqqqqq",
];

fn bench_distance(c: &mut Criterion) {
    let names: Vec<String> = Catalog::builtin()
        .symptoms()
        .iter()
        .map(|s| s.name.to_lowercase())
        .collect();

    let mut group = c.benchmark_group("distance");

    group.bench_function("full", |b| {
        b.iter(|| {
            for name in &names {
                black_box(levenshtein_distance(black_box("shortnes of breth"), name));
            }
        })
    });

    group.bench_function("threshold", |b| {
        b.iter(|| {
            for name in &names {
                black_box(levenshtein_distance_threshold(
                    black_box("shortnes of breth"),
                    name,
                    3,
                ));
            }
        })
    });

    group.finish();
}

fn bench_spelling(c: &mut Criterion) {
    let corrector = SpellingCorrector::builtin();
    let suggestions = SuggestionEngine::builtin();

    let mut group = c.benchmark_group("spelling");

    group.bench_function("correct", |b| {
        b.iter(|| {
            for typo in TYPOS {
                black_box(corrector.correct(black_box(typo)));
            }
        })
    });

    group.bench_function("suggest", |b| {
        b.iter(|| {
            for input in ["co", "pain", "chest", "breth", "xyz"] {
                black_box(suggestions.suggest(black_box(input)));
            }
        })
    });

    group.finish();
}

fn bench_matching(c: &mut Criterion) {
    let engine = MatchingEngine::builtin();
    let resolver = SymptomResolver::builtin();
    let selection = ["fever", "cough", "sore_throat", "runny_nose", "fatigue"];

    let mut group = c.benchmark_group("matching");

    group.bench_function("match_conditions", |b| {
        b.iter(|| black_box(engine.match_conditions(black_box(&selection))))
    });

    group.bench_function("resolve", |b| {
        b.iter(|| {
            for typo in TYPOS {
                black_box(resolver.resolve(black_box(typo)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_distance, bench_spelling, bench_matching);
criterion_main!(benches);
