//! Бенчмарки для лексического анализатора cqllex

use cqllex::{Lexer, TokenStream};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const STATEMENT: &str = "SELECT id, name, emails FROM ks.users \
    WHERE id = 123e4567-e89b-12d3-a456-426614174000 AND score >= 10.5 \
    AND tags CONTAINS 'it''s' LIMIT 100; -- trailing comment\n";

fn script(statements: usize) -> String {
    STATEMENT.repeat(statements)
}

fn tokenize_statement_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize_statement", |b| {
        b.iter(|| {
            let tokens = Lexer::new(black_box(STATEMENT)).tokenize().unwrap();
            black_box(tokens);
        });
    });
}

fn tokenize_script_benchmark(c: &mut Criterion) {
    let input = script(1000);
    c.bench_function("tokenize_all_script", |b| {
        b.iter(|| {
            let tokens = Lexer::new(black_box(&input)).tokenize_all().unwrap();
            black_box(tokens);
        });
    });
}

fn token_stream_benchmark(c: &mut Criterion) {
    let input = script(100);
    c.bench_function("token_stream_script", |b| {
        b.iter(|| {
            let stream = TokenStream::new(black_box(&input)).unwrap();
            black_box(stream.significant().count());
        });
    });
}

criterion_group!(
    benches,
    tokenize_statement_benchmark,
    tokenize_script_benchmark,
    token_stream_benchmark
);
criterion_main!(benches);
