use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexgen::lexer::Lexer;

fn sample_spec() -> Vec<(String, String)> {
    vec![
        ("IF".to_string(), "if".to_string()),
        ("ELSE".to_string(), "else".to_string()),
        ("WHILE".to_string(), "while".to_string()),
        ("IDENT".to_string(), "[a-z]+".to_string()),
        ("NUMBER".to_string(), "[0-9]+".to_string()),
        ("WS".to_string(), " +".to_string()),
        ("PLUS".to_string(), "\\+".to_string()),
        ("ASSIGN".to_string(), "=".to_string()),
    ]
}

pub fn compile(c: &mut Criterion) {
    c.bench_function("lexer compile", |b| {
        b.iter(|| Lexer::new(black_box(sample_spec())).unwrap())
    });
}

pub fn tokenize(c: &mut Criterion) {
    let lexer = Lexer::new(sample_spec()).unwrap();
    let input = "while foo = 1 + bar else if 23 ".repeat(50);
    c.bench_function("lexer tokenize", |b| {
        b.iter(|| lexer.tokenize(black_box(&input)).unwrap())
    });
}

criterion_group!(benches, compile, tokenize);
criterion_main!(benches);
