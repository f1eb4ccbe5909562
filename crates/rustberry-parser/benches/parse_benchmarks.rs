mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use rustberry_parser::GraphQLParser;
use rustberry_parser::token_source::StrGraphQLTokenSource;

// ─── Group 1: Schema Parsing ─────────────────────────────

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");

    group.bench_function("small", |b| {
        b.iter(|| black_box(GraphQLParser::new(fixtures::SMALL_SCHEMA).parse_schema_document()))
    });

    group.bench_function("starwars", |b| {
        b.iter(|| {
            black_box(GraphQLParser::new(fixtures::STARWARS_SCHEMA).parse_schema_document())
        })
    });

    let large = fixtures::schemas::synthetic_schema(500, 12);
    group.bench_function("large (synthetic)", |b| {
        b.iter(|| black_box(GraphQLParser::new(&large).parse_schema_document()))
    });

    group.finish();
}

// ─── Group 2: Executable Document Parsing ─────────────────

fn executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("executable_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| {
            black_box(GraphQLParser::new(fixtures::SIMPLE_QUERY).parse_executable_document())
        })
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| {
            black_box(GraphQLParser::new(fixtures::COMPLEX_QUERY).parse_executable_document())
        })
    });

    for depth in [10, 30, 60] {
        let nested = fixtures::operations::deeply_nested_query(depth);
        group.bench_function(format!("nested_depth_{depth}"), |b| {
            b.iter(|| black_box(GraphQLParser::new(&nested).parse_executable_document()))
        });
    }

    let many_ops = fixtures::operations::many_operations(50);
    group.bench_function("many_operations_50", |b| {
        b.iter(|| black_box(GraphQLParser::new(&many_ops).parse_executable_document()))
    });

    group.finish();
}

// ─── Group 3: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let large = fixtures::schemas::synthetic_schema(500, 12);
    let inputs: [(&str, &str); 3] = [
        ("small_schema", fixtures::SMALL_SCHEMA),
        ("starwars_schema", fixtures::STARWARS_SCHEMA),
        ("large_schema (synthetic)", large.as_str()),
    ];
    for (label, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| {
                for token in StrGraphQLTokenSource::new(input) {
                    black_box(token);
                }
            })
        });
    }

    group.finish();
}

// ─── Group 4: Cross-Parser Comparisons ───────────────────

fn compare_schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_schema_parse");

    let large = fixtures::schemas::synthetic_schema(500, 12);
    let inputs: [(&str, &str); 3] = [
        ("small", fixtures::SMALL_SCHEMA),
        ("starwars", fixtures::STARWARS_SCHEMA),
        ("large", large.as_str()),
    ];

    for (label, input) in inputs {
        group.bench_with_input(BenchmarkId::new("rustberry_parser", label), &input, |b, input| {
            b.iter(|| black_box(GraphQLParser::new(input).parse_schema_document()))
        });

        group.bench_with_input(BenchmarkId::new("graphql_parser", label), &input, |b, input| {
            b.iter(|| black_box(graphql_parser::schema::parse_schema::<String>(input)))
        });

        group.bench_with_input(BenchmarkId::new("apollo_parser", label), &input, |b, input| {
            b.iter(|| black_box(apollo_parser::Parser::new(input).parse()))
        });
    }

    group.finish();
}

fn compare_executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_executable_parse");

    let inputs: [(&str, &str); 2] = [
        ("simple", fixtures::SIMPLE_QUERY),
        ("complex", fixtures::COMPLEX_QUERY),
    ];

    for (label, input) in inputs {
        group.bench_with_input(BenchmarkId::new("rustberry_parser", label), &input, |b, input| {
            b.iter(|| black_box(GraphQLParser::new(input).parse_executable_document()))
        });

        group.bench_with_input(BenchmarkId::new("graphql_parser", label), &input, |b, input| {
            b.iter(|| black_box(graphql_parser::query::parse_query::<String>(input)))
        });

        group.bench_with_input(BenchmarkId::new("apollo_parser", label), &input, |b, input| {
            b.iter(|| black_box(apollo_parser::Parser::new(input).parse()))
        });
    }

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(
    benches,
    schema_parse,
    executable_parse,
    lexer,
    compare_schema_parse,
    compare_executable_parse,
);
criterion_main!(benches);
