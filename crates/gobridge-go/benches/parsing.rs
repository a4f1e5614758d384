// Go loader performance benchmarks
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gobridge_go::{DeclParser, GoSourceParser};
use std::fmt::Write;
use std::path::Path;

fn bench_parse_api_file(c: &mut Criterion) {
    let source = r#"
package api

type Point struct {
    X int32
    Y int32
}

type Shape struct {
    Name   string
    Points []*Point
    Origin *Point
}

func NewShape(name string, points []*Point) (*Shape, error) {
    return &Shape{Name: name, Points: points}, nil
}

func (s *Shape) Area() float64 {
    return 0
}
"#;

    c.bench_function("parse_api_file", |b| {
        let parser = GoSourceParser::new();
        b.iter(|| {
            parser
                .parse_source(black_box(source), Path::new("benchmark.go"))
                .unwrap()
        });
    });
}

fn bench_parse_many_declarations(c: &mut Criterion) {
    let mut source = String::from("package api\n\n");
    for i in 0..300 {
        writeln!(
            source,
            "type Item{i} struct {{\n    ID int64\n    Tags []string\n    Next *Item{i}\n}}\n\nfunc GetItem{i}(id int64) (*Item{i}, error) {{ return nil, nil }}\n"
        )
        .unwrap();
    }

    c.bench_function("parse_300_declarations", |b| {
        let parser = GoSourceParser::new();
        b.iter(|| {
            parser
                .parse_source(black_box(&source), Path::new("large.go"))
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_parse_api_file, bench_parse_many_declarations);
criterion_main!(benches);
