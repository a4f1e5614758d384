// Model building and type closure benchmarks
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gobridge_model::ast::{FieldDecl, FuncDecl, FuncSig, TypeExpr, TypeSpec};
use gobridge_model::{build_package, ProjectNaming, SourceDecls, TypeClosure};

fn wide_package_decls(count: usize) -> SourceDecls {
    let mut decls = SourceDecls::default();

    for i in 0..count {
        let name = format!("Entity{i}");
        decls.add_type_spec(TypeSpec::new(
            name.clone(),
            TypeExpr::Struct {
                fields: vec![
                    FieldDecl::named("ID", TypeExpr::ident("int64")),
                    FieldDecl::named("Labels", TypeExpr::slice(TypeExpr::ident("string"))),
                    FieldDecl::named("Parent", TypeExpr::pointer(TypeExpr::ident(name.as_str()))),
                    FieldDecl::named(
                        "Children",
                        TypeExpr::slice(TypeExpr::pointer(TypeExpr::ident(name.as_str()))),
                    ),
                ],
            },
        ));
        decls.add_func_decl(FuncDecl::new(
            format!("Load{name}"),
            FuncSig::new(
                vec![FieldDecl::named("id", TypeExpr::ident("int64"))],
                vec![
                    FieldDecl::unnamed(TypeExpr::pointer(TypeExpr::ident(name.as_str()))),
                    FieldDecl::unnamed(TypeExpr::ident("error")),
                ],
            ),
        ));
    }

    decls
}

fn bench_build_package(c: &mut Criterion) {
    let decls = wide_package_decls(200);

    c.bench_function("build_package_200_types", |b| {
        b.iter(|| {
            build_package(
                ProjectNaming::new("bench"),
                "example.com/bench",
                "example.com/bench",
                black_box(&decls),
            )
            .unwrap()
        });
    });
}

fn bench_collect_closure(c: &mut Criterion) {
    let decls = wide_package_decls(200);
    let package = build_package(
        ProjectNaming::new("bench"),
        "example.com/bench",
        "example.com/bench",
        &decls,
    )
    .unwrap();

    c.bench_function("collect_closure_200_types", |b| {
        b.iter(|| TypeClosure::collect(black_box(&package)));
    });
}

criterion_group!(benches, bench_build_package, bench_collect_closure);
criterion_main!(benches);
