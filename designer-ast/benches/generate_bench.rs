use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use designer_ast::ast::{attr, element, root, text};
use designer_ast::{GeneratorOptions, Node, generate};

fn build_form(rows: usize) -> Node {
    let mut items = Vec::with_capacity(rows);
    for i in 0..rows {
        let label = format!("字段 {i}");
        items.push(element(
            "el-form-item",
            vec![attr("label", label.as_str()), attr("required", i % 2 == 0)],
            vec![
                element("el-input", vec![attr("placeholder", "请输入 <值> & 回车")], vec![]),
                element("el-button", vec![attr("type", "primary")], vec![text("确定")]),
            ],
        ));
    }
    root(vec![element("el-form", vec![attr("label-width", "80px")], items)])
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_form");
    for &rows in &[10usize, 100, 1000] {
        let tree = build_form(rows);
        for (name, opts) in [
            ("format", GeneratorOptions::default()),
            ("compact", GeneratorOptions::compact()),
        ] {
            group.bench_with_input(BenchmarkId::new(name, rows), &tree, |b, t| {
                b.iter(|| generate(t, &opts));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
