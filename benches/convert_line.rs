use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use respec::core::{rewrite::convert_line, Style};

fn bench_convert_line(c: &mut Criterion) {
    let passthrough = "    return totals.map(scale);\n";
    let literal = "    QUnit.test(\"adds totals\", function (assert) {\n";
    let equality = "    assert.deepEqual(computeTotals(data), [1, 2, 3]);\n";
    let truthy = "    assert.ok(totals.length > 0, \"totals present\");\n";

    c.bench_function("passthrough line", |b| {
        b.iter(|| convert_line(black_box(passthrough), Style::Positional))
    });

    c.bench_function("literal substitutions", |b| {
        b.iter(|| convert_line(black_box(literal), Style::Positional))
    });

    c.bench_function("equality rewrite", |b| {
        b.iter(|| convert_line(black_box(equality), Style::Positional))
    });

    c.bench_function("truthy rewrite", |b| {
        b.iter(|| convert_line(black_box(truthy), Style::Positional))
    });
}

criterion_group!(benches, bench_convert_line);
criterion_main!(benches);
