//! Benchmarks for catalog compilation.
//!
//! Run with: cargo bench
//!
//! Results include 95% confidence intervals via Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vcfx_bench::backend::make::render_makefile;
use vcfx_bench::core::graph::assemble;
use vcfx_bench::core::parser::load_catalog_str;
use vcfx_bench::core::registry::ToolRegistry;

const TOOLS: &[(&str, &str)] = &[
    ("VCFX_variant_counter", ""),
    ("VCFX_field_extractor", "    args: --fields CHROM,POS\n"),
    ("BCFTOOLS", "    command: stats\n"),
    ("VCFTOOLS", "    command: --freq\n"),
    ("GATK", "    command: CountVariants\n"),
    ("VCFLIB", ""),
];

fn catalog(n: usize) -> String {
    let mut yaml = String::from("tasks:\n");
    for i in 0..n {
        let (tool, extra) = TOOLS[i % TOOLS.len()];
        yaml.push_str(&format!(
            "  - name: task_{i:05}\n    tool: {tool}\n    input: data_{}.vcf\n{extra}",
            i % 4
        ));
    }
    yaml
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_catalog");
    for n in [10, 100, 1000] {
        let yaml = catalog(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &yaml, |b, yaml| {
            b.iter(|| black_box(load_catalog_str(black_box(yaml)).unwrap()));
        });
    }
    group.finish();
}

fn bench_assemble_and_render(c: &mut Criterion) {
    let registry = ToolRegistry::vcfx();
    let mut group = c.benchmark_group("assemble_render");
    for n in [10, 100, 1000] {
        let loaded = load_catalog_str(&catalog(n)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &loaded, |b, loaded| {
            b.iter(|| {
                let graph = assemble(black_box(loaded), &registry);
                black_box(render_makefile(&graph));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_assemble_and_render);
criterion_main!(benches);
