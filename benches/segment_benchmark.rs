use criterion::{criterion_group, criterion_main, Criterion};
use css_map_translator::registry::MapRegistry;
use css_map_translator::render::RenderStyle;
use css_map_translator::segmenter::segment;
use css_map_translator::symbol_map::SymbolMap;
use css_map_translator::translator::translate;
use serde_json::json;
use std::collections::BTreeMap;
use std::hint::black_box;

// A map shaped like a real site dump: many keys, one or two tokens each
fn large_map(keys: usize, seed: usize) -> String {
    let map: BTreeMap<String, Vec<String>> = (0..keys)
        .map(|i| {
            let tokens = if i % 7 == 0 {
                vec![format!("t{seed}x{i:04}"), format!("u{seed}x{i:04}")]
            } else {
                vec![format!("t{seed}x{i:04}")]
            };
            (format!("key{i}"), tokens)
        })
        .collect();
    json!(map).to_string()
}

fn stylesheet(seed: usize, rules: usize) -> String {
    (0..rules)
        .map(|i| format!(".t{seed}x{:04} .t{seed}x{:04} {{ display: block; }}\n<div class=\"t{seed}x{:04}\"></div>\n", i, i + 1, i + 2))
        .collect()
}

fn benchmark_segment(c: &mut Criterion) {
    let map = SymbolMap::parse(&large_map(2000, 1));
    let input = stylesheet(1, 500);

    let mut group = c.benchmark_group("segment");
    group.bench_function("large_map_500_rules", |b| {
        b.iter(|| segment(black_box(&input), black_box(&map)))
    });
    group.finish();
}

fn benchmark_translate(c: &mut Criterion) {
    let registry = MapRegistry::from_texts((1..=4).map(|seed| large_map(2000, seed)));
    let input = stylesheet(2, 500);
    let style = RenderStyle::default();

    c.bench_function("translate_four_maps", |b| {
        b.iter(|| translate(black_box(&registry), black_box(&input), &style))
    });
}

criterion_group!(benches, benchmark_segment, benchmark_translate);
criterion_main!(benches);
