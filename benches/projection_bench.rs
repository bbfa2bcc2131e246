use criterion::{Criterion, criterion_group, criterion_main};
use knowledge_timeline::core::{
    CategorySelection, KnowledgeGraph, PlotWindow, RawNode, ScaleMode, build_palette, project,
};
use std::hint::black_box;

const CATEGORIES: [&str; 6] = [
    "Mathematics",
    "Physics",
    "Philosophy",
    "Biology",
    "Engineering",
    "Art",
];

fn generated_nodes(count: usize) -> Vec<RawNode> {
    (0..count)
        .map(|i| {
            let year = (i as i64 * 7) % 12_000 - 10_000;
            let date = if year < 0 {
                format!("{} BC", -year)
            } else {
                format!("{year} AD")
            };
            RawNode::new(
                format!("node-{i}"),
                CATEGORIES[i % CATEGORIES.len()],
                date,
                (i % 100) as f64 / 10.0,
            )
        })
        .collect()
}

fn bench_graph_load_2k(c: &mut Criterion) {
    let raw = generated_nodes(2_000);

    c.bench_function("graph_load_2k", |b| {
        b.iter(|| {
            let _ = KnowledgeGraph::from_raw_nodes(black_box(&raw)).expect("graph should load");
        })
    });
}

fn bench_palette_build(c: &mut Criterion) {
    let raw = generated_nodes(2_000);

    c.bench_function("palette_build_2k", |b| {
        b.iter(|| {
            let _ = build_palette(black_box(&raw).iter().map(|node| node.category.as_str()));
        })
    });
}

fn bench_projection_2k(c: &mut Criterion) {
    let graph = KnowledgeGraph::from_raw_nodes(&generated_nodes(2_000)).expect("graph");
    let selection: CategorySelection = CATEGORIES[..4].iter().copied().collect();
    let zoomed = Some(PlotWindow::new(2.0, 3.5, 0.0, 10.0));

    c.bench_function("projection_2k_log_zoomed", |b| {
        b.iter(|| {
            let _ = project(
                black_box(graph.nodes()),
                black_box(&selection),
                ScaleMode::Logarithmic,
                black_box(zoomed),
            );
        })
    });

    c.bench_function("projection_2k_linear_autofit", |b| {
        b.iter(|| {
            let _ = project(
                black_box(graph.nodes()),
                black_box(&selection),
                ScaleMode::Linear,
                None,
            );
        })
    });
}

criterion_group!(
    benches,
    bench_graph_load_2k,
    bench_palette_build,
    bench_projection_2k
);
criterion_main!(benches);
