//! Synthesis and emission benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figtk::codegen::emit;
use figtk::model::{DesignNode, NodeKind};
use figtk::synth::{synthesize, FrameIndex, SynthOptions};

/// A frame holding `cards` nested card frames with a few widgets each.
fn dashboard(cards: usize) -> DesignNode {
    let mut frame =
        DesignNode::new(NodeKind::Frame, "Dashboard").with_bounds(0.0, 0.0, 1440.0, 4000.0);
    for i in 0..cards {
        let x = 20.0 + (i % 4) as f64 * 350.0;
        let y = 20.0 + (i / 4) as f64 * 220.0;
        let card = DesignNode::new(NodeKind::Frame, format!("Card {i}"))
            .with_bounds(x, y, 330.0, 200.0)
            .with_child(
                DesignNode::new(NodeKind::Text, "Title")
                    .with_bounds(x + 10.0, y + 10.0, 200.0, 20.0),
            )
            .with_child(
                DesignNode::new(NodeKind::Text, "Input Query")
                    .with_bounds(x + 10.0, y + 40.0, 300.0, 24.0),
            )
            .with_child(
                DesignNode::new(NodeKind::Rectangle, "Apply Button")
                    .with_bounds(x + 10.0, y + 150.0, 90.0, 30.0),
            )
            .with_child(
                DesignNode::new(NodeKind::Rectangle, "Divider")
                    .with_bounds(x, y + 140.0, 330.0, 1.0),
            );
        frame.children.push(card);
    }
    frame
}

fn bench_index(c: &mut Criterion) {
    let root = dashboard(64);
    c.bench_function("index_64_cards", |b| b.iter(|| FrameIndex::build(black_box(&root))));
}

fn bench_synthesize(c: &mut Criterion) {
    let frame = dashboard(64);
    let options = SynthOptions::default();
    c.bench_function("synthesize_64_cards", |b| {
        b.iter(|| synthesize(black_box(&[&frame]), &options))
    });
}

fn bench_emit(c: &mut Criterion) {
    let frame = dashboard(64);
    let plan = synthesize(&[&frame], &SynthOptions::default());
    c.bench_function("emit_64_cards", |b| b.iter(|| emit(black_box(&plan))));
}

criterion_group!(benches, bench_index, bench_synthesize, bench_emit);
criterion_main!(benches);
