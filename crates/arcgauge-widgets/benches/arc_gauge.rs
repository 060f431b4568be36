//! Benchmarks for arc gauge geometry and painting.

use arcgauge_core::{Constraints, Rect, RecordingCanvas, Size, Widget};
use arcgauge_widgets::{ArcGeometry, ArcProgressBar, Button, Text};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_geometry_compute(c: &mut Criterion) {
    let bounds = Rect::new(0.0, 0.0, 300.0, 300.0);

    c.bench_function("arc_geometry_compute", |b| {
        b.iter(|| ArcGeometry::compute(black_box(bounds), 20.0, black_box(75), 100))
    });
}

fn bench_gauge_paint(c: &mut Criterion) {
    let mut gauge = ArcProgressBar::new().progress(75);
    gauge.layout(Rect::new(0.0, 0.0, 300.0, 300.0));
    let mut canvas = RecordingCanvas::new();

    c.bench_function("arc_gauge_paint", |b| {
        b.iter(|| {
            canvas.clear();
            black_box(&gauge).paint(&mut canvas);
        })
    });
}

fn bench_gauge_animation(c: &mut Criterion) {
    c.bench_function("arc_gauge_animate_60_frames", |b| {
        b.iter(|| {
            let mut gauge = ArcProgressBar::new();
            gauge.set_progress_with_animation(black_box(100));
            while gauge.advance(16) {}
            gauge.get_progress()
        })
    });
}

fn bench_label_measure(c: &mut Criterion) {
    let text = Text::new("Speed: 42");
    let button = Button::new("Randomize");
    let constraints = Constraints::loose(Size::new(300.0, 100.0));

    c.bench_function("label_and_button_measure", |b| {
        b.iter(|| {
            (
                text.measure(black_box(constraints)),
                button.measure(black_box(constraints)),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_geometry_compute,
    bench_gauge_paint,
    bench_gauge_animation,
    bench_label_measure,
);
criterion_main!(benches);
