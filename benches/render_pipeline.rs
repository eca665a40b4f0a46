use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_explorer::{
    CanvasSize, InteractiveController, Location, MandelbrotAlgorithm, PaletteConfig, PixelBuffer,
    ScanCursor, SchedulerLimits, TracingPresenter, Unlimited, ViewParameters, Viewport,
    compute_budget, mandelbrot_colour_map_factory, render_slice,
};

fn bench_render_slice(c: &mut Criterion) {
    let canvas = CanvasSize::new(320, 240).unwrap();
    let mut group = c.benchmark_group("render_slice");

    for zoom in [1.0, 1e4, 1e10] {
        let mut view = ViewParameters::default();
        view.set_location(Location {
            pan_x: 0.743_643_887,
            pan_y: -0.131_825_904,
            zoom,
            precision: 0.16,
        });
        let viewport = Viewport::new(view.zoom(), canvas);
        let budget = compute_budget(view.zoom(), view.precision());
        let algorithm = MandelbrotAlgorithm::new(budget);
        let colour_map = mandelbrot_colour_map_factory(&PaletteConfig::default(), budget);
        let mut buffer = PixelBuffer::new(canvas);

        group.bench_with_input(BenchmarkId::from_parameter(zoom), &zoom, |b, _| {
            b.iter(|| {
                render_slice(
                    black_box(&mut buffer),
                    &view,
                    &viewport,
                    ScanCursor::START,
                    &algorithm,
                    &colour_map,
                    &Unlimited,
                )
            })
        });
    }

    group.finish();
}

fn bench_controller_frame(c: &mut Criterion) {
    let canvas = CanvasSize::new(320, 240).unwrap();
    let mut controller = InteractiveController::with_config(
        canvas,
        ViewParameters::default(),
        SchedulerLimits::default(),
        TracingPresenter::new(),
    );

    c.bench_function("controller_full_frame", |b| {
        b.iter(|| {
            controller.reset_view();
            while controller.redraw() {
                controller.tick_with(&Unlimited);
            }
            black_box(controller.buffer().buffer().len())
        })
    });
}

criterion_group!(benches, bench_render_slice, bench_controller_frame);
criterion_main!(benches);
