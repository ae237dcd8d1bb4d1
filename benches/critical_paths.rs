//! Criterion benchmarks for Pixelpad critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Rasterizer: Bresenham lines of increasing length
//! - Grid: rotation and inversion
//! - Controller: a line stroke with live preview
//! - Record: JSON export and import

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixelpad::controller::{DrawingController, PointerEvent, Tool};
use pixelpad::grid::Grid;
use pixelpad::record::SpriteRecord;
use pixelpad::shapes::rasterize_line;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Checkerboard grid of the given size
fn make_grid(width: usize, height: usize) -> Grid {
    let data: Vec<Vec<bool>> =
        (0..height).map(|y| (0..width).map(|x| (x + y) % 2 == 0).collect()).collect();
    Grid::from_data(width, height, &data).expect("bench grid dimensions are positive")
}

// =============================================================================
// Rasterizer Benchmarks
// =============================================================================

fn bench_rasterizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterizer");

    for len in [8, 64, 512, 4096].iter() {
        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::new("diagonal", len), len, |b, &len| {
            b.iter(|| rasterize_line(black_box((0, 0)), black_box((len, len / 3))))
        });
    }

    group.finish();
}

// =============================================================================
// Grid Benchmarks
// =============================================================================

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for (w, h) in [(16, 16), (128, 64), (512, 512)].iter() {
        let grid = make_grid(*w, *h);
        group.throughput(Throughput::Elements((w * h) as u64));

        group.bench_function(format!("rotate_left_{}x{}", w, h), |b| {
            b.iter(|| {
                let mut g = grid.clone();
                g.rotate_left();
                g
            })
        });

        group.bench_function(format!("invert_{}x{}", w, h), |b| {
            b.iter(|| {
                let mut g = grid.clone();
                g.invert();
                g
            })
        });
    }

    group.finish();
}

// =============================================================================
// Controller Benchmarks
// =============================================================================

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");

    // Press, sweep the pointer across the canvas, release
    group.bench_function("line_stroke_128x64", |b| {
        b.iter(|| {
            let mut grid = Grid::new(128, 64).expect("positive dimensions");
            let mut ctl = DrawingController::new(Tool::Line);
            ctl.handle(&mut grid, PointerEvent::Press { x: 0, y: 0 });
            for x in 0..128 {
                ctl.handle(&mut grid, PointerEvent::Move { x, y: x / 2 });
            }
            ctl.handle(&mut grid, PointerEvent::Release { x: 127, y: 63 });
            black_box(grid)
        })
    });

    group.finish();
}

// =============================================================================
// Record Benchmarks
// =============================================================================

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");

    let grid = make_grid(128, 64);
    let json = SpriteRecord::export(&grid, "bench", 10).to_json().expect("serializable");
    group.throughput(Throughput::Bytes(json.len() as u64));

    group.bench_function("export_json_128x64", |b| {
        b.iter(|| SpriteRecord::export(black_box(&grid), "bench", 10).to_json())
    });

    group.bench_function("import_json_128x64", |b| {
        b.iter(|| SpriteRecord::from_json(black_box(&json)).and_then(|r| r.import()))
    });

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_rasterizer, bench_grid, bench_controller, bench_record);

criterion_main!(benches);
