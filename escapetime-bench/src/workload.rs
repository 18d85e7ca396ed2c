use std::hint::black_box;
use std::time::Instant;

use escapetime_core::{EscapeKernel, EscapeTimeEvaluator, Viewport};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a finished workload run measured.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSummary {
    /// Number of evaluations performed (one per pixel)
    pub pixels: u64,
    /// Sum of iteration counts across all evaluations
    pub total_iterations: u64,
    /// Evaluations that never escaped within budget
    pub interior: u64,
    /// Wall time of the evaluation loop, in seconds
    pub elapsed_seconds: f64,
}

/// Run the fixed-coordinate workload: `width * height` independent
/// evaluations of the same point.
///
/// The coordinate never changes between calls, so with the origin as input
/// every call spends the full budget. The redundancy is the point: this is
/// a worst-case-cost measurement, not a render. Inputs go through
/// `black_box` so the optimizer cannot hoist the loop-invariant call.
pub fn run_fixed<K: EscapeKernel>(
    evaluator: &EscapeTimeEvaluator<K>,
    point: (f32, f32),
    canvas_size: (u32, u32),
) -> WorkloadSummary {
    let pixels = u64::from(canvas_size.0) * u64::from(canvas_size.1);
    let mut total_iterations = 0u64;
    let mut interior = 0u64;

    let started = Instant::now();
    for _ in 0..pixels {
        let data = evaluator.evaluate(black_box(point.0), black_box(point.1));
        total_iterations += u64::from(data.iterations);
        interior += u64::from(!data.escaped);
    }
    let elapsed_seconds = started.elapsed().as_secs_f64();

    debug!(pixels, total_iterations, elapsed_seconds, "fixed workload done");
    WorkloadSummary {
        pixels,
        total_iterations,
        interior,
        elapsed_seconds,
    }
}

/// Run the per-pixel workload: map every pixel of the canvas into the
/// viewport and evaluate it once.
pub fn run_grid<K: EscapeKernel>(
    evaluator: &EscapeTimeEvaluator<K>,
    viewport: &Viewport,
    canvas_size: (u32, u32),
) -> WorkloadSummary {
    let started = Instant::now();
    let results = evaluator.evaluate_grid(viewport, canvas_size);
    let elapsed_seconds = started.elapsed().as_secs_f64();

    let summary = WorkloadSummary {
        pixels: results.len() as u64,
        total_iterations: results.iter().map(|d| u64::from(d.iterations)).sum(),
        interior: results.iter().filter(|d| !d.escaped).count() as u64,
        elapsed_seconds,
    };
    debug!(
        pixels = summary.pixels,
        interior = summary.interior,
        elapsed_seconds,
        "grid workload done"
    );
    summary
}

/// Resolutions for the doubling sweep: 120x67, 240x135, 480x270, ...
///
/// The height ladder is 67.5 doubled each step, truncated to whole pixels,
/// which keeps the 16:9 shape of the full-size canvas. `steps` must be at
/// most 24; the width shift leaves u32 pixel range beyond that, and the
/// CLI bounds the `--sweep` flag to match.
pub fn sweep_resolutions(steps: u32) -> Vec<(u32, u32)> {
    debug_assert!(steps <= 24, "resolution ladder exceeds u32 past 24 steps");
    (0..steps)
        .map(|i| (120u32 << i, (135u32 << i) / 2))
        .collect()
}
