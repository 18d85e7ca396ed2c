use crate::{EscapeData, EscapeKernel, Viewport};

/// Escape-time evaluator: a kernel paired with an iteration budget.
///
/// Wraps the raw iteration count into [`EscapeData`] and knows how to sweep
/// a pixel grid. Holds no mutable state; a single evaluator can serve any
/// number of callers.
pub struct EscapeTimeEvaluator<K: EscapeKernel> {
    kernel: K,
    max_iterations: u32,
}

impl<K: EscapeKernel> EscapeTimeEvaluator<K> {
    pub fn new(kernel: K, max_iterations: u32) -> Self {
        Self {
            kernel,
            max_iterations,
        }
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Evaluate a single point.
    pub fn evaluate(&self, re: f32, im: f32) -> EscapeData {
        let iterations = self.kernel.escape_iterations(re, im, self.max_iterations);
        EscapeData::new(iterations, self.max_iterations)
    }

    /// Evaluate every pixel of a canvas over the viewport, row-major.
    pub fn evaluate_grid(&self, viewport: &Viewport, canvas_size: (u32, u32)) -> Vec<EscapeData> {
        let (width, height) = canvas_size;
        (0..height)
            .flat_map(|py| {
                (0..width).map(move |px| {
                    let (re, im) = viewport.pixel_to_point(px, py, canvas_size);
                    self.evaluate(re as f32, im as f32)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{ReferenceKernel, TextbookKernel};

    #[test]
    fn grid_produces_one_result_per_pixel() {
        let evaluator = EscapeTimeEvaluator::new(ReferenceKernel, 100);
        let vp = Viewport::mandelbrot_default((64, 32));
        let results = evaluator.evaluate_grid(&vp, (64, 32));
        assert_eq!(results.len(), 64 * 32);
    }

    #[test]
    fn single_point_wraps_kernel_count() {
        let evaluator = EscapeTimeEvaluator::new(ReferenceKernel, 100);
        let data = evaluator.evaluate(0.0, 0.0);
        assert_eq!(data.iterations, 100);
        assert_eq!(data.max_iterations, 100);
        assert!(!data.escaped);
    }

    #[test]
    fn grid_contains_both_interior_and_exterior_points() {
        // The default framing covers the set and its surroundings, so a
        // coarse grid still sees both outcomes.
        let evaluator = EscapeTimeEvaluator::new(TextbookKernel, 200);
        let vp = Viewport::mandelbrot_default((32, 32));
        let results = evaluator.evaluate_grid(&vp, (32, 32));
        assert!(results.iter().any(|d| d.escaped));
        assert!(results.iter().any(|d| !d.escaped));
    }

    #[test]
    fn grid_corners_escape_under_default_framing() {
        // All four corners of the ±2 band are far outside the set.
        let evaluator = EscapeTimeEvaluator::new(TextbookKernel, 200);
        let vp = Viewport::mandelbrot_default((16, 16));
        let results = evaluator.evaluate_grid(&vp, (16, 16));
        assert!(results[0].escaped, "minimum corner should escape");
        assert!(results[15].escaped, "end of first row should escape");
        assert!(results[16 * 15].escaped, "start of last row should escape");
    }

    #[test]
    fn boxed_kernel_behaves_like_the_unboxed_one() {
        let boxed: Box<dyn EscapeKernel> = Box::new(ReferenceKernel);
        let evaluator = EscapeTimeEvaluator::new(boxed, 64);
        assert_eq!(evaluator.evaluate(0.0, 0.0).iterations, 64);
        assert_eq!(evaluator.evaluate(3.0, 0.0).iterations, 0);
    }
}
