use serde::{Deserialize, Serialize};

/// Viewport in fractal space with f64 coordinates
///
/// Defines a rectangular region of the complex plane:
/// - `center`: center point (re, im)
/// - `width`: visible width in fractal space
/// - `height`: visible height in fractal space
///
/// Grid evaluation maps pixel indices into this region; coordinates are
/// computed in f64 and narrowed to f32 at the kernel boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: (f64, f64),
    pub width: f64,
    pub height: f64,
}

/// Default framing of the Mandelbrot set: the ±2 band around the real-axis
/// center of the set.
const DEFAULT_CENTER: (f64, f64) = (-0.5, 0.0);
const DEFAULT_WIDTH: f64 = 4.0;

impl Viewport {
    pub fn new(center_re: f64, center_im: f64, width: f64, height: f64) -> Self {
        Self {
            center: (center_re, center_im),
            width,
            height,
        }
    }

    /// Default Mandelbrot viewport for a canvas, width fixed at 4.0 and
    /// height scaled to the canvas aspect ratio so pixels stay square.
    pub fn mandelbrot_default(canvas_size: (u32, u32)) -> Self {
        let (width_px, height_px) = canvas_size;
        let aspect = f64::from(height_px.max(1)) / f64::from(width_px.max(1));
        Self {
            center: DEFAULT_CENTER,
            width: DEFAULT_WIDTH,
            height: DEFAULT_WIDTH * aspect,
        }
    }

    /// Map a pixel index to its point in the complex plane.
    ///
    /// Pixel (0, 0) lands on the minimum-real, minimum-imaginary corner of
    /// the viewport (the bottom-left in complex-plane orientation); rows
    /// advance toward larger imaginary values, columns toward larger real
    /// values, one pixel's extent in fractal space per step.
    pub fn pixel_to_point(&self, px: u32, py: u32, canvas_size: (u32, u32)) -> (f64, f64) {
        let (width_px, height_px) = canvas_size;
        let step_re = self.width / f64::from(width_px.max(1));
        let step_im = self.height / f64::from(height_px.max(1));
        let re_min = self.center.0 - self.width / 2.0;
        let im_min = self.center.1 - self.height / 2.0;
        (
            re_min + f64::from(px) * step_re,
            im_min + f64::from(py) * step_im,
        )
    }
}
