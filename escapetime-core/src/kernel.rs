/// Squared escape threshold: |z|² > 2² means the orbit has left the set.
pub const ESCAPE_THRESHOLD_SQ: f32 = 4.0;

/// A scalar escape-time kernel.
///
/// Implementations count how many recurrence steps a point survives before
/// its orbit's squared magnitude exceeds [`ESCAPE_THRESHOLD_SQ`], up to an
/// iteration budget. Kernels are stateless unit values: every call is an
/// independent pure computation, safe to invoke from any number of threads
/// without locking.
///
/// All arithmetic is f32. Non-finite inputs are out of contract: a NaN
/// orbit never satisfies the escape comparison and runs to the full budget.
pub trait EscapeKernel {
    /// Number of iterations before escape, or `max_iter` if the orbit
    /// stayed bounded for the whole budget. Always in `[0, max_iter]`.
    fn escape_iterations(&self, real0: f32, imag0: f32, max_iter: u32) -> u32;
}

impl EscapeKernel for Box<dyn EscapeKernel> {
    fn escape_iterations(&self, real0: f32, imag0: f32, max_iter: u32) -> u32 {
        (**self).escape_iterations(real0, imag0, max_iter)
    }
}

/// The benchmark's reference kernel.
///
/// The orbit is seeded at the coordinate itself (`z₀ = c`, not 0), and the
/// imaginary update reads the **already-updated** real part, so the
/// trajectory differs from textbook complex squaring. Both quirks are the
/// kernel's numeric identity: every published timing depends on this exact
/// step order, so it is preserved bit-for-bit. For the conventional
/// recurrence, use [`TextbookKernel`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceKernel;

impl EscapeKernel for ReferenceKernel {
    fn escape_iterations(&self, real0: f32, imag0: f32, max_iter: u32) -> u32 {
        let c_re = real0;
        let c_im = imag0;
        let mut re = real0;
        let mut im = imag0;

        for i in 0..max_iter {
            if re * re + im * im > ESCAPE_THRESHOLD_SQ {
                return i;
            }
            // `im` reads the freshly written `re`; reordering this pair
            // changes every escape count.
            re = re * re - im * im + c_re;
            im = re * im * 2.0 + c_im;
        }
        max_iter
    }
}

/// Standard seeded Mandelbrot recurrence, `z ← z² + c` with `z₀ = c`.
///
/// The imaginary update uses the pre-update real part, i.e. genuine complex
/// squaring. Use this variant when the goal is a correct fractal membership
/// count rather than comparability with [`ReferenceKernel`] timings.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextbookKernel;

impl EscapeKernel for TextbookKernel {
    fn escape_iterations(&self, real0: f32, imag0: f32, max_iter: u32) -> u32 {
        let c_re = real0;
        let c_im = imag0;
        let mut re = real0;
        let mut im = imag0;

        for i in 0..max_iter {
            if re * re + im * im > ESCAPE_THRESHOLD_SQ {
                return i;
            }
            let new_re = re * re - im * im + c_re;
            let new_im = 2.0 * re * im + c_im;
            re = new_re;
            im = new_im;
        }
        max_iter
    }
}
