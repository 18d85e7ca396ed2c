use serde::{Deserialize, Serialize};

/// Data computed for a single escape-time evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeData {
    /// Number of iterations before escape (or max_iterations if the orbit
    /// stayed bounded for the whole budget)
    pub iterations: u32,
    /// Iteration budget used for this evaluation
    pub max_iterations: u32,
    /// Whether the orbit escaped within budget
    pub escaped: bool,
}

impl EscapeData {
    /// Build a result from a raw iteration count. `escaped` is derived:
    /// a count strictly below the budget means the escape check fired.
    pub fn new(iterations: u32, max_iterations: u32) -> Self {
        Self {
            iterations,
            max_iterations,
            escaped: iterations < max_iterations,
        }
    }
}
