//! Kernel configuration registry.
//!
//! Maps stable kernel ids to constructors so the harness can select a
//! kernel by name without knowing the concrete types.

use crate::kernel::{EscapeKernel, ReferenceKernel, TextbookKernel};

/// Configuration for one escape-time kernel variant.
pub struct KernelConfig {
    /// Unique identifier (matches the harness `--kernel` flag)
    pub id: &'static str,
    /// Human-readable name for reports and logs
    pub display_name: &'static str,
    /// Construct a fresh kernel instance
    pub create: fn() -> Box<dyn EscapeKernel>,
}

pub static KERNEL_CONFIGS: &[KernelConfig] = &[
    KernelConfig {
        id: "reference",
        display_name: "Reference (sheared update order)",
        create: || Box::new(ReferenceKernel),
    },
    KernelConfig {
        id: "textbook",
        display_name: "Textbook (z \u{2190} z\u{b2} + c)",
        create: || Box::new(TextbookKernel),
    },
];

pub fn get_kernel_config(id: &str) -> Option<&'static KernelConfig> {
    KERNEL_CONFIGS.iter().find(|c| c.id == id)
}
