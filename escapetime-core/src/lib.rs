pub mod config;
pub mod escape_data;
pub mod evaluator;
pub mod kernel;
pub mod viewport;

pub use config::{get_kernel_config, KernelConfig, KERNEL_CONFIGS};
pub use escape_data::EscapeData;
pub use evaluator::EscapeTimeEvaluator;
pub use kernel::{EscapeKernel, ReferenceKernel, TextbookKernel, ESCAPE_THRESHOLD_SQ};
pub use viewport::Viewport;
