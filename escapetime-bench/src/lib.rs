pub mod cli;
pub mod report;
pub mod workload;

pub use cli::{Cli, Mode, Point};
pub use report::{format_json, format_json_line, format_report};
pub use workload::{run_fixed, run_grid, sweep_resolutions, WorkloadSummary};
