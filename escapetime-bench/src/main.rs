use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use escapetime_bench::cli::{Cli, Mode};
use escapetime_bench::{
    format_json, format_json_line, format_report, run_fixed, run_grid, sweep_resolutions,
};
use escapetime_core::{get_kernel_config, EscapeTimeEvaluator, Viewport, KERNEL_CONFIGS};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = get_kernel_config(&cli.kernel).ok_or_else(|| {
        let known: Vec<&str> = KERNEL_CONFIGS.iter().map(|c| c.id).collect();
        anyhow!("unknown kernel {:?}, expected one of {:?}", cli.kernel, known)
    })?;
    info!(kernel = config.display_name, mode = ?cli.mode, "starting workload");

    let resolutions = match cli.sweep {
        Some(steps) => sweep_resolutions(steps),
        None => vec![(cli.width, cli.height)],
    };

    let evaluator = EscapeTimeEvaluator::new((config.create)(), cli.max_iter);
    for canvas_size in resolutions {
        let summary = match cli.mode {
            Mode::Fixed => run_fixed(&evaluator, (cli.point.re, cli.point.im), canvas_size),
            Mode::Grid => {
                let viewport = Viewport::mandelbrot_default(canvas_size);
                run_grid(&evaluator, &viewport, canvas_size)
            }
        };
        if cli.json {
            // A sweep prints one compact JSON document per line (NDJSON);
            // a single run keeps the readable pretty form.
            if cli.sweep.is_some() {
                println!("{}", format_json_line(&summary)?);
            } else {
                println!("{}", format_json(&summary)?);
            }
        } else {
            println!("{}", format_report(&summary));
        }
    }
    Ok(())
}
