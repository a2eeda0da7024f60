/*!
 * Copy Bench - Main Entry Point
 *
 * Sweeps the configured region sizes and logs one measurement per size.
 */

use copy_bench::{init_tracing, measure_copy_duration, BenchConfig, COPY_ITERATIONS};
use miette::miette;
use tracing::{error, info};

fn main() -> miette::Result<()> {
    init_tracing(BenchConfig::trace_json_from_env());
    let config = BenchConfig::from_env();

    info!(
        sizes = ?config.sizes,
        iterations = COPY_ITERATIONS,
        "Copy benchmark starting"
    );

    let mut failures = 0usize;
    for &size in &config.sizes {
        match measure_copy_duration(size) {
            Ok(duration_ms) => {
                info!(size, iterations = COPY_ITERATIONS, duration_ms, "Measured copy duration");
            }
            Err(e) => {
                failures += 1;
                error!(size, error = %e, "Copy benchmark failed");
            }
        }
    }

    if failures > 0 && failures == config.sizes.len() {
        return Err(miette!(
            code = "bench::all_failed",
            "All {} measurements failed",
            failures
        ));
    }

    info!(
        measured = config.sizes.len() - failures,
        failed = failures,
        "Copy benchmark finished"
    );
    Ok(())
}
