/*!
 * Benchmark Configuration
 *
 * Environment-driven settings for the benchmark binary. The library API
 * itself reads no environment.
 *
 * Environment variables:
 * - COPY_BENCH_SIZES: comma-separated byte counts (default: 1KB,64KB,1MB,16MB)
 * - COPY_BENCH_TRACE_JSON: "1" or "true" for JSON log output
 */

use super::limits::DEFAULT_SWEEP_SIZES;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const SIZES_VAR: &str = "COPY_BENCH_SIZES";
pub const TRACE_JSON_VAR: &str = "COPY_BENCH_TRACE_JSON";

/// Settings for a benchmark sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Requested sizes, signed so invalid input reaches the benchmark's own validation
    pub sizes: Vec<i64>,
    pub trace_json: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SWEEP_SIZES.iter().map(|&s| s as i64).collect(),
            trace_json: false,
        }
    }
}

impl BenchConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SIZES_VAR) {
            let sizes = parse_sizes(&raw);
            if sizes.is_empty() {
                warn!(var = SIZES_VAR, value = %raw, "No usable sizes, keeping defaults");
            } else {
                config.sizes = sizes;
            }
        }

        config.trace_json = Self::trace_json_from_lookup(&lookup);
        config
    }

    /// Read only the log format flag from the process environment
    ///
    /// Lets the subscriber be installed before sizes are parsed, so their
    /// warnings are not lost.
    pub fn trace_json_from_env() -> bool {
        Self::trace_json_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn trace_json_from_lookup<F>(lookup: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(TRACE_JSON_VAR)
            .map(|raw| raw == "1" || raw.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

/// Parse a comma-separated size list, skipping entries that are not integers
pub fn parse_sizes(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<i64>() {
            Ok(size) => Some(size),
            Err(e) => {
                warn!(entry = %entry, error = %e, "Skipping unparseable size");
                None
            }
        })
        .collect()
}
