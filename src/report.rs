// Output helpers shared by the demonstration programs in `src/bin`.
//
// A program prints lines of `label: value` or `label: v1 v2 v3`, and logs to
// stderr so that stdout only carries those lines.

use crate::policy::Tuning;
use anyhow::{anyhow, Result};
use std::fmt::Display;
use tracing::info;
use tracing_subscriber::EnvFilter;

// `label: value`
pub fn scalar_line<V: Display>(label: &str, value: V) -> String {
    format!("{}: {}", label, value)
}

// `label: v1 v2 v3`, or `label: ` for an empty sequence.
pub fn sequence_line<V: Display>(label: &str, values: &[V]) -> String {
    let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("{}: {}", label, joined.join(" "))
}

// A search result printed the way a position is: `None` becomes `len`, the
// end of the searched range.
pub fn position_line(label: &str, position: Option<usize>, len: usize) -> String {
    scalar_line(label, position.unwrap_or(len))
}

// Install the stderr logger and report the parallel tuning.
//
// Honours `RUST_LOG`; defaults to warnings only. A malformed tuning
// environment is logged as a warning and the defaults are used.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {}", err))?;

    let tuning = Tuning::parallel();
    info!(
        threads = tuning.threads(),
        seq_threshold = tuning.seq_threshold(),
        "parallel tuning"
    );
    Ok(())
}
