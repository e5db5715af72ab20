use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

use fib_core::InputPolicy;
use tracing::{debug, info};

/// Result of one invocation, mapped to the process exit status in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Settings for a single run, already extracted from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub index: Option<String>,
    pub policy: InputPolicy,
    pub report_time: bool,
}

/// Resolve the index, compute the value and write it to `out`.
///
/// Bad input writes the diagnostic to `err` and nothing to `out`. The only
/// `Err` returned is an I/O failure on one of the two streams.
pub fn run<O: Write, E: Write>(config: &RunConfig, out: &mut O, err: &mut E) -> anyhow::Result<Status> {
    let start = Instant::now();

    let value = match fib_core::compute(config.policy, config.index.as_deref()) {
        Ok(v) => v,
        Err(e) => {
            debug!(token = ?e.token(), "rejecting input");
            writeln!(err, "{}", e)?;
            return Ok(Status::Failure);
        }
    };

    let elapsed = start.elapsed();
    info!(policy = ?config.policy, bits = value.bits(), "computed value in {:.2?}", elapsed);

    writeln!(out, "{}", value)?;
    out.flush()?;

    if config.report_time {
        writeln!(err, "elapsed: {:.2?}", elapsed)?;
    }

    Ok(Status::Success)
}
