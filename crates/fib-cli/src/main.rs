use std::io;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use fib_core::InputPolicy;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod app;
use app::RunConfig;

/// Environment variable holding the tracing filter, e.g. `FIB_LOG=debug`.
const LOG_ENV: &str = "FIB_LOG";

#[derive(Parser, Debug)]
#[command(version, about = "Print the Nth Fibonacci number", allow_negative_numbers = true)]
/// Command-line arguments for the fib binary.
struct Opts {
    /// Index of the Fibonacci number to print
    #[arg(value_name = "N")]
    index: Option<String>,

    /// How missing or negative input is treated
    #[arg(long, value_enum, default_value_t = Policy::Abs)]
    policy: Policy,

    /// Report the computation time on stderr
    #[arg(long)]
    time: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Policy {
    /// Missing input means 0, negative input uses its absolute value
    Abs,
    /// Input is required, negative input prints 0
    Strict,
    /// Missing input means 0, negative input is floored to 0
    Floor,
}

impl From<Policy> for InputPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Abs => InputPolicy::Abs,
            Policy::Strict => InputPolicy::Strict,
            Policy::Floor => InputPolicy::Floor,
        }
    }
}

impl From<Opts> for RunConfig {
    fn from(opts: Opts) -> Self {
        RunConfig {
            index: opts.index,
            policy: opts.policy.into(),
            report_time: opts.time,
        }
    }
}

fn main() -> ExitCode {
    // logs go to stderr so stdout only ever carries the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = RunConfig::from(Opts::parse());

    match app::run(&config, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(status) => status.into(),
        Err(e) => {
            error!("failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_index_is_optional() {
        let opts = Opts::try_parse_from(["fib"]).unwrap();
        assert_eq!(opts.index, None);
        assert_eq!(opts.policy, Policy::Abs);
        assert!(!opts.time);
    }

    #[test]
    fn negative_index_is_not_taken_for_a_flag() {
        let opts = Opts::try_parse_from(["fib", "-7"]).unwrap();
        assert_eq!(opts.index.as_deref(), Some("-7"));
    }

    #[test]
    fn non_numeric_index_reaches_the_parser() {
        let opts = Opts::try_parse_from(["fib", "--policy", "strict", "abc"]).unwrap();
        assert_eq!(opts.index.as_deref(), Some("abc"));
        assert_eq!(opts.policy, Policy::Strict);
    }

    #[test]
    fn unknown_policy_is_a_usage_error() {
        assert!(Opts::try_parse_from(["fib", "--policy", "lenient", "3"]).is_err());
    }

    #[test]
    fn options_convert_into_run_config() {
        let opts = Opts::try_parse_from(["fib", "--policy", "floor", "--time", "12"]).unwrap();
        let config = RunConfig::from(opts);
        assert_eq!(config.index.as_deref(), Some("12"));
        assert_eq!(config.policy, InputPolicy::Floor);
        assert!(config.report_time);
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Opts::command().debug_assert();
    }
}
