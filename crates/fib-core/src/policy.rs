use tracing::debug;

use crate::errors::FibError;

/// How a raw command-line token becomes an iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Missing input means 0, negative input is replaced by its absolute value.
    #[default]
    Abs,
    /// Input is required; negative values run zero iterations.
    Strict,
    /// Missing input means 0, negative input is floored to 0.
    Floor,
}

impl InputPolicy {
    /// Map an optional token to the number of steps to run.
    pub fn resolve(self, token: Option<&str>) -> Result<u64, FibError> {
        let index = parse_index(token)?;
        let steps = match (self, index) {
            (InputPolicy::Strict, None) => return Err(FibError::MissingArgument),
            (InputPolicy::Abs | InputPolicy::Floor, None) => 0,
            (InputPolicy::Abs, Some(n)) => n.unsigned_abs(),
            (InputPolicy::Strict | InputPolicy::Floor, Some(n)) => u64::try_from(n).unwrap_or(0),
        };
        debug!(policy = ?self, ?index, steps, "resolved index");
        Ok(steps)
    }
}

/// Parse an optional token into a signed index.
///
/// `None` passes through; anything that is not an `i64` after trimming
/// surrounding whitespace is an [`FibError::InvalidArgument`].
pub fn parse_index(token: Option<&str>) -> Result<Option<i64>, FibError> {
    let Some(raw) = token else {
        return Ok(None);
    };
    raw.trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|e| {
            debug!(token = raw, error = %e, "failed to parse index");
            FibError::InvalidArgument(raw.to_string())
        })
}
