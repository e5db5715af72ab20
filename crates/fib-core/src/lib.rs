//! Fibonacci computation and the rules for turning a command-line token into
//! an index.

pub mod errors;
pub mod policy;
pub mod sequence;

pub use errors::FibError;
pub use policy::{InputPolicy, parse_index};
pub use sequence::{Fibonacci, nth};

use num_bigint::BigUint;

/// Resolve `token` under `policy` and compute the matching Fibonacci number.
pub fn compute(policy: InputPolicy, token: Option<&str>) -> Result<BigUint, FibError> {
    let steps = policy.resolve(token)?;
    Ok(nth(steps))
}
