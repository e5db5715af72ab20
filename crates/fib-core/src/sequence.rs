use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::mem;

/// Iterator over the Fibonacci sequence, starting at F(0) = 0.
///
/// Holds the (i, i+1) pair and never ends; values are arbitrary precision.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    a: BigUint,
    b: BigUint,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            a: BigUint::zero(),
            b: BigUint::one(),
        }
    }

    /// Advance the pair once: (a, b) <- (b, a + b), using the old `a`.
    fn step(&mut self) {
        let next = &self.a + &self.b;
        self.a = mem::replace(&mut self.b, next);
    }

    /// Consume the iterator after `steps` updates and return the current `a`.
    pub fn advance(mut self, steps: u64) -> BigUint {
        for _ in 0..steps {
            self.step();
        }
        self.a
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let current = self.a.clone();
        self.step();
        Some(current)
    }
}

/// Compute F(steps) iteratively.
pub fn nth(steps: u64) -> BigUint {
    Fibonacci::new().advance(steps)
}
