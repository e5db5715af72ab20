use thiserror::Error;

/// Errors that can occur while turning a command-line token into an index.
///
/// Both variants render the same message: the caller only ever learns that
/// the input was not a usable number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FibError {
    #[error("Not a number")]
    MissingArgument,

    #[error("Not a number")]
    InvalidArgument(String),
}

impl FibError {
    /// The raw token that failed to parse, if there was one.
    pub fn token(&self) -> Option<&str> {
        match self {
            FibError::MissingArgument => None,
            FibError::InvalidArgument(token) => Some(token),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_share_the_diagnostic() {
        assert_eq!(FibError::MissingArgument.to_string(), "Not a number");
        assert_eq!(FibError::InvalidArgument("abc".to_string()).to_string(), "Not a number");
    }

    #[test]
    fn token_is_only_kept_for_invalid_input() {
        assert_eq!(FibError::MissingArgument.token(), None);
        assert_eq!(FibError::InvalidArgument("1.5".to_string()).token(), Some("1.5"));
    }
}
