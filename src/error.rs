/// Errors produced while setting up or walking a grid traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// A caller-supplied value was rejected before any work was done.
    InvalidArgument(String),
    /// The traversal took more steps than the cell span allows.
    InternalInvariantViolation { steps: u64, max_steps: u64 },
}

impl TraceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        TraceError::InvalidArgument(message.into())
    }
}

impl std::fmt::Display for TraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceError::InvalidArgument(message) => {
                write!(f, "Invalid argument: {message}")
            }
            TraceError::InternalInvariantViolation { steps, max_steps } => {
                write!(
                    f,
                    "Traversal exceeded its step bound ({steps} steps, at most {max_steps} expected)"
                )
            }
        }
    }
}

impl std::error::Error for TraceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TraceError::invalid_argument("cell_size_xy must be positive, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid argument: cell_size_xy must be positive, got 0"
        );

        let err = TraceError::InternalInvariantViolation {
            steps: 15,
            max_steps: 14,
        };
        assert!(err.to_string().contains("15 steps"));
        assert!(err.to_string().contains("14 expected"));
    }
}
