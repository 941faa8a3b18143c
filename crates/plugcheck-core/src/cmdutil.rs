//! Command utility types.

/// Error indicating a flag parsing issue.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FlagError(pub String);

/// Silent error - triggers exit 1 without message.
#[derive(Debug, thiserror::Error)]
#[error("")]
pub struct SilentError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_flag_error() {
        let err = FlagError("specify a plugin or --all".to_string());
        assert_eq!(err.to_string(), "specify a plugin or --all");
    }

    #[test]
    fn test_should_display_silent_error() {
        assert_eq!(SilentError.to_string(), "");
    }

    #[test]
    fn test_should_downcast_silent_error_through_anyhow() {
        let err: anyhow::Error = SilentError.into();
        assert!(err.downcast_ref::<SilentError>().is_some());
    }
}
