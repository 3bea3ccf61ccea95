//! Error types for flag resolution

use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for flag resolution
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Problems with the argument vector. Only fixable by re-running with
/// corrected arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Flag not in the grammar
    #[error("unknown flag: {flag}")]
    UnknownFlag { flag: String },

    /// Long-flag prefix matching more than one flag
    #[error("ambiguous flag: --{prefix} (could be {candidates})")]
    AmbiguousFlag { prefix: String, candidates: String },

    /// Value given to a flag that takes none
    #[error("flag --{flag} does not take a value")]
    UnexpectedValue { flag: String },

    /// Argument is not valid UTF-8
    #[error("argument is not valid UTF-8: {arg}")]
    InvalidUnicode { arg: String },

    /// No positional target path
    #[error("missing target path")]
    MissingTarget,

    /// More than one positional argument left after flag extraction
    #[error("expected a single target path, got {count}: {}", .found.join(", "))]
    ExtraTargets { count: usize, found: Vec<String> },

    /// Target path is empty after trimming
    #[error("target path must not be empty")]
    EmptyTarget,
}

/// Why resolution did not produce a selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// `-h`/`--help` was given; not a failure, but nothing else runs
    #[error("help requested")]
    HelpRequested,
}

impl ResolveError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            ResolveError::Usage(_) => ExitStatus::Usage,
            ResolveError::HelpRequested => ExitStatus::Help,
        }
    }
}

/// Process exit statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// The provisioner reported a failure
    Failure,
    Usage,
    Help,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Usage => 2,
            ExitStatus::Help => 3,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            ExitStatus::Success.code(),
            ExitStatus::Failure.code(),
            ExitStatus::Usage.code(),
            ExitStatus::Help.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_code_leaves_status_usable() {
        let status = ExitStatus::Usage;
        assert_eq!(status.code(), 2);
        assert_eq!(status, ExitStatus::Usage);
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Help.code(), 3);
    }

    #[test]
    fn test_help_and_usage_map_to_their_statuses() {
        assert_eq!(ResolveError::HelpRequested.exit_status(), ExitStatus::Help);
        assert_eq!(
            ResolveError::from(UsageError::MissingTarget).exit_status(),
            ExitStatus::Usage
        );
    }

    #[test]
    fn test_extra_targets_message_lists_paths() {
        let err = UsageError::ExtraTargets {
            count: 2,
            found: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "expected a single target path, got 2: a, b"
        );
    }
}
