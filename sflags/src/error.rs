//! Error types produced while describing a configuration and while setting
//! flag values.

use thiserror::Error;

use crate::value::Kind;

/// Boxed error returned by validators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort a call to [`parse_struct`](crate::parse_struct) or
/// [`parse`](crate::parse).
///
/// No partial descriptor list is returned alongside any of these.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The configuration reference was absent.
    #[error("configuration cannot be nil")]
    NilConfig,

    /// The configuration reference does not point to a struct.
    #[error("configuration must be a struct that implements `Describe`, found `{type_name}`")]
    InvalidConfigType {
        /// Static type name of the rejected target.
        type_name: &'static str,
    },

    /// Nested structures went deeper than [`Options::max_depth`](crate::Options::max_depth).
    #[error("nesting depth limit of {limit} exceeded at field '{path}'")]
    MaxDepthExceeded {
        /// Dotted declared-field path where the limit was hit.
        path: String,
        /// Configured limit.
        limit: usize,
    },
}

/// Errors returned by [`Value::set`](crate::Value::set).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SetError {
    /// The raw text could not be converted to the field's kind.
    #[error("invalid {kind} value '{input}': {reason}")]
    Parse {
        /// Kind that was being parsed.
        kind: Kind,
        /// Raw input as supplied.
        input: String,
        /// Human-readable explanation.
        reason: String,
    },

    /// The raw text does not follow the structural syntax of the value.
    #[error("invalid syntax '{input}', expected {expected}")]
    Syntax {
        /// Raw input as supplied.
        input: String,
        /// Description of the accepted syntax.
        expected: &'static str,
    },

    /// The configured validator rejected the input.
    #[error(transparent)]
    Validation(BoxError),
}

/// Errors returned while applying parsed command-line arguments.
#[cfg(feature = "clap")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// A command-line or environment value was rejected.
    #[error("invalid value for '--{flag}': {source}")]
    Set {
        /// Flag being set.
        flag: String,
        /// Underlying failure.
        source: SetError,
    },

    /// A required flag was supplied by neither the command line nor the
    /// environment.
    #[error("missing required flag '--{flag}'")]
    MissingRequired {
        /// Flag that is missing.
        flag: String,
    },
}

impl SetError {
    pub(crate) fn parse(kind: Kind, input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn invalid_config_type_names_the_type() {
        let err = ParseError::InvalidConfigType {
            type_name: "alloc::string::String",
        };
        assert!(err.to_string().contains("alloc::string::String"));
    }

    #[rstest]
    fn depth_error_reports_path_and_limit() {
        let err = ParseError::MaxDepthExceeded {
            path: "outer.inner".into(),
            limit: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("outer.inner"));
        assert!(msg.contains('4'));
    }

    #[rstest]
    fn parse_error_mentions_kind_and_input() {
        let err = SetError::parse(Kind::Int, "abc", "invalid digit");
        assert_eq!(err.to_string(), "invalid int value 'abc': invalid digit");
    }

    #[rstest]
    fn validation_is_transparent() {
        let err = SetError::Validation("port out of range".into());
        assert_eq!(err.to_string(), "port out of range");
    }
}
