//! Error types for statement rendering.

use thiserror::Error;

/// Errors raised when a GRANT or REVOKE statement cannot be rendered.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
	/// A privilege token does not match `KEYWORD` or `KEYWORD (subname)`.
	#[error("Privilege not valid: {0}")]
	InvalidPrivilege(String),

	/// The statement's arguments contradict each other or the object type.
	#[error("{0}")]
	InvalidArgument(String),
}

impl StatementError {
	pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument(message.into())
	}
}

/// Result type alias for statement rendering.
pub type StatementResult<T> = Result<T, StatementError>;
