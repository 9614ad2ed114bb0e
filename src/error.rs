//! Top-level error type.

use pg_grant_acl::AclError;
use pg_grant_query::StatementError;
use thiserror::Error;

/// Errors raised while decoding an ACL or rendering a statement.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// The ACL could not be decoded.
	#[error(transparent)]
	Acl(#[from] AclError),

	/// A statement could not be rendered.
	#[error(transparent)]
	Statement(#[from] StatementError),
}

/// Result type alias for pg-grant operations.
pub type Result<T> = std::result::Result<T, Error>;
