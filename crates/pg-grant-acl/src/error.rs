//! Error types for ACL decoding.

use thiserror::Error;

/// Errors that can occur while decoding ACL text.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AclError {
	/// The ACL item does not follow the `grantee=codes/grantor` grammar.
	#[error("ACL syntax error: {0}")]
	Syntax(String),

	/// The object type name is not one PostgreSQL can grant privileges on.
	#[error("Unknown type: {0}")]
	UnknownType(String),

	/// The privilege keyword is not a PostgreSQL privilege.
	#[error("Unknown privilege: {0}")]
	UnknownPrivilege(String),
}

/// Result type alias for ACL operations.
pub type AclResult<T> = Result<T, AclError>;
