//! # pg-grant-query
//!
//! GRANT and REVOKE statements for privileges decoded by `pg-grant-acl`.
//!
//! Statements are plain values. Rendering them to PostgreSQL text is a
//! separate step performed by a [`StatementBuilder`](backend::StatementBuilder),
//! and executing that text is left to the caller.
//!
//! ## Architecture
//!
//! - [`dcl`]: statement values ([`PrivilegeStatement`], [`grant`], [`revoke`]),
//!   privilege tokens, targets, [`StatementOptions`] and the
//!   [`grant_statements`]/[`revoke_statements`] fan-out
//! - [`backend`]: [`SqlWriter`](backend::SqlWriter) and
//!   [`PostgresStatementBuilder`](backend::PostgresStatementBuilder)
//! - [`quoting`]: PostgreSQL identifier quoting
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_grant_acl::ObjectType;
//! use pg_grant_query::{grant, revoke};
//!
//! assert_eq!(
//!     grant(["ALL"], ObjectType::Table, "t", "alice").schema("grant").to_sql().unwrap(),
//!     "GRANT ALL ON TABLE \"grant\".t TO alice"
//! );
//! assert_eq!(
//!     revoke("ALL", ObjectType::Function, "user", "alice")
//!         .arg_types(["text", "integer"])
//!         .to_sql()
//!         .unwrap(),
//!     "REVOKE ALL ON FUNCTION \"user\"(text, integer) FROM alice"
//! );
//! ```

pub mod backend;
pub mod dcl;
pub mod error;
pub mod quoting;

pub use dcl::{
	Action, ObjectRef, PrivilegeList, PrivilegeStatement, PrivilegeToken, QualifiedName,
	StatementOptions, Target, grant, grant_statements, revoke, revoke_statements,
};
pub use error::{StatementError, StatementResult};
