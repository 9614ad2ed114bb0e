//! SQL Backend implementations
//!
//! This module provides the SQL generation backend for PostgreSQL privilege
//! statements.

use std::borrow::Cow;

use crate::dcl::PrivilegeStatement;
use crate::error::StatementResult;

mod postgres;
mod sql_writer;

pub use postgres::PostgresStatementBuilder;
pub use sql_writer::SqlWriter;

/// Statement builder trait for generating SQL from privilege statements
///
/// # Implementations
///
/// - [`PostgresStatementBuilder`] - PostgreSQL backend
///
/// # Examples
///
/// ```
/// use pg_grant_acl::ObjectType;
/// use pg_grant_query::backend::{PostgresStatementBuilder, StatementBuilder};
/// use pg_grant_query::dcl::revoke;
///
/// let builder = PostgresStatementBuilder::new();
/// let stmt = revoke("ALL", ObjectType::Table, "t", "alice").grant_option(true);
///
/// let sql = builder.build_privilege_statement(&stmt).unwrap();
/// assert_eq!(sql, "REVOKE GRANT OPTION FOR ALL ON TABLE t FROM alice");
/// ```
pub trait StatementBuilder {
	/// Quote an identifier if the backend requires it
	fn quote_identifier<'a>(&self, ident: &'a str) -> Cow<'a, str>;

	/// Build a GRANT or REVOKE statement
	///
	/// # Errors
	///
	/// Fails on invalid privilege tokens and on targets, schemas or argument
	/// types that do not fit the object type.
	fn build_privilege_statement(&self, stmt: &PrivilegeStatement) -> StatementResult<String>;
}
