//! GRANT and REVOKE statement builder

use std::fmt;

use pg_grant_acl::ObjectType;

use super::{PrivilegeList, StatementOptions, Target};
use crate::backend::{PostgresStatementBuilder, StatementBuilder};
use crate::error::{StatementError, StatementResult};

/// Whether a statement grants or revokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Action {
	/// GRANT ... TO
	Grant,
	/// REVOKE ... FROM
	Revoke,
}

impl Action {
	/// Returns the leading keyword
	pub fn as_sql(&self) -> &'static str {
		match self {
			Action::Grant => "GRANT",
			Action::Revoke => "REVOKE",
		}
	}

	/// Returns the keyword introducing the grantee
	pub fn preposition(&self) -> &'static str {
		match self {
			Action::Grant => "TO",
			Action::Revoke => "FROM",
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_sql())
	}
}

/// A GRANT or REVOKE statement on a single object for a single grantee
///
/// Construction never fails. The privilege tokens and the combination of
/// target, schema and argument types are checked when the statement is
/// rendered with [`to_sql`](Self::to_sql).
///
/// # Examples
///
/// ```
/// use pg_grant_acl::ObjectType;
/// use pg_grant_query::dcl::{grant, revoke};
///
/// let stmt = grant(["SELECT", "UPDATE (name)"], ObjectType::Table, "users", "app")
///     .schema("auth")
///     .grant_option(true);
/// assert_eq!(
///     stmt.to_sql().unwrap(),
///     "GRANT SELECT, UPDATE (name) ON TABLE auth.users TO app WITH GRANT OPTION"
/// );
///
/// let stmt = revoke("ALL", ObjectType::Function, "add", "PUBLIC").arg_types(["integer", "integer"]);
/// assert_eq!(
///     stmt.to_sql().unwrap(),
///     "REVOKE ALL ON FUNCTION add(integer, integer) FROM PUBLIC"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegeStatement {
	/// GRANT or REVOKE
	pub action: Action,
	/// Privilege tokens, e.g. `SELECT` or `UPDATE (name)`
	pub privileges: PrivilegeList,
	/// Type of the target object
	pub object_type: ObjectType,
	/// The target object
	pub target: Target,
	/// Role receiving or losing the privileges, or `PUBLIC`
	pub grantee: String,
	/// WITH GRANT OPTION on GRANT, GRANT OPTION FOR on REVOKE
	pub grant_option: bool,
	/// Schema qualifying a bare target name
	pub schema: Option<String>,
	/// Function argument types; `Some(vec![])` for a function without arguments
	pub arg_types: Option<Vec<String>>,
	/// Quote column names found in privilege tokens
	pub quote_subname: bool,
}

impl PrivilegeStatement {
	/// Create a new statement with default options
	pub fn new(
		action: Action,
		privileges: impl Into<PrivilegeList>,
		object_type: ObjectType,
		target: impl Into<Target>,
		grantee: impl Into<String>,
	) -> Self {
		Self {
			action,
			privileges: privileges.into(),
			object_type,
			target: target.into(),
			grantee: grantee.into(),
			grant_option: false,
			schema: None,
			arg_types: None,
			quote_subname: true,
		}
	}

	/// Set the grant option flag
	pub fn grant_option(mut self, grant_option: bool) -> Self {
		self.grant_option = grant_option;
		self
	}

	/// Set the schema of a bare target name
	pub fn schema(mut self, schema: impl Into<String>) -> Self {
		self.schema = Some(schema.into());
		self
	}

	/// Set the argument types of a FUNCTION target
	///
	/// Pass an empty collection for a function without arguments.
	pub fn arg_types<I, S>(mut self, arg_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.arg_types = Some(arg_types.into_iter().map(Into::into).collect());
		self
	}

	/// Set whether column names inside privilege tokens get quoted
	///
	/// Turn this off when the tokens already hold quoted identifiers, such as
	/// keywords produced by parsing with a pre-quoted subname.
	pub fn quote_subname(mut self, quote_subname: bool) -> Self {
		self.quote_subname = quote_subname;
		self
	}

	/// Apply every field of `options`
	pub fn options(mut self, options: &StatementOptions) -> Self {
		self.grant_option = options.grant_option;
		self.schema = options.schema.clone();
		self.arg_types = options.arg_types.clone();
		self.quote_subname = options.quote_subname;
		self
	}

	/// Render the statement with a specific builder
	pub fn build<B: StatementBuilder + ?Sized>(&self, builder: &B) -> StatementResult<String> {
		builder.build_privilege_statement(self)
	}

	/// Render the statement as PostgreSQL
	///
	/// # Errors
	///
	/// - [`StatementError::InvalidPrivilege`] for a malformed privilege token
	/// - [`StatementError::InvalidArgument`] when the target, schema and
	///   argument types do not fit together or do not fit the object type
	pub fn to_sql(&self) -> StatementResult<String> {
		self.build(&PostgresStatementBuilder::new())
	}

	/// Render the statement and hand the SQL to `executor`
	///
	/// Nothing is executed when rendering fails.
	///
	/// # Examples
	///
	/// ```
	/// use pg_grant_acl::ObjectType;
	/// use pg_grant_query::StatementError;
	/// use pg_grant_query::dcl::grant;
	///
	/// let mut executed = Vec::new();
	/// grant("USAGE", ObjectType::Schema, "app", "alice")
	///     .execute_with(|sql| {
	///         executed.push(sql.to_string());
	///         Ok::<_, StatementError>(())
	///     })
	///     .unwrap();
	/// assert_eq!(executed, ["GRANT USAGE ON SCHEMA app TO alice"]);
	/// ```
	pub fn execute_with<F, T, E>(&self, executor: F) -> Result<T, E>
	where
		F: FnOnce(&str) -> Result<T, E>,
		E: From<StatementError>,
	{
		let sql = self.to_sql()?;
		tracing::debug!(sql = %sql, "executing privilege statement");
		executor(&sql)
	}
}

/// Create a GRANT statement
///
/// # Examples
///
/// ```
/// use pg_grant_acl::ObjectType;
/// use pg_grant_query::dcl::grant;
///
/// let stmt = grant("ALL", ObjectType::Table, "mytable", "PUBLIC");
/// assert_eq!(stmt.to_sql().unwrap(), "GRANT ALL ON TABLE mytable TO PUBLIC");
/// ```
pub fn grant(
	privileges: impl Into<PrivilegeList>,
	object_type: ObjectType,
	target: impl Into<Target>,
	grantee: impl Into<String>,
) -> PrivilegeStatement {
	PrivilegeStatement::new(Action::Grant, privileges, object_type, target, grantee)
}

/// Create a REVOKE statement
///
/// With [`grant_option`](PrivilegeStatement::grant_option) set, only the
/// grant option is revoked.
pub fn revoke(
	privileges: impl Into<PrivilegeList>,
	object_type: ObjectType,
	target: impl Into<Target>,
	grantee: impl Into<String>,
) -> PrivilegeStatement {
	PrivilegeStatement::new(Action::Revoke, privileges, object_type, target, grantee)
}
