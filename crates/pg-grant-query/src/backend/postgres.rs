//! PostgreSQL statement builder backend
//!
//! This module implements the SQL generation backend for PostgreSQL.

use std::borrow::Cow;

use pg_grant_acl::{ObjectType, PUBLIC};

use super::{SqlWriter, StatementBuilder};
use crate::dcl::{Action, ObjectRef, PrivilegeStatement, PrivilegeToken, QualifiedName, Target};
use crate::error::{StatementError, StatementResult};
use crate::quoting;

/// PostgreSQL statement builder
///
/// This struct renders privilege statements for PostgreSQL, using the following conventions:
/// - Identifiers: bare when PostgreSQL reads them back unchanged, otherwise
///   double quotes (`"user"`)
/// - Grantee `PUBLIC` (any case): emitted verbatim
///
/// # Examples
///
/// ```
/// use pg_grant_acl::ObjectType;
/// use pg_grant_query::backend::{PostgresStatementBuilder, StatementBuilder};
/// use pg_grant_query::dcl::grant;
///
/// let builder = PostgresStatementBuilder::new();
/// let stmt = grant(["ALL (user)"], ObjectType::Table, "t", "alice");
///
/// let sql = builder.build_privilege_statement(&stmt).unwrap();
/// assert_eq!(sql, "GRANT ALL (\"user\") ON TABLE t TO alice");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostgresStatementBuilder;

impl PostgresStatementBuilder {
	/// Create a new PostgreSQL statement builder
	pub fn new() -> Self {
		Self
	}

	fn invalid_argument(&self, stmt: &PrivilegeStatement, message: String) -> StatementError {
		tracing::warn!(
			action = %stmt.action,
			object_type = %stmt.object_type,
			"{message}"
		);
		StatementError::invalid_argument(message)
	}

	/// Write a privilege token, quoting its subname unless told otherwise
	fn write_privilege(&self, writer: &mut SqlWriter, token: &PrivilegeToken<'_>, quote_subname: bool) {
		writer.push(token.keyword);
		if let Some(subname) = token.subname {
			writer.push(" (");
			if quote_subname {
				writer.push_identifier(subname, |s| self.quote_identifier(s).into_owned());
			} else {
				writer.push(subname);
			}
			writer.push(")");
		}
	}

	/// Write `schema.name`, or `name` without a schema
	fn write_qualified_name(&self, writer: &mut SqlWriter, schema: Option<&str>, name: &str) {
		if let Some(schema) = schema {
			writer.push_identifier(schema, |s| self.quote_identifier(s).into_owned());
			writer.push(".");
		}
		writer.push_identifier(name, |s| self.quote_identifier(s).into_owned());
	}

	/// Write a parenthesized argument type list
	fn write_arg_types(&self, writer: &mut SqlWriter, arg_types: &[String]) {
		writer.push("(");
		writer.push_list(arg_types, ", ", |w, arg_type| {
			w.push_identifier(arg_type, |s| self.quote_identifier(s).into_owned());
		});
		writer.push(")");
	}

	/// Check the target, schema and argument types against the object type
	fn validate_target(&self, stmt: &PrivilegeStatement) -> StatementResult<()> {
		if matches!(stmt.target, Target::Object(_)) && stmt.schema.is_some() {
			return Err(self.invalid_argument(
				stmt,
				"schema argument not supported unless target is a string.".to_string(),
			));
		}

		if stmt.object_type != ObjectType::Function && stmt.arg_types.is_some() {
			return Err(self.invalid_argument(
				stmt,
				"arg_types argument not supported unless type is FUNCTION.".to_string(),
			));
		}

		match &stmt.target {
			Target::Name(_) => {
				if stmt.schema.is_some() && !stmt.object_type.is_schema_qualified() {
					return Err(self.invalid_argument(
						stmt,
						format!(
							"schema argument not supported for {} targets.",
							stmt.object_type
						),
					));
				}
				if stmt.object_type == ObjectType::Function && stmt.arg_types.is_none() {
					return Err(self.invalid_argument(
						stmt,
						"Must use an empty list of arg_types if function has no arguments, not None."
							.to_string(),
					));
				}
			}
			Target::Object(object) => {
				if !object.matches(stmt.object_type) {
					return Err(self.invalid_argument(
						stmt,
						format!(
							"{object:?} cannot be the target of a {} statement.",
							stmt.object_type
						),
					));
				}
				if stmt.arg_types.is_some() {
					return Err(self.invalid_argument(
						stmt,
						"arg_types argument not supported unless target is a string.".to_string(),
					));
				}
			}
		}

		Ok(())
	}

	/// Write the object named after `ON <TYPE>`
	fn write_target(&self, writer: &mut SqlWriter, stmt: &PrivilegeStatement) {
		match &stmt.target {
			Target::Name(name) => match stmt.object_type {
				// Large objects are named by their OID.
				ObjectType::LargeObject if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) => {
					writer.push(name);
				}
				ObjectType::Function => {
					self.write_qualified_name(writer, stmt.schema.as_deref(), name);
					self.write_arg_types(writer, stmt.arg_types.as_deref().unwrap_or_default());
				}
				_ => self.write_qualified_name(writer, stmt.schema.as_deref(), name),
			},
			Target::Object(object) => {
				let QualifiedName { schema, name } = object.name();
				self.write_qualified_name(writer, schema.as_deref(), name);
				if let ObjectRef::Function { arg_types, .. } = object {
					self.write_arg_types(writer, arg_types);
				}
			}
		}
	}

	/// Write the grantee, leaving `PUBLIC` unquoted
	fn write_grantee(&self, writer: &mut SqlWriter, grantee: &str) {
		if grantee.eq_ignore_ascii_case(PUBLIC) {
			writer.push(grantee);
		} else {
			writer.push_identifier(grantee, |s| self.quote_identifier(s).into_owned());
		}
	}
}

impl StatementBuilder for PostgresStatementBuilder {
	fn quote_identifier<'a>(&self, ident: &'a str) -> Cow<'a, str> {
		quoting::quote_identifier(ident)
	}

	fn build_privilege_statement(&self, stmt: &PrivilegeStatement) -> StatementResult<String> {
		let tokens = stmt.privileges.tokens().inspect_err(|err| {
			tracing::warn!(action = %stmt.action, error = %err, "rejecting privilege statement");
		})?;
		if tokens.is_empty() {
			return Err(self.invalid_argument(stmt, "at least one privilege is required.".to_string()));
		}
		self.validate_target(stmt)?;

		let mut writer = SqlWriter::new();

		// GRANT / REVOKE [GRANT OPTION FOR]
		writer.push(stmt.action.as_sql());
		if stmt.grant_option && stmt.action == Action::Revoke {
			writer.push_keyword("GRANT OPTION FOR");
		}
		writer.push_space();

		// Privileges
		writer.push_list(&tokens, ", ", |w, token| {
			self.write_privilege(w, token, stmt.quote_subname);
		});

		// ON clause
		writer.push_keyword("ON");
		writer.push_keyword(stmt.object_type.as_sql());
		writer.push_space();
		self.write_target(&mut writer, stmt);

		// TO / FROM clause
		writer.push_keyword(stmt.action.preposition());
		writer.push_space();
		self.write_grantee(&mut writer, &stmt.grantee);

		// WITH GRANT OPTION
		if stmt.grant_option && stmt.action == Action::Grant {
			writer.push_keyword("WITH GRANT OPTION");
		}

		let sql = writer.into_string();
		tracing::debug!(sql = %sql, "built privilege statement");
		Ok(sql)
	}
}
