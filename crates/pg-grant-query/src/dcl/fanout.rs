//! Statements reproducing or removing decoded privileges

use pg_grant_acl::{ObjectType, Privileges};

use super::{PrivilegeStatement, StatementOptions, Target, grant, revoke};

/// Builds the GRANT statements that recreate `privileges`
///
/// Yields one statement for `privs` using `options` as given, and one for
/// `privswgo` with the grant option forced on. Empty lists are skipped.
///
/// # Examples
///
/// ```
/// use pg_grant_acl::{ObjectType, Privileges};
/// use pg_grant_query::dcl::{StatementOptions, grant_statements};
///
/// let privileges = Privileges::new("alice", "bob", ["SELECT"], ["INSERT"]);
/// let statements = grant_statements(
///     &privileges,
///     ObjectType::Table,
///     "table2",
///     &StatementOptions::new().schema("s"),
/// );
///
/// let sql: Vec<_> = statements.iter().map(|stmt| stmt.to_sql().unwrap()).collect();
/// assert_eq!(
///     sql,
///     [
///         "GRANT SELECT ON TABLE s.table2 TO alice",
///         "GRANT INSERT ON TABLE s.table2 TO alice WITH GRANT OPTION",
///     ]
/// );
/// ```
pub fn grant_statements(
	privileges: &Privileges,
	object_type: ObjectType,
	target: impl Into<Target>,
	options: &StatementOptions,
) -> Vec<PrivilegeStatement> {
	let target = target.into();
	let mut statements = Vec::with_capacity(2);

	if !privileges.privs.is_empty() {
		statements.push(
			grant(&privileges.privs, object_type, target.clone(), &privileges.grantee)
				.options(options),
		);
	}

	if !privileges.privswgo.is_empty() {
		statements.push(
			grant(&privileges.privswgo, object_type, target, &privileges.grantee)
				.options(options)
				.grant_option(true),
		);
	}

	statements
}

/// Builds the REVOKE statements that remove `privileges`
///
/// Yields one statement for `privs` using `options` as given, and one for
/// `privswgo`. The `privswgo` statement revokes the privileges themselves,
/// not only their grant option.
pub fn revoke_statements(
	privileges: &Privileges,
	object_type: ObjectType,
	target: impl Into<Target>,
	options: &StatementOptions,
) -> Vec<PrivilegeStatement> {
	let target = target.into();
	let mut statements = Vec::with_capacity(2);

	if !privileges.privs.is_empty() {
		statements.push(
			revoke(&privileges.privs, object_type, target.clone(), &privileges.grantee)
				.options(options),
		);
	}

	if !privileges.privswgo.is_empty() {
		statements.push(
			revoke(&privileges.privswgo, object_type, target, &privileges.grantee)
				.options(options)
				.grant_option(false),
		);
	}

	statements
}
