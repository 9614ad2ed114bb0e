//! # pg-grant
//!
//! Read PostgreSQL access control lists and turn them back into GRANT and
//! REVOKE statements.
//!
//! ## Crates
//!
//! - [`acl`] (`pg-grant-acl`): ACL item parser, privilege code table,
//!   default privileges and catalog descriptors
//! - [`query`] (`pg-grant-query`): statement values, identifier quoting and
//!   the PostgreSQL renderer
//!
//! ## Feature Flags
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for the privilege model and
//!   [`StatementOptions`]
//!
//! ## Quick Example
//!
//! ```rust
//! use pg_grant::prelude::*;
//!
//! # fn main() -> pg_grant::Result<()> {
//! let privileges = parse_acl_item("bob=r*w/alice", Some(ObjectType::Table), None)?;
//!
//! let mut sql = Vec::new();
//! for stmt in grant_statements(&privileges, ObjectType::Table, "accounts", &StatementOptions::new()) {
//!     sql.push(stmt.to_sql()?);
//! }
//!
//! assert_eq!(
//!     sql,
//!     [
//!         "GRANT UPDATE ON TABLE accounts TO bob",
//!         "GRANT SELECT ON TABLE accounts TO bob WITH GRANT OPTION",
//!     ]
//! );
//! # Ok(())
//! # }
//! ```

pub mod acl;
pub mod error;
pub mod query;

pub use error::{Error, Result};

// Re-export the privilege model
pub use pg_grant_acl::{
	AclError, ObjectType, PUBLIC, Privilege, Privileges, get_default_privileges, parse_acl,
	parse_acl_item, parse_acl_or_default,
};

// Re-export statements
pub use pg_grant_query::{
	Action, ObjectRef, PrivilegeList, PrivilegeStatement, StatementError, StatementOptions, Target,
	grant, grant_statements, revoke, revoke_statements,
};

pub mod prelude {
	pub use crate::{
		Action,
		Error,
		ObjectRef,
		ObjectType,
		Privilege,
		PrivilegeStatement,
		Privileges,
		StatementOptions,
		Target,
		get_default_privileges,
		grant,
		grant_statements,
		parse_acl,
		parse_acl_item,
		parse_acl_or_default,
		revoke,
		revoke_statements,
	};
}
