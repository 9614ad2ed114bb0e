//! Catalog descriptors
//!
//! Plain records describing a catalog object together with its raw ACL, in
//! the shape a `pg_class`/`pg_proc`/`pg_attribute` query returns them. An
//! `acl` of `None` stands for a NULL ACL column.

use crate::error::AclResult;
use crate::object::ObjectType;
use crate::parse::{parse_acl, parse_acl_or_default};
use crate::privileges::Privileges;

/// PostgreSQL object identifier.
pub type Oid = u32;

/// A database object without a schema: language, schema, database, tablespace
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationInfo {
	/// Row identifier
	pub oid: Oid,
	/// Name of the object
	pub name: String,
	/// Owner of the object
	pub owner: String,
	/// Access control list
	pub acl: Option<Vec<String>>,
}

impl RelationInfo {
	/// Decodes the ACL, or returns the defaults for `object_type` when it is NULL
	pub fn privileges(&self, object_type: ObjectType) -> AclResult<Vec<Privileges>> {
		parse_acl_or_default(self.acl.as_deref(), object_type, &self.owner, None)
	}
}

/// A schema-scoped object: table, view, sequence, type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaRelationInfo {
	/// Row identifier
	pub oid: Oid,
	/// Schema containing the object
	pub schema: String,
	/// Name of the object
	pub name: String,
	/// Owner of the object
	pub owner: String,
	/// Access control list
	pub acl: Option<Vec<String>>,
}

impl SchemaRelationInfo {
	/// Decodes the ACL, or returns the defaults for `object_type` when it is NULL
	///
	/// # Examples
	///
	/// ```
	/// use pg_grant_acl::{ObjectType, SchemaRelationInfo};
	///
	/// let table = SchemaRelationInfo {
	///     oid: 16384,
	///     schema: "public".to_string(),
	///     name: "accounts".to_string(),
	///     owner: "alice".to_string(),
	///     acl: None,
	/// };
	/// let privileges = table.privileges(ObjectType::Table).unwrap();
	/// assert_eq!(privileges.len(), 1);
	/// assert_eq!(privileges[0].privs, vec!["ALL"]);
	/// ```
	pub fn privileges(&self, object_type: ObjectType) -> AclResult<Vec<Privileges>> {
		parse_acl_or_default(self.acl.as_deref(), object_type, &self.owner, None)
	}
}

/// A function or procedure
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionInfo {
	/// Row identifier
	pub oid: Oid,
	/// Schema containing the function
	pub schema: String,
	/// Name of the function
	pub name: String,
	/// Owner of the function
	pub owner: String,
	/// Access control list
	pub acl: Option<Vec<String>>,
	/// Canonical names of the argument types, in declaration order
	pub arg_types: Vec<String>,
}

impl FunctionInfo {
	/// Decodes the ACL, or returns the function defaults when it is NULL
	pub fn privileges(&self) -> AclResult<Vec<Privileges>> {
		parse_acl_or_default(self.acl.as_deref(), ObjectType::Function, &self.owner, None)
	}
}

/// A table column
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnInfo {
	/// Identifier of the table
	pub table_oid: Oid,
	/// Schema containing the table
	pub schema: String,
	/// Name of the table
	pub table: String,
	/// Name of the column
	pub column: String,
	/// Owner of the table
	pub owner: String,
	/// Column access control list
	pub acl: Option<Vec<String>>,
}

impl ColumnInfo {
	/// Decodes the column ACL as column-level TABLE privileges
	///
	/// Each keyword carries the column name, e.g. `SELECT (email)`. A NULL column
	/// ACL means no column grants exist; table-wide privileges live on the table.
	///
	/// # Examples
	///
	/// ```
	/// use pg_grant_acl::ColumnInfo;
	///
	/// let column = ColumnInfo {
	///     table_oid: 16384,
	///     schema: "public".to_string(),
	///     table: "accounts".to_string(),
	///     column: "email".to_string(),
	///     owner: "alice".to_string(),
	///     acl: Some(vec!["bob=r/alice".to_string()]),
	/// };
	/// assert_eq!(column.privileges().unwrap()[0].privs, vec!["SELECT (email)"]);
	/// ```
	pub fn privileges(&self) -> AclResult<Vec<Privileges>> {
		match &self.acl {
			Some(acl) => parse_acl(acl, Some(ObjectType::Table), Some(&self.column)),
			None => Ok(Vec::new()),
		}
	}
}

/// A configuration parameter with an entry in `pg_parameter_acl`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterInfo {
	/// Row identifier
	pub oid: Oid,
	/// Name of the parameter
	pub name: String,
	/// Access control list
	pub acl: Option<Vec<String>>,
}

impl ParameterInfo {
	/// Decodes the parameter ACL; a NULL ACL yields no grants
	pub fn privileges(&self) -> AclResult<Vec<Privileges>> {
		match &self.acl {
			Some(acl) => parse_acl(acl, Some(ObjectType::Parameter), None),
			None => Ok(Vec::new()),
		}
	}
}
