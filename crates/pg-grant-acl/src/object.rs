//! Grantable PostgreSQL object types

use std::fmt;
use std::str::FromStr;

use crate::error::AclError;

/// PostgreSQL object types that carry an ACL
///
/// Each variant maps to the keyword used in `GRANT ... ON <KEYWORD>` and to a
/// fixed set of ACL privilege codes (see [`acl_codes`](crate::acl_codes)).
///
/// # Examples
///
/// ```
/// use pg_grant_acl::ObjectType;
///
/// assert_eq!(ObjectType::ForeignDataWrapper.as_sql(), "FOREIGN DATA WRAPPER");
/// assert_eq!("large object".parse::<ObjectType>().unwrap(), ObjectType::LargeObject);
/// assert!("view".parse::<ObjectType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ObjectType {
	/// Tables, views and their columns
	Table,
	/// Sequences
	Sequence,
	/// Functions and procedures
	Function,
	/// Procedural languages
	Language,
	/// Schemas
	Schema,
	/// Databases
	Database,
	/// Tablespaces
	Tablespace,
	/// Data types
	Type,
	/// Domains
	Domain,
	/// Foreign data wrappers
	ForeignDataWrapper,
	/// Foreign servers
	ForeignServer,
	/// Foreign tables
	ForeignTable,
	/// Large objects
	LargeObject,
	/// Configuration parameters
	Parameter,
}

impl ObjectType {
	/// Every object type, in declaration order.
	pub const ALL: [ObjectType; 14] = [
		ObjectType::Table,
		ObjectType::Sequence,
		ObjectType::Function,
		ObjectType::Language,
		ObjectType::Schema,
		ObjectType::Database,
		ObjectType::Tablespace,
		ObjectType::Type,
		ObjectType::Domain,
		ObjectType::ForeignDataWrapper,
		ObjectType::ForeignServer,
		ObjectType::ForeignTable,
		ObjectType::LargeObject,
		ObjectType::Parameter,
	];

	/// Returns the SQL keyword for this object type
	///
	/// # Examples
	///
	/// ```
	/// use pg_grant_acl::ObjectType;
	///
	/// assert_eq!(ObjectType::Table.as_sql(), "TABLE");
	/// assert_eq!(ObjectType::LargeObject.as_sql(), "LARGE OBJECT");
	/// ```
	pub fn as_sql(&self) -> &'static str {
		match self {
			ObjectType::Table => "TABLE",
			ObjectType::Sequence => "SEQUENCE",
			ObjectType::Function => "FUNCTION",
			ObjectType::Language => "LANGUAGE",
			ObjectType::Schema => "SCHEMA",
			ObjectType::Database => "DATABASE",
			ObjectType::Tablespace => "TABLESPACE",
			ObjectType::Type => "TYPE",
			ObjectType::Domain => "DOMAIN",
			ObjectType::ForeignDataWrapper => "FOREIGN DATA WRAPPER",
			ObjectType::ForeignServer => "FOREIGN SERVER",
			ObjectType::ForeignTable => "FOREIGN TABLE",
			ObjectType::LargeObject => "LARGE OBJECT",
			ObjectType::Parameter => "PARAMETER",
		}
	}

	/// Checks if a GRANT target of this type may be qualified with a schema
	///
	/// # Examples
	///
	/// ```
	/// use pg_grant_acl::ObjectType;
	///
	/// assert!(ObjectType::Sequence.is_schema_qualified());
	/// assert!(!ObjectType::Database.is_schema_qualified());
	/// ```
	pub fn is_schema_qualified(&self) -> bool {
		matches!(
			self,
			ObjectType::Table
				| ObjectType::Sequence
				| ObjectType::Function
				| ObjectType::Type
				| ObjectType::Domain
		)
	}
}

impl fmt::Display for ObjectType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_sql())
	}
}

impl FromStr for ObjectType {
	type Err = AclError;

	/// Parses the SQL keyword, ignoring case and accepting `_` for spaces.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().replace('_', " ").to_ascii_uppercase();
		ObjectType::ALL
			.into_iter()
			.find(|object_type| object_type.as_sql() == normalized)
			.ok_or_else(|| AclError::UnknownType(s.to_string()))
	}
}
