//! Privilege keywords and the ACL code table

use std::fmt;
use std::str::FromStr;

use crate::error::AclError;
use crate::object::ObjectType;

/// PostgreSQL privilege keywords
///
/// # Examples
///
/// ```
/// use pg_grant_acl::Privilege;
///
/// assert_eq!(Privilege::Temporary.as_sql(), "TEMPORARY");
/// assert_eq!(Privilege::Temporary.code(), Some('T'));
/// assert_eq!(Privilege::All.code(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Privilege {
	/// SELECT (`r`)
	Select,
	/// UPDATE (`w`)
	Update,
	/// INSERT (`a`)
	Insert,
	/// DELETE (`d`)
	Delete,
	/// TRUNCATE (`D`)
	Truncate,
	/// REFERENCES (`x`)
	References,
	/// TRIGGER (`t`)
	Trigger,
	/// EXECUTE (`X`)
	Execute,
	/// USAGE (`U`)
	Usage,
	/// CREATE (`C`)
	Create,
	/// CONNECT (`c`)
	Connect,
	/// TEMPORARY (`T`)
	Temporary,
	/// SET on a configuration parameter (`s`)
	Set,
	/// ALTER SYSTEM on a configuration parameter (`A`)
	AlterSystem,
	/// ALL - every privilege applicable to the object type
	All,
}

impl Privilege {
	/// Returns the SQL keyword for this privilege
	pub fn as_sql(&self) -> &'static str {
		match self {
			Privilege::Select => "SELECT",
			Privilege::Update => "UPDATE",
			Privilege::Insert => "INSERT",
			Privilege::Delete => "DELETE",
			Privilege::Truncate => "TRUNCATE",
			Privilege::References => "REFERENCES",
			Privilege::Trigger => "TRIGGER",
			Privilege::Execute => "EXECUTE",
			Privilege::Usage => "USAGE",
			Privilege::Create => "CREATE",
			Privilege::Connect => "CONNECT",
			Privilege::Temporary => "TEMPORARY",
			Privilege::Set => "SET",
			Privilege::AlterSystem => "ALTER SYSTEM",
			Privilege::All => "ALL",
		}
	}

	/// Returns the single-letter ACL code, or `None` for [`Privilege::All`]
	pub fn code(&self) -> Option<char> {
		let code = match self {
			Privilege::Select => 'r',
			Privilege::Update => 'w',
			Privilege::Insert => 'a',
			Privilege::Delete => 'd',
			Privilege::Truncate => 'D',
			Privilege::References => 'x',
			Privilege::Trigger => 't',
			Privilege::Execute => 'X',
			Privilege::Usage => 'U',
			Privilege::Create => 'C',
			Privilege::Connect => 'c',
			Privilege::Temporary => 'T',
			Privilege::Set => 's',
			Privilege::AlterSystem => 'A',
			Privilege::All => return None,
		};
		Some(code)
	}

	/// Checks if this privilege may be granted on the given object type
	///
	/// # Examples
	///
	/// ```
	/// use pg_grant_acl::{ObjectType, Privilege};
	///
	/// assert!(Privilege::Usage.is_valid_for_object(ObjectType::Sequence));
	/// assert!(!Privilege::Insert.is_valid_for_object(ObjectType::Sequence));
	/// assert!(Privilege::All.is_valid_for_object(ObjectType::Parameter));
	/// ```
	pub fn is_valid_for_object(&self, object_type: ObjectType) -> bool {
		*self == Privilege::All
			|| acl_codes(Some(object_type), false)
				.iter()
				.any(|(_, privilege)| privilege == self)
	}
}

impl fmt::Display for Privilege {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_sql())
	}
}

impl FromStr for Privilege {
	type Err = AclError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"SELECT" => Ok(Privilege::Select),
			"UPDATE" => Ok(Privilege::Update),
			"INSERT" => Ok(Privilege::Insert),
			"DELETE" => Ok(Privilege::Delete),
			"TRUNCATE" => Ok(Privilege::Truncate),
			"REFERENCES" => Ok(Privilege::References),
			"TRIGGER" => Ok(Privilege::Trigger),
			"EXECUTE" => Ok(Privilege::Execute),
			"USAGE" => Ok(Privilege::Usage),
			"CREATE" => Ok(Privilege::Create),
			"CONNECT" => Ok(Privilege::Connect),
			"TEMPORARY" => Ok(Privilege::Temporary),
			"SET" => Ok(Privilege::Set),
			"ALTER SYSTEM" => Ok(Privilege::AlterSystem),
			"ALL" => Ok(Privilege::All),
			_ => Err(AclError::UnknownPrivilege(s.to_string())),
		}
	}
}

/// An ACL code letter paired with the privilege it stands for.
pub type AclCode = (char, Privilege);

const UNTYPED_CODES: &[AclCode] = &[
	('r', Privilege::Select),
	('w', Privilege::Update),
	('a', Privilege::Insert),
	('d', Privilege::Delete),
	('D', Privilege::Truncate),
	('x', Privilege::References),
	('t', Privilege::Trigger),
	('X', Privilege::Execute),
	('U', Privilege::Usage),
	('C', Privilege::Create),
	('c', Privilege::Connect),
	('T', Privilege::Temporary),
	('s', Privilege::Set),
	('A', Privilege::AlterSystem),
];

const TABLE_CODES: &[AclCode] = &[
	('r', Privilege::Select),
	('w', Privilege::Update),
	('a', Privilege::Insert),
	('x', Privilege::References),
	('d', Privilege::Delete),
	('t', Privilege::Trigger),
	('D', Privilege::Truncate),
];

// Columns cannot carry DELETE, TRIGGER or TRUNCATE.
const COLUMN_CODES: &[AclCode] = &[
	('r', Privilege::Select),
	('w', Privilege::Update),
	('a', Privilege::Insert),
	('x', Privilege::References),
];

const SEQUENCE_CODES: &[AclCode] = &[
	('r', Privilege::Select),
	('w', Privilege::Update),
	('U', Privilege::Usage),
];
const FUNCTION_CODES: &[AclCode] = &[('X', Privilege::Execute)];
const USAGE_CODES: &[AclCode] = &[('U', Privilege::Usage)];
const SCHEMA_CODES: &[AclCode] = &[('C', Privilege::Create), ('U', Privilege::Usage)];
const DATABASE_CODES: &[AclCode] = &[
	('C', Privilege::Create),
	('c', Privilege::Connect),
	('T', Privilege::Temporary),
];
const TABLESPACE_CODES: &[AclCode] = &[('C', Privilege::Create)];
const FOREIGN_TABLE_CODES: &[AclCode] = &[('r', Privilege::Select)];
const LARGE_OBJECT_CODES: &[AclCode] = &[('r', Privilege::Select), ('w', Privilege::Update)];
const PARAMETER_CODES: &[AclCode] = &[('s', Privilege::Set), ('A', Privilege::AlterSystem)];

/// Returns the ACL codes recognized for an object type, in output order
///
/// Without an object type every known code is recognized. `column_level`
/// narrows TABLE to the codes a column ACL can hold and is ignored for other
/// types.
///
/// # Examples
///
/// ```
/// use pg_grant_acl::{ObjectType, Privilege, acl_codes};
///
/// let codes: String = acl_codes(Some(ObjectType::Table), false)
///     .iter()
///     .map(|(code, _)| *code)
///     .collect();
/// assert_eq!(codes, "rwaxdtD");
///
/// assert_eq!(acl_codes(Some(ObjectType::Function), false), &[('X', Privilege::Execute)]);
/// assert_eq!(acl_codes(Some(ObjectType::Table), true).len(), 4);
/// ```
pub fn acl_codes(object_type: Option<ObjectType>, column_level: bool) -> &'static [AclCode] {
	let Some(object_type) = object_type else {
		return UNTYPED_CODES;
	};

	match object_type {
		ObjectType::Table if column_level => COLUMN_CODES,
		ObjectType::Table => TABLE_CODES,
		ObjectType::Sequence => SEQUENCE_CODES,
		ObjectType::Function => FUNCTION_CODES,
		ObjectType::Language
		| ObjectType::Type
		| ObjectType::Domain
		| ObjectType::ForeignDataWrapper
		| ObjectType::ForeignServer => USAGE_CODES,
		ObjectType::Schema => SCHEMA_CODES,
		ObjectType::Database => DATABASE_CODES,
		ObjectType::Tablespace => TABLESPACE_CODES,
		ObjectType::ForeignTable => FOREIGN_TABLE_CODES,
		ObjectType::LargeObject => LARGE_OBJECT_CODES,
		ObjectType::Parameter => PARAMETER_CODES,
	}
}
