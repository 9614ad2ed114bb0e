//! Objects a privilege statement applies to

use pg_grant_acl::ObjectType;

/// An object name with an optional schema
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedName {
	/// Schema containing the object
	pub schema: Option<String>,
	/// Object name
	pub name: String,
}

impl QualifiedName {
	/// Creates an unqualified name
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			schema: None,
			name: name.into(),
		}
	}

	/// Creates a schema-qualified name
	pub fn with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			schema: Some(schema.into()),
			name: name.into(),
		}
	}
}

/// A reference to a schema object that already knows its own schema
///
/// # Examples
///
/// ```
/// use pg_grant_acl::ObjectType;
/// use pg_grant_query::dcl::ObjectRef;
///
/// let table = ObjectRef::schema_table("s", "users");
/// assert!(table.matches(ObjectType::Table));
/// assert!(!table.matches(ObjectType::Sequence));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ObjectRef {
	/// A table or view
	Table(QualifiedName),
	/// A sequence
	Sequence(QualifiedName),
	/// A type or domain
	Type(QualifiedName),
	/// A function together with its argument types
	Function {
		/// Function name
		name: QualifiedName,
		/// Argument types in declaration order
		arg_types: Vec<String>,
	},
}

impl ObjectRef {
	/// Creates a table reference without a schema
	pub fn table(name: impl Into<String>) -> Self {
		Self::Table(QualifiedName::new(name))
	}

	/// Creates a schema-qualified table reference
	pub fn schema_table(schema: impl Into<String>, name: impl Into<String>) -> Self {
		Self::Table(QualifiedName::with_schema(schema, name))
	}

	/// Creates a sequence reference without a schema
	pub fn sequence(name: impl Into<String>) -> Self {
		Self::Sequence(QualifiedName::new(name))
	}

	/// Creates a schema-qualified sequence reference
	pub fn schema_sequence(schema: impl Into<String>, name: impl Into<String>) -> Self {
		Self::Sequence(QualifiedName::with_schema(schema, name))
	}

	/// Creates a type or domain reference without a schema
	pub fn data_type(name: impl Into<String>) -> Self {
		Self::Type(QualifiedName::new(name))
	}

	/// Creates a schema-qualified type or domain reference
	pub fn schema_data_type(schema: impl Into<String>, name: impl Into<String>) -> Self {
		Self::Type(QualifiedName::with_schema(schema, name))
	}

	/// Creates a function reference without a schema
	///
	/// Pass an empty collection for a function without arguments.
	///
	/// # Examples
	///
	/// ```
	/// use pg_grant_acl::ObjectType;
	/// use pg_grant_query::dcl::{ObjectRef, grant};
	///
	/// let stmt = grant("EXECUTE", ObjectType::Function, ObjectRef::function("now", Vec::<String>::new()), "bob");
	/// assert_eq!(stmt.to_sql().unwrap(), "GRANT EXECUTE ON FUNCTION now() TO bob");
	/// ```
	pub fn function<I, S>(name: impl Into<String>, arg_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Function {
			name: QualifiedName::new(name),
			arg_types: arg_types.into_iter().map(Into::into).collect(),
		}
	}

	/// Creates a schema-qualified function reference
	pub fn schema_function<I, S>(
		schema: impl Into<String>,
		name: impl Into<String>,
		arg_types: I,
	) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Function {
			name: QualifiedName::with_schema(schema, name),
			arg_types: arg_types.into_iter().map(Into::into).collect(),
		}
	}

	/// Returns the object's name
	pub fn name(&self) -> &QualifiedName {
		match self {
			Self::Table(name) | Self::Sequence(name) | Self::Type(name) => name,
			Self::Function { name, .. } => name,
		}
	}

	/// Checks if this reference can be the target of a statement on `object_type`
	pub fn matches(&self, object_type: ObjectType) -> bool {
		matches!(
			(self, object_type),
			(Self::Table(_), ObjectType::Table)
				| (Self::Sequence(_), ObjectType::Sequence)
				| (Self::Type(_), ObjectType::Type | ObjectType::Domain)
				| (Self::Function { .. }, ObjectType::Function)
		)
	}
}

/// The object a GRANT or REVOKE names after `ON <TYPE>`
///
/// A bare name is combined with the statement's schema and argument types at
/// render time; a structured [`ObjectRef`] carries its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Target {
	/// An object name
	Name(String),
	/// A structured reference
	Object(ObjectRef),
}

impl From<&str> for Target {
	fn from(name: &str) -> Self {
		Self::Name(name.to_string())
	}
}

impl From<String> for Target {
	fn from(name: String) -> Self {
		Self::Name(name)
	}
}

impl From<&String> for Target {
	fn from(name: &String) -> Self {
		Self::Name(name.clone())
	}
}

impl From<ObjectRef> for Target {
	fn from(object: ObjectRef) -> Self {
		Self::Object(object)
	}
}
