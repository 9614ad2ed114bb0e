//! Implicit privileges of objects whose ACL is NULL

use crate::object::ObjectType;
use crate::privileges::{PUBLIC, Privileges};

/// Privileges PUBLIC holds on a freshly created object of this type.
fn public_defaults(object_type: ObjectType) -> &'static [&'static str] {
	match object_type {
		ObjectType::Database => &["CONNECT", "TEMPORARY"],
		ObjectType::Function => &["EXECUTE"],
		ObjectType::Language => &["USAGE"],
		// Types grant USAGE to PUBLIC even though the GRANT docs omit it.
		ObjectType::Type => &["USAGE"],
		_ => &[],
	}
}

/// Returns the privileges PostgreSQL assumes when an object's ACL is NULL
///
/// The owner always comes first, holding `ALL` as granted by itself. Databases,
/// functions, languages and types add a second entry for PUBLIC.
///
/// # Examples
///
/// ```
/// use pg_grant_acl::{ObjectType, Privileges, get_default_privileges};
///
/// assert_eq!(
///     get_default_privileges(ObjectType::Table, "alice"),
///     vec![Privileges::new("alice", "alice", ["ALL"], Vec::<String>::new())]
/// );
///
/// let defaults = get_default_privileges(ObjectType::Database, "alice");
/// assert_eq!(defaults[1].grantee, "PUBLIC");
/// assert_eq!(defaults[1].privs, vec!["CONNECT", "TEMPORARY"]);
/// ```
pub fn get_default_privileges(object_type: ObjectType, owner: &str) -> Vec<Privileges> {
	let mut defaults = vec![Privileges::new(owner, owner, ["ALL"], Vec::<String>::new())];

	let public = public_defaults(object_type);
	if !public.is_empty() {
		defaults.push(Privileges::new(
			PUBLIC,
			owner,
			public.iter().copied(),
			Vec::<String>::new(),
		));
	}

	defaults
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ObjectType::Database, &["CONNECT", "TEMPORARY"])]
	#[case(ObjectType::Function, &["EXECUTE"])]
	#[case(ObjectType::Language, &["USAGE"])]
	#[case(ObjectType::Type, &["USAGE"])]
	fn test_public_defaults(#[case] object_type: ObjectType, #[case] expected: &[&str]) {
		let defaults = get_default_privileges(object_type, "alice");

		assert_eq!(defaults.len(), 2);
		assert_eq!(defaults[1], Privileges::new("PUBLIC", "alice", expected.iter().copied(), Vec::<String>::new()));
	}

	#[rstest]
	#[case(ObjectType::Table)]
	#[case(ObjectType::Sequence)]
	#[case(ObjectType::Schema)]
	#[case(ObjectType::Tablespace)]
	#[case(ObjectType::Domain)]
	#[case(ObjectType::ForeignDataWrapper)]
	#[case(ObjectType::ForeignServer)]
	#[case(ObjectType::ForeignTable)]
	#[case(ObjectType::LargeObject)]
	#[case(ObjectType::Parameter)]
	fn test_owner_only(#[case] object_type: ObjectType) {
		assert_eq!(
			get_default_privileges(object_type, "alice"),
			vec![Privileges::new("alice", "alice", ["ALL"], Vec::<String>::new())]
		);
	}

	#[test]
	fn test_owner_entry_comes_first() {
		for object_type in ObjectType::ALL {
			let defaults = get_default_privileges(object_type, "owner");
			assert_eq!(defaults[0].grantee, "owner");
			assert_eq!(defaults[0].grantor, "owner");
			assert_eq!(defaults[0].privs, vec!["ALL"]);
		}
	}
}
