//! ACL parser property-based tests
//!
//! Builds synthetic ACL items from random subsets of each object type's codes
//! and checks the decoded privileges against the code table.

use proptest::prelude::*;

use pg_grant_acl::{ObjectType, acl_codes, parse_acl_item};

const MAX_CODES: usize = 14;

struct Synthetic {
	item: String,
	privs: Vec<String>,
	privswgo: Vec<String>,
}

fn synthesize(
	object_type: Option<ObjectType>,
	present: &[bool],
	starred: &[bool],
	order: &[u32],
) -> Synthetic {
	let codes = acl_codes(object_type, false);

	let mut shuffled = Vec::new();
	let mut privs = Vec::new();
	let mut privswgo = Vec::new();
	for (i, (code, privilege)) in codes.iter().enumerate() {
		if !present[i] {
			continue;
		}
		let mut text = code.to_string();
		if starred[i] {
			text.push('*');
			privswgo.push(privilege.as_sql().to_string());
		} else {
			privs.push(privilege.as_sql().to_string());
		}
		shuffled.push((order[i], text));
	}
	shuffled.sort();

	if object_type.is_some() && privswgo.len() == codes.len() {
		privswgo = vec!["ALL".to_string()];
	} else if object_type.is_some() && privs.len() == codes.len() {
		privs = vec!["ALL".to_string()];
	}

	let codes: String = shuffled.into_iter().map(|(_, text)| text).collect();
	Synthetic {
		item: format!("bob={codes}/alice"),
		privs,
		privswgo,
	}
}

fn object_type_strategy() -> impl Strategy<Value = Option<ObjectType>> {
	prop_oneof![
		Just(None),
		prop::sample::select(ObjectType::ALL.to_vec()).prop_map(Some),
	]
}

proptest! {
	/// Test: decoded privileges follow the code table order
	///
	/// Category: Property
	/// Verifies that the position of codes inside an item never changes the result.
	#[test]
	fn prop_parse_ignores_code_order(
		object_type in object_type_strategy(),
		present in prop::collection::vec(any::<bool>(), MAX_CODES),
		starred in prop::collection::vec(any::<bool>(), MAX_CODES),
		order in prop::collection::vec(any::<u32>(), MAX_CODES),
	) {
		let expected = synthesize(object_type, &present, &starred, &order);

		let parsed = parse_acl_item(&expected.item, object_type, None).unwrap();

		prop_assert_eq!(parsed.grantee, "bob");
		prop_assert_eq!(parsed.grantor, "alice");
		prop_assert_eq!(parsed.privs, expected.privs);
		prop_assert_eq!(parsed.privswgo, expected.privswgo);
	}

	/// Test: untyped parsing never collapses to ALL
	///
	/// Category: Property
	/// Verifies that full code coverage without an object type stays itemized.
	#[test]
	fn prop_untyped_never_collapses(starred in prop::collection::vec(any::<bool>(), MAX_CODES)) {
		let present = vec![true; MAX_CODES];
		let order: Vec<u32> = (0..MAX_CODES as u32).collect();
		let expected = synthesize(None, &present, &starred, &order);

		let parsed = parse_acl_item(&expected.item, None, None).unwrap();

		prop_assert!(!parsed.privs.iter().any(|p| p == "ALL"));
		prop_assert!(!parsed.privswgo.iter().any(|p| p == "ALL"));
		prop_assert_eq!(parsed.privs.len() + parsed.privswgo.len(), MAX_CODES);
	}

	/// Test: role names survive quoting
	///
	/// Category: Property
	/// Verifies that any name quoted the way PostgreSQL prints it decodes back.
	#[test]
	fn prop_quoted_grantee_round_trip(name in "[a-zA-Z0-9 =/\"*]{1,16}") {
		let quoted = format!("\"{}\"", name.replace('"', "\"\""));
		let item = format!("{quoted}=r/{quoted}");

		let parsed = parse_acl_item(&item, Some(ObjectType::Table), None).unwrap();

		prop_assert_eq!(&parsed.grantee, &name);
		prop_assert_eq!(&parsed.grantor, &name);
		prop_assert_eq!(parsed.privs, vec!["SELECT".to_string()]);
	}
}
