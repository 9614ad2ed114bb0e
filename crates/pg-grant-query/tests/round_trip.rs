//! ACL to SQL integration tests
//!
//! Tests for decoding catalog ACLs and turning the result back into
//! GRANT and REVOKE statements.

use rstest::rstest;

use pg_grant_acl::{
	ColumnInfo, FunctionInfo, ObjectType, SchemaRelationInfo, get_default_privileges, parse_acl,
	parse_acl_item,
};
use pg_grant_query::{ObjectRef, StatementOptions, grant_statements, revoke_statements};

fn render_all(statements: &[pg_grant_query::PrivilegeStatement]) -> Vec<String> {
	statements
		.iter()
		.map(|stmt| stmt.to_sql().unwrap())
		.collect()
}

/// Test regranting a single ACL item
#[rstest]
#[case(
	"alice=arwdDxt/alice",
	ObjectType::Table,
	&["GRANT ALL ON TABLE s.t TO alice"]
)]
#[case(
	"=r*w/alice",
	ObjectType::Table,
	&["GRANT UPDATE ON TABLE s.t TO PUBLIC", "GRANT SELECT ON TABLE s.t TO PUBLIC WITH GRANT OPTION"]
)]
#[case(
	"\"odd=name\"=U*/alice",
	ObjectType::Sequence,
	&["GRANT USAGE ON SEQUENCE s.t TO \"odd=name\" WITH GRANT OPTION"]
)]
#[case(
	"bob=rw*U/alice",
	ObjectType::Sequence,
	&["GRANT SELECT, USAGE ON SEQUENCE s.t TO bob", "GRANT UPDATE ON SEQUENCE s.t TO bob WITH GRANT OPTION"]
)]
fn test_regrant_acl_item(
	#[case] acl_item: &str,
	#[case] object_type: ObjectType,
	#[case] expected: &[&str],
) {
	let privileges = parse_acl_item(acl_item, Some(object_type), None).unwrap();
	let options = StatementOptions::new().schema("s");

	let statements = grant_statements(&privileges, object_type, "t", &options);

	assert_eq!(render_all(&statements), expected);
}

/// Test revoking a parsed ACL item, grant options included
#[test]
fn test_revoke_acl_item() {
	let privileges = parse_acl_item("bob=r*w/alice", Some(ObjectType::Table), None).unwrap();

	let statements = revoke_statements(&privileges, ObjectType::Table, "t", &StatementOptions::new());

	assert_eq!(
		render_all(&statements),
		["REVOKE UPDATE ON TABLE t FROM bob", "REVOKE SELECT ON TABLE t FROM bob"]
	);
}

/// Test revoking only the grant option of privileges held without one
#[test]
fn test_revoke_grant_option_only() {
	let privileges = parse_acl_item("bob=X/alice", Some(ObjectType::Function), None).unwrap();
	let options = StatementOptions::new()
		.grant_option(true)
		.arg_types(Vec::<String>::new());

	let statements = revoke_statements(&privileges, ObjectType::Function, "f", &options);

	assert_eq!(
		render_all(&statements),
		["REVOKE GRANT OPTION FOR ALL ON FUNCTION f() FROM bob"]
	);
}

/// Test regranting column privileges with their column names quoted
#[test]
fn test_regrant_column_acl() {
	let column = ColumnInfo {
		table_oid: 16384,
		schema: "public".to_string(),
		table: "accounts".to_string(),
		column: "user".to_string(),
		owner: "alice".to_string(),
		acl: Some(vec!["bob=r*/alice".to_string(), "carol=rw/alice".to_string()]),
	};

	let sql: Vec<String> = column
		.privileges()
		.unwrap()
		.iter()
		.flat_map(|privileges| {
			grant_statements(
				privileges,
				ObjectType::Table,
				ObjectRef::schema_table(&column.schema, &column.table),
				&StatementOptions::new(),
			)
		})
		.map(|stmt| stmt.to_sql().unwrap())
		.collect();

	assert_eq!(
		sql,
		[
			"GRANT SELECT (\"user\") ON TABLE public.accounts TO bob WITH GRANT OPTION",
			"GRANT SELECT (\"user\"), UPDATE (\"user\") ON TABLE public.accounts TO carol",
		]
	);
}

/// Test that a quoted subname can be carried through without quoting twice
#[test]
fn test_regrant_prequoted_column() {
	let privileges = parse_acl_item("bob=a/alice", Some(ObjectType::Table), Some("\"Email\"")).unwrap();
	let options = StatementOptions::new().quote_subname(false);

	let statements = grant_statements(&privileges, ObjectType::Table, "t", &options);

	assert_eq!(
		render_all(&statements),
		["GRANT INSERT (\"Email\") ON TABLE t TO bob"]
	);
}

/// Test regranting the defaults of a function with a NULL ACL
#[test]
fn test_regrant_function_defaults() {
	let function = FunctionInfo {
		oid: 16500,
		schema: "public".to_string(),
		name: "add".to_string(),
		owner: "alice".to_string(),
		acl: None,
		arg_types: vec!["integer".to_string(), "integer".to_string()],
	};

	let target = ObjectRef::schema_function(&function.schema, &function.name, function.arg_types.clone());
	let sql: Vec<String> = function
		.privileges()
		.unwrap()
		.iter()
		.flat_map(|privileges| {
			grant_statements(privileges, ObjectType::Function, target.clone(), &StatementOptions::new())
		})
		.map(|stmt| stmt.to_sql().unwrap())
		.collect();

	assert_eq!(
		sql,
		[
			"GRANT ALL ON FUNCTION public.add(integer, integer) TO alice",
			"GRANT EXECUTE ON FUNCTION public.add(integer, integer) TO PUBLIC",
		]
	);
}

/// Test that every object type's defaults render to valid statements
#[rstest]
fn test_defaults_render_for_every_type(
	#[values(
		ObjectType::Table,
		ObjectType::Sequence,
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
		ObjectType::Parameter
	)]
	object_type: ObjectType,
) {
	for privileges in get_default_privileges(object_type, "alice") {
		for stmt in grant_statements(&privileges, object_type, "obj", &StatementOptions::new()) {
			let sql = stmt.to_sql().unwrap();
			assert!(sql.starts_with("GRANT "), "{sql}");
			assert!(sql.contains(object_type.as_sql()), "{sql}");
		}
	}
}

/// Test revoking every entry of a table ACL
#[test]
fn test_revoke_whole_table_acl() {
	let table = SchemaRelationInfo {
		oid: 16384,
		schema: "app".to_string(),
		name: "order".to_string(),
		owner: "alice".to_string(),
		acl: Some(vec!["alice=arwdDxt/alice".to_string(), "=r/alice".to_string()]),
	};
	let target = ObjectRef::schema_table(&table.schema, &table.name);

	let sql: Vec<String> = table
		.privileges(ObjectType::Table)
		.unwrap()
		.iter()
		.flat_map(|privileges| {
			revoke_statements(privileges, ObjectType::Table, target.clone(), &StatementOptions::new())
		})
		.map(|stmt| stmt.to_sql().unwrap())
		.collect();

	assert_eq!(
		sql,
		[
			"REVOKE ALL ON TABLE app.\"order\" FROM alice",
			"REVOKE SELECT ON TABLE app.\"order\" FROM PUBLIC",
		]
	);
}

/// Test that untyped parsing keeps individual keywords
#[test]
fn test_untyped_parse_regrants_each_keyword() {
	let parsed = parse_acl(["bob=rwU/alice"], None, None).unwrap();

	let statements = grant_statements(&parsed[0], ObjectType::Sequence, "seq", &StatementOptions::new());

	assert_eq!(
		render_all(&statements),
		["GRANT SELECT, UPDATE, USAGE ON SEQUENCE seq TO bob"]
	);
}
