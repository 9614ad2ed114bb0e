//! ACL item parser
//!
//! Decodes `grantee=codes/grantor` items as PostgreSQL prints them in
//! `aclitem[]` columns and in `pg_dump` output.

use crate::defaults::get_default_privileges;
use crate::error::{AclError, AclResult};
use crate::object::ObjectType;
use crate::privilege::acl_codes;
use crate::privileges::{PUBLIC, Privileges};

/// Reads a role name from the start of `acl`
///
/// Unquoted characters are copied verbatim. A double-quoted segment is copied
/// with `""` collapsed to a single `"`. Scanning stops before `terminator`
/// (outside quotes) or at the end of the input when `terminator` is `None`.
///
/// Returns the byte offset where scanning stopped together with the name.
fn read_acl_username(acl: &str, terminator: Option<char>) -> AclResult<(usize, String)> {
	let mut output = String::new();
	let mut chars = acl.char_indices().peekable();

	while let Some(&(pos, c)) = chars.peek() {
		if Some(c) == terminator {
			return Ok((pos, output));
		}
		chars.next();

		if c != '"' {
			output.push(c);
			continue;
		}

		loop {
			match chars.next() {
				Some((_, '"')) => {
					if matches!(chars.peek(), Some((_, '"'))) {
						chars.next();
						output.push('"');
					} else {
						break;
					}
				}
				Some((_, quoted)) => output.push(quoted),
				None => return Err(AclError::Syntax("unterminated quote.".to_string())),
			}
		}
	}

	Ok((acl.len(), output))
}

fn with_subname(keyword: &str, subname: Option<&str>) -> String {
	match subname {
		Some(subname) => format!("{keyword} ({subname})"),
		None => keyword.to_string(),
	}
}

/// Parses a single ACL item such as `alice=arwdDxt/bob`
///
/// With an `object_type`, only the codes that type can hold are recognized and
/// a grantee holding all of them collapses to `["ALL"]`. Without one, every
/// known code is recognized and no collapse happens. `subname` is appended to
/// each keyword as `KEYWORD (subname)`; for TABLE it also restricts decoding to
/// the column-level codes.
///
/// `subname` is copied into the keywords as is. Quote it before splicing the
/// keywords into SQL by hand; the statement builder in `pg-grant-query`
/// quotes it on its own.
///
/// # Errors
///
/// Returns [`AclError::Syntax`] for an unterminated quoted name or when the
/// item lacks its `=` or `/` separator.
///
/// # Examples
///
/// ```
/// use pg_grant_acl::{ObjectType, parse_acl_item};
///
/// let parsed = parse_acl_item("alice=r*w/bob", Some(ObjectType::Sequence), None).unwrap();
/// assert_eq!(parsed.grantee, "alice");
/// assert_eq!(parsed.grantor, "bob");
/// assert_eq!(parsed.privs, vec!["UPDATE"]);
/// assert_eq!(parsed.privswgo, vec!["SELECT"]);
///
/// assert!(parse_acl_item("\"bob=a/alice", None, None).is_err());
/// ```
pub fn parse_acl_item(
	acl_item: &str,
	object_type: Option<ObjectType>,
	subname: Option<&str>,
) -> AclResult<Privileges> {
	let (eq_pos, mut grantee) = read_acl_username(acl_item, Some('='))?;
	if eq_pos == acl_item.len() {
		return Err(AclError::Syntax("missing '='".to_string()));
	}

	if grantee.is_empty() {
		grantee = PUBLIC.to_string();
	}

	let codes_start = eq_pos + 1;
	let slash_pos = acl_item[codes_start..]
		.find('/')
		.map(|offset| codes_start + offset)
		.ok_or_else(|| AclError::Syntax("missing '/'".to_string()))?;
	let (_, grantor) = read_acl_username(&acl_item[slash_pos + 1..], None)?;

	let codes = &acl_item[codes_start..slash_pos];

	let mut privs = Vec::new();
	let mut privswgo = Vec::new();
	let mut all_with_grant_option = object_type.is_some();
	let mut all_without_grant_option = object_type.is_some();

	let column_level = subname.is_some();
	for (code, privilege) in acl_codes(object_type, column_level) {
		let Some(pos) = codes.find(*code) else {
			all_with_grant_option = false;
			all_without_grant_option = false;
			continue;
		};

		let keyword = with_subname(privilege.as_sql(), subname);
		if codes[pos + code.len_utf8()..].starts_with('*') {
			privswgo.push(keyword);
			all_without_grant_option = false;
		} else {
			privs.push(keyword);
			all_with_grant_option = false;
		}
	}

	if all_with_grant_option {
		privs.clear();
		privswgo = vec![with_subname("ALL", subname)];
	} else if all_without_grant_option {
		privs = vec![with_subname("ALL", subname)];
		privswgo.clear();
	}

	tracing::trace!(
		acl_item,
		?object_type,
		grantee = %grantee,
		grantor = %grantor,
		?privs,
		?privswgo,
		"parsed ACL item"
	);

	Ok(Privileges {
		grantee,
		grantor,
		privs,
		privswgo,
	})
}

/// Parses every item of an ACL, preserving order
///
/// # Examples
///
/// ```
/// use pg_grant_acl::{ObjectType, parse_acl};
///
/// let parsed = parse_acl(["alice=X/alice", "=X/alice"], Some(ObjectType::Function), None).unwrap();
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(parsed[1].grantee, "PUBLIC");
/// assert_eq!(parsed[1].privs, vec!["ALL"]);
/// ```
pub fn parse_acl<I, S>(
	acl: I,
	object_type: Option<ObjectType>,
	subname: Option<&str>,
) -> AclResult<Vec<Privileges>>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	acl.into_iter()
		.map(|item| parse_acl_item(item.as_ref(), object_type, subname))
		.collect()
}

/// Parses an ACL column value, falling back to the defaults when it is NULL
///
/// # Examples
///
/// ```
/// use pg_grant_acl::{ObjectType, parse_acl_or_default};
///
/// let defaults = parse_acl_or_default::<&str>(None, ObjectType::Language, "alice", None).unwrap();
/// assert_eq!(defaults.len(), 2);
///
/// let acl = vec!["alice=U/alice".to_string()];
/// let explicit = parse_acl_or_default(Some(acl.as_slice()), ObjectType::Language, "alice", None).unwrap();
/// assert_eq!(explicit.len(), 1);
/// ```
pub fn parse_acl_or_default<S: AsRef<str>>(
	acl: Option<&[S]>,
	object_type: ObjectType,
	owner: &str,
	subname: Option<&str>,
) -> AclResult<Vec<Privileges>> {
	match acl {
		Some(items) => parse_acl(items, Some(object_type), subname),
		None => Ok(get_default_privileges(object_type, owner)),
	}
}
