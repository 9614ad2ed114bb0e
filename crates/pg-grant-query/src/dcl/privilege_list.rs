//! Privilege tokens of a GRANT or REVOKE statement

use std::sync::LazyLock;

use regex::Regex;

use pg_grant_acl::Privilege;

use crate::error::{StatementError, StatementResult};

static PRIVILEGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^([A-Z]+(?: [A-Z]+)?)(?:\s+\((.*)\))?$")
		.expect("PRIVILEGE_REGEX: invalid regex pattern")
});

/// A privilege token split into its keyword and optional column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivilegeToken<'a> {
	/// The privilege the keyword names
	pub privilege: Privilege,
	/// Privilege keyword, e.g. `SELECT`
	pub keyword: &'a str,
	/// Text between the parentheses, e.g. `id` in `SELECT (id)`
	pub subname: Option<&'a str>,
}

impl<'a> PrivilegeToken<'a> {
	/// Splits a token such as `SELECT` or `UPDATE (name)`
	///
	/// # Errors
	///
	/// Returns [`StatementError::InvalidPrivilege`] when the token is not a
	/// privilege keyword optionally followed by a parenthesized subname.
	///
	/// # Examples
	///
	/// ```
	/// use pg_grant_acl::Privilege;
	/// use pg_grant_query::dcl::PrivilegeToken;
	///
	/// let token = PrivilegeToken::parse("UPDATE (name)").unwrap();
	/// assert_eq!(token.privilege, Privilege::Update);
	/// assert_eq!(token.keyword, "UPDATE");
	/// assert_eq!(token.subname, Some("name"));
	///
	/// assert!(PrivilegeToken::parse("BLAH").is_err());
	/// ```
	pub fn parse(token: &'a str) -> StatementResult<Self> {
		let captures = PRIVILEGE_REGEX
			.captures(token)
			.ok_or_else(|| StatementError::InvalidPrivilege(token.to_string()))?;

		let keyword = captures
			.get(1)
			.map(|m| m.as_str())
			.ok_or_else(|| StatementError::InvalidPrivilege(token.to_string()))?;
		let privilege = keyword
			.parse::<Privilege>()
			.map_err(|_| StatementError::InvalidPrivilege(token.to_string()))?;
		let subname = captures.get(2).map(|m| m.as_str());

		Ok(Self {
			privilege,
			keyword,
			subname,
		})
	}
}

/// Ordered privilege tokens of a statement
///
/// Tokens are kept as given and only validated when the statement is
/// rendered. The string `"ALL"` converts to the single token `ALL`.
///
/// # Examples
///
/// ```
/// use pg_grant_acl::Privilege;
/// use pg_grant_query::dcl::PrivilegeList;
///
/// assert_eq!(PrivilegeList::from("ALL").as_slice(), ["ALL"]);
/// assert_eq!(
///     PrivilegeList::from(vec![Privilege::Select, Privilege::Insert]).as_slice(),
///     ["SELECT", "INSERT"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PrivilegeList(Vec<String>);

impl PrivilegeList {
	/// Creates a list from privilege tokens
	pub fn new<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(tokens.into_iter().map(Into::into).collect())
	}

	/// The `ALL` privilege
	pub fn all() -> Self {
		Self(vec![Privilege::All.as_sql().to_string()])
	}

	/// Returns the tokens
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// Iterates over the tokens
	pub fn iter(&self) -> std::slice::Iter<'_, String> {
		self.0.iter()
	}

	/// Number of tokens
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Checks if the list holds no tokens
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Splits every token, failing on the first invalid one
	pub fn tokens(&self) -> StatementResult<Vec<PrivilegeToken<'_>>> {
		self.0.iter().map(|token| PrivilegeToken::parse(token)).collect()
	}

	/// Consumes the list and returns the tokens
	pub fn into_inner(self) -> Vec<String> {
		self.0
	}
}

impl<'a> IntoIterator for &'a PrivilegeList {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl From<&str> for PrivilegeList {
	fn from(token: &str) -> Self {
		Self(vec![token.to_string()])
	}
}

impl From<String> for PrivilegeList {
	fn from(token: String) -> Self {
		Self(vec![token])
	}
}

impl From<Vec<String>> for PrivilegeList {
	fn from(tokens: Vec<String>) -> Self {
		Self(tokens)
	}
}

impl From<&[String]> for PrivilegeList {
	fn from(tokens: &[String]) -> Self {
		Self(tokens.to_vec())
	}
}

impl From<&Vec<String>> for PrivilegeList {
	fn from(tokens: &Vec<String>) -> Self {
		Self(tokens.clone())
	}
}

impl From<Vec<&str>> for PrivilegeList {
	fn from(tokens: Vec<&str>) -> Self {
		Self::new(tokens)
	}
}

impl From<&[&str]> for PrivilegeList {
	fn from(tokens: &[&str]) -> Self {
		Self::new(tokens.iter().copied())
	}
}

impl<const N: usize> From<[&str; N]> for PrivilegeList {
	fn from(tokens: [&str; N]) -> Self {
		Self::new(tokens)
	}
}

impl From<Privilege> for PrivilegeList {
	fn from(privilege: Privilege) -> Self {
		Self(vec![privilege.as_sql().to_string()])
	}
}

impl From<Vec<Privilege>> for PrivilegeList {
	fn from(privileges: Vec<Privilege>) -> Self {
		Self::new(privileges.iter().map(Privilege::as_sql))
	}
}

impl<S: Into<String>> FromIterator<S> for PrivilegeList {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter)
	}
}
