//! The decoded form of a single ACL item

/// Grantee name used for privileges granted to every role.
pub const PUBLIC: &str = "PUBLIC";

/// Privileges held by one grantee on one object, as granted by one grantor
///
/// `privs` holds privileges without grant option and `privswgo` those held
/// with grant option. Each entry is a keyword such as `"SELECT"`, optionally
/// followed by a parenthesized column (`"SELECT (id)"`). When a grantee holds
/// every privilege applicable to the object type, the list collapses to
/// `["ALL"]`.
///
/// # Examples
///
/// ```
/// use pg_grant_acl::Privileges;
///
/// let privileges = Privileges::new("alice", "bob", ["SELECT"], ["UPDATE (name)"]);
/// assert_eq!(privileges.grantee, "alice");
/// assert_eq!(privileges.privswgo, vec!["UPDATE (name)"]);
/// assert!(!privileges.is_public());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Privileges {
	/// Role receiving the privileges, or [`PUBLIC`]
	pub grantee: String,
	/// Role that granted the privileges
	pub grantor: String,
	/// Privileges held without grant option
	#[cfg_attr(feature = "serde", serde(default))]
	pub privs: Vec<String>,
	/// Privileges held with grant option
	#[cfg_attr(feature = "serde", serde(default))]
	pub privswgo: Vec<String>,
}

impl Privileges {
	/// Creates a new `Privileges` value
	pub fn new<P, G>(
		grantee: impl Into<String>,
		grantor: impl Into<String>,
		privs: P,
		privswgo: G,
	) -> Self
	where
		P: IntoIterator,
		P::Item: Into<String>,
		G: IntoIterator,
		G::Item: Into<String>,
	{
		Self {
			grantee: grantee.into(),
			grantor: grantor.into(),
			privs: privs.into_iter().map(Into::into).collect(),
			privswgo: privswgo.into_iter().map(Into::into).collect(),
		}
	}

	/// Checks if the grantee is the PUBLIC pseudo-role
	pub fn is_public(&self) -> bool {
		self.grantee == PUBLIC
	}

	/// Checks if no privilege is held at all
	pub fn is_empty(&self) -> bool {
		self.privs.is_empty() && self.privswgo.is_empty()
	}
}
