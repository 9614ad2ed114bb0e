//! Rendering options shared by batches of statements

/// Options applied to GRANT and REVOKE statements
///
/// Deserializes with every field optional, so a settings file only needs to
/// name what differs from the defaults.
///
/// # Examples
///
/// ```
/// use pg_grant_query::dcl::StatementOptions;
///
/// let options = StatementOptions::new().schema("app").arg_types(["integer"]);
/// assert_eq!(options.schema.as_deref(), Some("app"));
/// assert!(options.quote_subname);
/// assert!(!options.grant_option);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatementOptions {
	/// Render `WITH GRANT OPTION` on GRANT, `GRANT OPTION FOR` on REVOKE
	pub grant_option: bool,
	/// Schema qualifying a bare target name
	pub schema: Option<String>,
	/// Function argument types; required for FUNCTION targets given by name
	pub arg_types: Option<Vec<String>>,
	/// Quote column names found in privilege tokens
	pub quote_subname: bool,
}

impl Default for StatementOptions {
	fn default() -> Self {
		Self {
			grant_option: false,
			schema: None,
			arg_types: None,
			quote_subname: true,
		}
	}
}

impl StatementOptions {
	/// Creates the default options
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the grant option flag
	pub fn grant_option(mut self, grant_option: bool) -> Self {
		self.grant_option = grant_option;
		self
	}

	/// Set the schema of bare target names
	pub fn schema(mut self, schema: impl Into<String>) -> Self {
		self.schema = Some(schema.into());
		self
	}

	/// Set the argument types of FUNCTION targets
	///
	/// Pass an empty collection for a function without arguments.
	pub fn arg_types<I, S>(mut self, arg_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.arg_types = Some(arg_types.into_iter().map(Into::into).collect());
		self
	}

	/// Set whether column names inside privilege tokens get quoted
	pub fn quote_subname(mut self, quote_subname: bool) -> Self {
		self.quote_subname = quote_subname;
		self
	}
}
