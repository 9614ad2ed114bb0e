//! SQL Writer helper for constructing SQL strings
//!
//! This module provides `SqlWriter` type which helps build SQL strings
//! with proper keyword spacing and identifier escaping.

/// SQL Writer for constructing SQL strings
///
/// # Examples
///
/// ```
/// use pg_grant_query::backend::SqlWriter;
///
/// let mut writer = SqlWriter::new();
/// writer.push("GRANT");
/// writer.push_space();
/// writer.push_list(["SELECT", "INSERT"], ", ", |w, privilege| w.push(privilege));
/// writer.push_keyword("ON TABLE");
/// writer.push_space();
/// writer.push_identifier("user", |s| format!("\"{}\"", s));
///
/// assert_eq!(writer.into_string(), "GRANT SELECT, INSERT ON TABLE \"user\"");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqlWriter {
	/// The SQL string being constructed
	sql: String,
}

impl SqlWriter {
	/// Create a new SQL writer
	pub fn new() -> Self {
		Self { sql: String::new() }
	}

	/// Push a string to SQL
	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Push a space to SQL
	pub fn push_space(&mut self) {
		if !self.sql.is_empty() && !self.sql.ends_with(' ') {
			self.sql.push(' ');
		}
	}

	/// Push an identifier (escaped)
	///
	/// # Arguments
	///
	/// * `ident` - The identifier to push
	/// * `escape_fn` - Function to escape identifier
	pub fn push_identifier<F>(&mut self, ident: &str, escape_fn: F)
	where
		F: FnOnce(&str) -> String,
	{
		self.sql.push_str(&escape_fn(ident));
	}

	/// Push a keyword (with automatic spacing)
	pub fn push_keyword(&mut self, keyword: &str) {
		self.push_space();
		self.sql.push_str(keyword);
	}

	/// Push a list of items with a separator
	///
	/// # Arguments
	///
	/// * `items` - Iterator of items
	/// * `separator` - Separator string between items
	/// * `f` - Function to write each item
	pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F)
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T),
	{
		let mut first = true;
		for item in items {
			if !first {
				self.sql.push_str(separator);
			}
			f(self, item);
			first = false;
		}
	}

	/// Get current SQL string
	pub fn sql(&self) -> &str {
		&self.sql
	}

	/// Check if SQL is empty
	pub fn is_empty(&self) -> bool {
		self.sql.is_empty()
	}

	/// Convert to string (consuming self).
	pub fn into_string(self) -> String {
		self.sql
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sql_writer_basic() {
		let mut writer = SqlWriter::new();
		writer.push("REVOKE");
		writer.push_keyword("GRANT OPTION FOR");

		assert_eq!(writer.sql(), "REVOKE GRANT OPTION FOR");
	}

	#[test]
	fn test_push_space_is_idempotent() {
		let mut writer = SqlWriter::new();
		writer.push_space();
		assert!(writer.is_empty());

		writer.push("GRANT");
		writer.push_space();
		writer.push_space();
		assert_eq!(writer.sql(), "GRANT ");
	}

	#[test]
	fn test_push_list_empty() {
		let mut writer = SqlWriter::new();
		writer.push("f(");
		writer.push_list(Vec::<&str>::new(), ", ", |w, item| w.push(item));
		writer.push(")");

		assert_eq!(writer.into_string(), "f()");
	}
}
