//! PostgreSQL identifier quoting
//!
//! Identifiers are left bare whenever PostgreSQL would read them back
//! unchanged, and double-quoted otherwise.

use std::borrow::Cow;

/// Checks if a word is reserved in PostgreSQL and cannot be used bare as an
/// identifier.
///
/// The comparison is case-sensitive; callers lowercase first.
///
/// # Examples
///
/// ```
/// use pg_grant_query::quoting::is_reserved_word;
///
/// assert!(is_reserved_word("user"));
/// assert!(is_reserved_word("grant"));
/// assert!(!is_reserved_word("integer"));
/// ```
pub fn is_reserved_word(word: &str) -> bool {
	matches!(
		word,
		"all"
			| "analyse"
			| "analyze"
			| "and"
			| "any"
			| "array"
			| "as"
			| "asc"
			| "asymmetric"
			| "both"
			| "case"
			| "cast"
			| "check"
			| "collate"
			| "column"
			| "constraint"
			| "create"
			| "current_catalog"
			| "current_date"
			| "current_role"
			| "current_time"
			| "current_timestamp"
			| "current_user"
			| "default"
			| "deferrable"
			| "desc"
			| "distinct"
			| "do"
			| "else"
			| "end"
			| "except"
			| "false"
			| "fetch"
			| "for"
			| "foreign"
			| "from"
			| "grant"
			| "group"
			| "having"
			| "in"
			| "initially"
			| "intersect"
			| "into"
			| "leading"
			| "limit"
			| "localtime"
			| "localtimestamp"
			| "new"
			| "not"
			| "null"
			| "of"
			| "off"
			| "offset"
			| "old"
			| "on"
			| "only"
			| "or"
			| "order"
			| "placing"
			| "primary"
			| "references"
			| "returning"
			| "select"
			| "session_user"
			| "some"
			| "symmetric"
			| "table"
			| "then"
			| "to"
			| "trailing"
			| "true"
			| "union"
			| "unique"
			| "user"
			| "using"
			| "variadic"
			| "when"
			| "where"
			| "window"
			| "with"
			// Reserved, but allowed as function or type names
			| "authorization"
			| "between"
			| "binary"
			| "cross"
			| "current_schema"
			| "freeze"
			| "full"
			| "ilike"
			| "inner"
			| "is"
			| "isnull"
			| "join"
			| "left"
			| "like"
			| "natural"
			| "notnull"
			| "outer"
			| "over"
			| "overlaps"
			| "right"
			| "similar"
			| "verbose"
	)
}

/// Checks if an identifier must be double-quoted to survive a round trip
/// through the PostgreSQL parser.
pub fn requires_quotes(ident: &str) -> bool {
	let Some(first) = ident.chars().next() else {
		return true;
	};

	first.is_ascii_digit()
		|| first == '$'
		|| !ident
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$')
		|| is_reserved_word(ident)
}

/// Quotes an identifier if PostgreSQL requires it
///
/// Embedded double quotes are doubled.
///
/// # Examples
///
/// ```
/// use pg_grant_query::quoting::quote_identifier;
///
/// assert_eq!(quote_identifier("accounts"), "accounts");
/// assert_eq!(quote_identifier("user"), "\"user\"");
/// assert_eq!(quote_identifier("Accounts"), "\"Accounts\"");
/// assert_eq!(quote_identifier("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn quote_identifier(ident: &str) -> Cow<'_, str> {
	if requires_quotes(ident) {
		Cow::Owned(format!("\"{}\"", ident.replace('"', "\"\"")))
	} else {
		Cow::Borrowed(ident)
	}
}
