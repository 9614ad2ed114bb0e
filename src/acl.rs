//! ACL parsing module.
//!
//! This module provides the privilege model, the ACL item parser, the
//! per-type code table and the default privileges of NULL ACLs.
//!
//! # Examples
//!
//! ```rust
//! use pg_grant::acl::{ObjectType, get_default_privileges};
//!
//! let defaults = get_default_privileges(ObjectType::Language, "alice");
//! assert_eq!(defaults[1].privs, vec!["USAGE"]);
//! ```

pub use pg_grant_acl::*;
