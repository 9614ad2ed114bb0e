//! GRANT/REVOKE statement module.
//!
//! This module provides statement values, the fan-out from decoded
//! privileges, identifier quoting and the PostgreSQL renderer.
//!
//! # Examples
//!
//! ```rust
//! use pg_grant::acl::ObjectType;
//! use pg_grant::query::revoke;
//!
//! let stmt = revoke("ALL", ObjectType::Schema, "app", "bob").grant_option(true);
//! assert_eq!(stmt.to_sql().unwrap(), "REVOKE GRANT OPTION FOR ALL ON SCHEMA app FROM bob");
//! ```

pub use pg_grant_query::*;
