//! # pg-grant-acl
//!
//! Decoding of PostgreSQL's textual access control lists.
//!
//! PostgreSQL stores the privileges of every grantable object as an array of
//! ACL items, each one shaped like `grantee=codes/grantor`:
//!
//! ```text
//! alice=arwdDxt/alice      alice holds every table privilege, self-granted
//! =r/alice                 PUBLIC may SELECT, granted by alice
//! "odd=name"=a*/alice      a quoted role holds INSERT with grant option
//! ```
//!
//! This crate turns those items into [`Privileges`] values and knows the
//! implicit privileges PostgreSQL assumes when an object's ACL is NULL.
//!
//! ## Architecture
//!
//! - [`object`]: the closed set of grantable [`ObjectType`]s
//! - [`privilege`]: privilege keywords and the per-type ACL code table
//! - [`privileges`]: the [`Privileges`] value produced by the parser
//! - [`parse`]: [`parse_acl_item`], [`parse_acl`] and [`parse_acl_or_default`]
//! - [`defaults`]: [`get_default_privileges`]
//! - [`catalog`]: descriptors handed over by a catalog query layer
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_grant_acl::{ObjectType, Privileges, parse_acl_item};
//!
//! let parsed = parse_acl_item("bob=arwdDxt/alice", Some(ObjectType::Table), None).unwrap();
//! assert_eq!(parsed, Privileges::new("bob", "alice", ["ALL"], Vec::<String>::new()));
//!
//! let parsed = parse_acl_item("=r*/alice", Some(ObjectType::Table), Some("id")).unwrap();
//! assert_eq!(parsed.grantee, "PUBLIC");
//! assert_eq!(parsed.privswgo, vec!["SELECT (id)"]);
//! ```

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod object;
pub mod parse;
pub mod privilege;
pub mod privileges;

pub use catalog::{ColumnInfo, FunctionInfo, Oid, ParameterInfo, RelationInfo, SchemaRelationInfo};
pub use defaults::get_default_privileges;
pub use error::{AclError, AclResult};
pub use object::ObjectType;
pub use parse::{parse_acl, parse_acl_item, parse_acl_or_default};
pub use privilege::{AclCode, Privilege, acl_codes};
pub use privileges::{PUBLIC, Privileges};
