//! Data Control Language (DCL) support for pg-grant-query
//!
//! This module provides builders for the GRANT and REVOKE statements that
//! reproduce privileges decoded from a PostgreSQL ACL.
//!
//! # Examples
//!
//! ```
//! use pg_grant_acl::{ObjectType, parse_acl_item};
//! use pg_grant_query::dcl::{StatementOptions, grant_statements};
//!
//! let privileges = parse_acl_item("bob=r*w/alice", Some(ObjectType::Sequence), None).unwrap();
//! let statements = grant_statements(&privileges, ObjectType::Sequence, "user_id_seq", &StatementOptions::new());
//!
//! assert_eq!(statements.len(), 2);
//! assert_eq!(statements[0].to_sql().unwrap(), "GRANT UPDATE ON SEQUENCE user_id_seq TO bob");
//! ```

mod fanout;
mod options;
mod privilege_list;
mod statement;
mod target;


pub use fanout::{grant_statements, revoke_statements};
pub use options::StatementOptions;
pub use privilege_list::{PrivilegeList, PrivilegeToken};
pub use statement::{Action, PrivilegeStatement, grant, revoke};
pub use target::{ObjectRef, QualifiedName, Target};
