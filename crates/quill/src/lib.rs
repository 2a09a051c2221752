//! # quill
//!
//! A parametrized-SQL assembly engine: build a `select`-style query string
//! plus a positionally ordered argument list from a tree of composable
//! conditions, without ever placing raw values into SQL text.
//!
//! ## Features
//!
//! - **Predicate trees**: AND/OR-connected conditions with arbitrary nesting
//! - **Optional filters**: a condition whose value equals its "absent"
//!   sentinel silently disappears from the assembled query
//! - **Positional parameters**: every bound value becomes a `$n` marker in
//!   the final text, aligned with the argument list handed back to you
//! - **Driver-ready output**: arguments are `tokio_postgres` `ToSql` trait
//!   objects, passed straight through to a Postgres client
//!
//! Quill trusts its textual inputs verbatim: column names, operators, table
//! expressions and trailing clauses are not validated, quoted or parsed.
//!
//! ## Usage
//!
//! ```ignore
//! use quill::{begin, select, Cond, Param};
//!
//! let exec = select("*", "users u", "join favourites f on f.user_id = u.id")
//!     .filter(
//!         begin(Cond::eq("u.status", "active"))
//!             // drops out entirely when min_age is 0
//!             .and(Cond::new("u.age", ">=", Param::optional(min_age, 0))),
//!     )
//!     .order_by_desc("u.created_at")
//!     .offset(20)
//!     .limit(10)
//!     .to_executable()?;
//!
//! // exec.sql:  select * from users u join favourites f on f.user_id = u.id
//! //            where (u.status = $1 AND u.age >= $2) offset $3 limit $4
//! let rows = client.query(&exec.sql, &exec.params_ref()).await?;
//! ```

pub mod error;
pub mod ops;
pub mod query;

pub use error::{QuillError, QuillResult};
pub use ops::{begin, Cond, Connector, Fragment, Group, Param};
pub use query::{select, Executable, Query};
