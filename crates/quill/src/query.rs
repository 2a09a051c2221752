//! Query assembly: base text + predicate tree + tail, rendered into a final
//! SQL string with `$1, $2, ...` positional parameters and the matching
//! ordered argument list.

use tokio_postgres::types::ToSql;
use tracing::debug;

use crate::error::{QuillError, QuillResult};
use crate::ops::{Fragment, Group, Limit, Offset, Param};

/// Begin a `select` query.
///
/// `extra` carries every non-parametrized query part that belongs between the
/// source and the `where` clause, such as `join` statements; leave it empty
/// when unused. All three arguments are passed through verbatim — quill does
/// no quoting or validation, so anything that needs quoting must arrive
/// already quoted.
///
/// # Example
/// ```ignore
/// // select * from users u join favourites f on u.id = f.user_id
/// select("*", "users u", "join favourites f on u.id = f.user_id")
/// ```
pub fn select(what: &str, from: &str, extra: &str) -> Query {
    Query {
        base: format!("select {what} from {from} {extra}").trim().to_string(),
        filter: None,
        order: Vec::new(),
        offset: 0,
        limit: 0,
        appended: String::new(),
    }
}

/// A query under construction.
///
/// Built once through the fluent methods, rendered with [`Query::to_executable`].
/// Rendering only reads, so a fully built `Query` can be rendered repeatedly
/// (and from multiple threads); the builder methods themselves consume and
/// return `self` and are not meant to run concurrently.
#[must_use]
pub struct Query {
    base: String,
    filter: Option<Group>,
    order: Vec<String>,
    offset: i64,
    limit: i64,
    appended: String,
}

impl Query {
    /// Attach the predicate tree, replacing any previous one.
    pub fn filter(mut self, group: Group) -> Self {
        self.filter = Some(group);
        self
    }

    /// Add an `order by` clause.
    pub fn order_by(mut self, column: &str) -> Self {
        self.order.push(column.to_string());
        self
    }

    /// Add a descending `order by` clause.
    pub fn order_by_desc(mut self, column: &str) -> Self {
        self.order.push(format!("{column} desc"));
        self
    }

    /// Set the row offset. Zero means "not set" and contributes nothing.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = n;
        self
    }

    /// Set the row limit. Zero means "not set" and contributes nothing.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = n;
        self
    }

    /// Append free-form trailing text (e.g. `returning id`), passed through
    /// verbatim. Repeated calls concatenate without separators.
    pub fn append(mut self, text: &str) -> Self {
        self.appended.push_str(text);
        self
    }

    /// Render the final query text and the ordered argument list.
    ///
    /// The tail renders in a fixed textual order regardless of builder call
    /// order: `order by`, then `offset`, then `limit`, then appended text.
    /// The offset argument is therefore pushed before the limit argument
    /// whenever both are present, keeping the argument list aligned with the
    /// numbered placeholders.
    ///
    /// The result should be passed to your database connection handler, e.g.
    /// via [`Executable::params_ref`].
    pub fn to_executable(&self) -> QuillResult<Executable> {
        let mut args: Vec<Param> = Vec::new();
        let mut text = self.base.clone();

        if let Some(filter) = &self.filter {
            if filter.has_content() {
                text.push_str(" where ");
                text.push_str(&filter.render());
                args.extend(filter.ordered_args());
            }
        }

        if !self.order.is_empty() {
            text.push_str(" order by ");
            text.push_str(&self.order.join(", "));
        }

        if self.offset != 0 {
            let offset = Offset::new(self.offset);
            text.push(' ');
            text.push_str(&offset.render());
            args.extend(offset.ordered_args());
        }

        if self.limit != 0 {
            let limit = Limit::new(self.limit);
            text.push(' ');
            text.push_str(&limit.render());
            args.extend(limit.ordered_args());
        }

        if !self.appended.is_empty() {
            text.push(' ');
            text.push_str(&self.appended);
        }

        let (sql, placeholders) = number_placeholders(&text);
        if placeholders != args.len() {
            return Err(QuillError::GeneratorMismatch);
        }

        debug!(target: "quill.sql", sql = %sql, param_count = args.len());

        Ok(Executable { sql, args })
    }
}

/// The result of assembling a [`Query`]: final SQL text plus bound arguments
/// in placeholder order.
#[derive(Debug, Clone)]
pub struct Executable {
    pub sql: String,
    pub args: Vec<Param>,
}

impl Executable {
    /// Get the arguments as references compatible with tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.args.iter().map(|p| p.as_ref()).collect()
    }
}

/// Replace each `?` with `$n`, `n` counting up from 1 in scan order, and
/// return the number of replacements.
///
/// There is no escaping: a literal `?` is not supported as data and must
/// never appear in caller-supplied text.
fn number_placeholders(query: &str) -> (String, usize) {
    let mut rewritten = String::with_capacity(query.len() + 8);
    let mut count = 0_usize;

    for ch in query.chars() {
        if ch == '?' {
            count += 1;
            rewritten.push('$');
            rewritten.push_str(&count.to_string());
        } else {
            rewritten.push(ch);
        }
    }

    (rewritten, count)
}
