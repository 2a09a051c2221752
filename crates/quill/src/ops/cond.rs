//! Leaf condition: a column/operator/parameter triple.

use tokio_postgres::types::ToSql;

use crate::ops::param::Param;
use crate::ops::traits::Fragment;

/// A single `column operator value` condition.
///
/// The column and operator text are trusted verbatim — quill is an assembler,
/// not a SQL parser. The value may be absent (see [`Param::optional`]), in
/// which case the condition contributes neither text nor arguments and
/// silently disappears from the assembled query.
#[derive(Clone, Debug)]
pub struct Cond {
    column: String,
    operator: String,
    value: Option<Param>,
}

impl Cond {
    /// Create a condition. `value` accepts both a plain [`Param`] and the
    /// `Option<Param>` produced by [`Param::optional`].
    ///
    /// # Example
    /// ```ignore
    /// Cond::new("id", "=", Param::new(1_i64));
    /// Cond::new("name", "ilike", Param::optional(pattern, String::new()));
    /// ```
    pub fn new(
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Option<Param>>,
    ) -> Self {
        Self {
            column: column.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Create an equality condition: column = value
    pub fn eq<T: ToSql + Send + Sync + 'static>(column: impl Into<String>, value: T) -> Self {
        Cond::new(column, "=", Param::new(value))
    }

    /// Create a not-equal condition: column != value
    pub fn ne<T: ToSql + Send + Sync + 'static>(column: impl Into<String>, value: T) -> Self {
        Cond::new(column, "!=", Param::new(value))
    }

    /// Create a greater-than condition: column > value
    pub fn gt<T: ToSql + Send + Sync + 'static>(column: impl Into<String>, value: T) -> Self {
        Cond::new(column, ">", Param::new(value))
    }

    /// Create a greater-than-or-equal condition: column >= value
    pub fn gte<T: ToSql + Send + Sync + 'static>(column: impl Into<String>, value: T) -> Self {
        Cond::new(column, ">=", Param::new(value))
    }

    /// Create a less-than condition: column < value
    pub fn lt<T: ToSql + Send + Sync + 'static>(column: impl Into<String>, value: T) -> Self {
        Cond::new(column, "<", Param::new(value))
    }

    /// Create a less-than-or-equal condition: column <= value
    pub fn lte<T: ToSql + Send + Sync + 'static>(column: impl Into<String>, value: T) -> Self {
        Cond::new(column, "<=", Param::new(value))
    }

    pub(crate) fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

impl Fragment for Cond {
    fn render(&self) -> String {
        match &self.value {
            Some(param) => format!("{} {} {}", self.column, self.operator, param.render()),
            None => String::new(),
        }
    }

    fn ordered_args(&self) -> Vec<Param> {
        match &self.value {
            Some(param) => param.ordered_args(),
            None => Vec::new(),
        }
    }
}
