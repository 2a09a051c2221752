//! Parameter storage using Arc for clone-friendly predicate trees.

use std::sync::Arc;

use tokio_postgres::types::ToSql;

use crate::ops::traits::Fragment;

/// A single bound value, stored behind `Arc` so predicate nodes stay cheap to
/// clone and the final argument list can be shared with a driver call.
///
/// A `Param` always holds a value. "No value" is represented by the *absence*
/// of the `Param` itself (`Option<Param>`), never by a magic value inside it;
/// see [`Param::optional`].
#[derive(Clone)]
pub struct Param(Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Wrap a value unconditionally.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Wrap `value` unless it equals `absent`, the caller's "don't filter"
    /// sentinel, in which case no parameter exists at all.
    ///
    /// Comparison is exact `PartialEq` on `T`; there is no coercion.
    ///
    /// # Example
    /// ```ignore
    /// // page_size == 0 means the caller did not ask for this filter
    /// let value = Param::optional(page_size, 0);
    /// assert!(Param::optional(0, 0).is_none());
    /// ```
    pub fn optional<T>(value: T, absent: T) -> Option<Param>
    where
        T: ToSql + PartialEq + Send + Sync + 'static,
    {
        if value == absent {
            return None;
        }
        Some(Param::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        // Arc<dyn ToSql + Send + Sync> -> &(dyn ToSql + Sync)
        // This is safe because we're just removing Send from the trait bounds
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl Fragment for Param {
    /// A parameter never prints its value into SQL text, only the marker.
    fn render(&self) -> String {
        "?".to_string()
    }

    fn ordered_args(&self) -> Vec<Param> {
        vec![self.clone()]
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Param").field(&"<dyn ToSql>").finish()
    }
}
