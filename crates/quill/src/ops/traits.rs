//! Trait definitions for renderable query pieces.

use crate::ops::param::Param;

/// A piece of a query that can print itself and hand over its bound values.
///
/// Leaf conditions, composite groups and the limit/offset modifiers all
/// implement this one contract, so a group can hold any mix of them as
/// `Box<dyn Fragment>` children and nest to arbitrary depth.
///
/// The two methods are two passes over the same structure and must stay
/// aligned: every `?` marker that `render` emits corresponds to exactly one
/// value in `ordered_args`, in the same left-to-right order. The assembler
/// checks that alignment after numbering the placeholders.
pub trait Fragment {
    /// Print the SQL text for this piece, using `?` for every bound value.
    ///
    /// An empty string means "contributes nothing" and the caller must not
    /// emit surrounding syntax (connectors, `where`) for it.
    fn render(&self) -> String;

    /// The bound values of this piece, flattened in emission order.
    fn ordered_args(&self) -> Vec<Param>;
}
