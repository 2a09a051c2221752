//! Composite condition groups: AND/OR-connected predicate trees.

use crate::ops::cond::Cond;
use crate::ops::param::Param;
use crate::ops::traits::Fragment;

/// How a child joins the group, recorded per appended child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    fn as_sql(self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

/// An ordered sequence of conditions (leaves or nested groups) joined by
/// per-edge AND/OR connectors.
///
/// Connectors are fixed at build time: appending the `n`-th child (`n >= 1`)
/// records the connector joining it to position `n - 1` of the build
/// sequence. Rendering later skips children that turned out empty, but it
/// keeps looking connectors up by build position — it does not re-derive
/// them against the previous surviving child.
///
/// # Example
/// ```ignore
/// let group = Group::begin(Cond::eq("id", 1_i64))
///     .and(Cond::eq("status", "active"))
///     .or(Group::begin(Cond::eq("role", "admin")).or(Cond::eq("role", "root")));
/// // (id = ? AND status = ? OR (role = ? OR role = ?))
/// ```
#[must_use]
pub struct Group {
    children: Vec<Box<dyn Fragment>>,
    connectors: Vec<Connector>,
}

impl Group {
    /// Create a group from its first condition.
    ///
    /// A seed whose value is absent leaves the group empty: the next child
    /// appended becomes position zero and joins without a connector.
    pub fn begin(seed: Cond) -> Self {
        let mut group = Group {
            children: Vec::new(),
            connectors: Vec::new(),
        };
        if seed.has_value() {
            group.children.push(Box::new(seed));
        }
        group
    }

    /// Append a child joined by `AND`.
    pub fn and(self, child: impl Fragment + 'static) -> Self {
        self.join(Connector::And, child)
    }

    /// Append a child joined by `OR`.
    pub fn or(self, child: impl Fragment + 'static) -> Self {
        self.join(Connector::Or, child)
    }

    fn join(mut self, connector: Connector, child: impl Fragment + 'static) -> Self {
        if !self.children.is_empty() {
            self.connectors.push(connector);
        }
        self.children.push(Box::new(child));
        self
    }

    /// Whether any child was appended at build time.
    ///
    /// True even when every child will render empty — this reflects the build
    /// sequence, not the render outcome. Callers check it before emitting a
    /// `where` keyword in front of [`Fragment::render`].
    pub fn has_content(&self) -> bool {
        !self.children.is_empty()
    }
}

impl Fragment for Group {
    fn render(&self) -> String {
        // every condition was optional and matched its absent sentinel
        if self.children.is_empty() {
            return String::new();
        }

        let mut out = String::from("(");
        for (position, child) in self.children.iter().enumerate() {
            let text = child.render();
            // skip children with no contribution, including empty sub-groups
            if text.is_empty() || text == "()" {
                continue;
            }

            if position > 0 {
                // connector lookup is by build position: a pruned earlier
                // child does not shift which connector gets printed here
                out.push(' ');
                out.push_str(self.connectors[position - 1].as_sql());
                out.push(' ');
            }

            out.push_str(&text);
        }
        out.push(')');
        out
    }

    fn ordered_args(&self) -> Vec<Param> {
        self.children
            .iter()
            .flat_map(|child| child.ordered_args())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_with_absent_seed_has_no_content() {
        let group = Group::begin(Cond::new("id", "=", Param::optional(1_i32, 1)));
        assert!(!group.has_content());
        assert_eq!(group.render(), "");
        assert!(group.ordered_args().is_empty());
    }

    #[test]
    fn renders_connected_chain_in_build_order() {
        let group = Group::begin(Cond::eq("id", 1_i64))
            .and(Cond::eq("name", "test"))
            .or(Cond::ne("test", "000"));
        assert_eq!(group.render(), "(id = ? AND name = ? OR test != ?)");
        assert_eq!(group.ordered_args().len(), 3);
    }

    #[test]
    fn nested_group_renders_parenthesized() {
        let group = Group::begin(Cond::eq("id", 1_i64))
            .and(Group::begin(Cond::eq("test", 15_i32)).or(Cond::eq("test", 2_i32)));
        assert_eq!(group.render(), "(id = ? AND (test = ? OR test = ?))");
        assert_eq!(group.ordered_args().len(), 3);
    }

    #[test]
    fn absent_children_are_pruned_from_text_and_args() {
        let group = Group::begin(Cond::new("id", "=", Param::optional(1_i32, 1)))
            .and(Cond::eq("test", "a"))
            .or(Cond::new("aaa", "=", Param::optional(1_i32, 1)));
        assert_eq!(group.render(), "(test = ?)");
        assert_eq!(group.ordered_args().len(), 1);
    }

    #[test]
    fn empty_nested_group_is_pruned() {
        let group = Group::begin(Cond::eq("id", 1_i64))
            .and(Group::begin(Cond::new("test", "=", Param::optional(1_i32, 1))));
        assert_eq!(group.render(), "(id = ?)");
        assert_eq!(group.ordered_args().len(), 1);
    }

    #[test]
    fn all_children_pruned_renders_empty_parens() {
        // the group has build-time content, so it renders its parentheses
        let group = Group::begin(Cond::new("id", "=", Param::optional(1_i32, 1)))
            .and(Cond::new("name", "=", Param::optional("", "")));
        assert!(group.has_content());
        assert_eq!(group.render(), "()");
        assert!(group.ordered_args().is_empty());
    }

    #[test]
    fn pruned_middle_child_keeps_successors_own_connector() {
        // b vanishes; c still prints with the OR recorded when c was appended
        let group = Group::begin(Cond::eq("a", 1_i32))
            .and(Cond::new("b", "=", Param::optional(0_i32, 0)))
            .or(Cond::eq("c", 3_i32));
        assert_eq!(group.render(), "(a = ? OR c = ?)");
    }

    #[test]
    fn pruned_leading_child_leaves_successors_connector_in_place() {
        // connectors stay bound to their append position: with the whole
        // prefix pruned, the first surviving child still carries its
        // connector, leading-edge or not
        let group = Group::begin(Cond::new("a", "=", Param::optional(0_i32, 0)))
            .and(Cond::new("b", "=", Param::optional(0_i32, 0)))
            .or(Cond::eq("c", 3_i32));
        assert_eq!(group.render(), "( OR c = ?)");
        assert_eq!(group.ordered_args().len(), 1);
    }
}
