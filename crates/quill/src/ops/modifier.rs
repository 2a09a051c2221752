//! Pagination modifiers rendered as parametrized clause fragments.
//!
//! Unlike [`Param`](crate::ops::Param), these types have no absent state: the
//! query assembler simply skips a modifier whose value is zero, never calling
//! its render or args.

use crate::ops::param::Param;
use crate::ops::traits::Fragment;

pub(crate) struct Limit {
    value: i64,
}

impl Limit {
    pub(crate) fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Fragment for Limit {
    fn render(&self) -> String {
        "limit ?".to_string()
    }

    fn ordered_args(&self) -> Vec<Param> {
        vec![Param::new(self.value)]
    }
}

pub(crate) struct Offset {
    value: i64,
}

impl Offset {
    pub(crate) fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Fragment for Offset {
    fn render(&self) -> String {
        "offset ?".to_string()
    }

    fn ordered_args(&self) -> Vec<Param> {
        vec![Param::new(self.value)]
    }
}
