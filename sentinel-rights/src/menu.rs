//! Ordered-menu interface
//!
//! The text-menu presenter itself lives outside this crate; rights flows
//! hand it a title, an ordered list of item labels, and the parallel list
//! of operations, and receive selections back through [`MenuDriver`].

use crate::diff::PendingOperation;

/// A menu ready for presentation: parallel ordered lists of labels and
/// the operations they trigger.
#[derive(Debug, Clone)]
pub struct MenuSpec {
    /// Menu title.
    pub title: String,

    /// Item labels, in presentation order.
    pub items: Vec<String>,

    /// Operations, parallel to `items`.
    pub operations: Vec<PendingOperation>,
}

impl MenuSpec {
    /// Number of selectable items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Seam to the ordered-menu presenter.
///
/// Implemented by the interactive front end; tests use scripted drivers.
pub trait MenuDriver {
    /// Ask the operator for a target username.
    ///
    /// # Returns
    ///
    /// `Some(username)`, or `None` if the operator backed out.
    fn prompt_username(&mut self) -> Option<String>;

    /// Present a menu and return the index of the chosen item.
    ///
    /// # Returns
    ///
    /// `Some(index)` into `menu.operations`, or `None` if the operator
    /// chose to leave the menu.
    fn choose(&mut self, menu: &MenuSpec) -> Option<usize>;

    /// Show a one-line message to the operator.
    fn notify(&mut self, message: &str);
}
