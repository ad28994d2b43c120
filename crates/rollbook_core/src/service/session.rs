//! Request-scoped UI state threaded into service calls.
//!
//! # Responsibility
//! - Track which record (by roll) the edit form currently targets.
//! - Track the direction the next toggle-style sort will apply.
//!
//! # Invariants
//! - State lives in the caller's session object, never in process globals.
//! - Both sort entry points share one direction toggle.

use crate::model::record_list::SortOrder;

/// Per-user interaction state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    edit_target: Option<String>,
    next_sort: SortOrder,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll of the record being edited, if any.
    pub fn edit_target(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    pub(crate) fn set_edit_target(&mut self, roll: impl Into<String>) {
        self.edit_target = Some(roll.into());
    }

    /// Leaves edit mode; the next save adds a new record.
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
    }

    /// Direction the next toggle sort will use, without consuming it.
    pub fn peek_sort_order(&self) -> SortOrder {
        self.next_sort
    }

    /// Returns the direction to apply now and flips the toggle.
    ///
    /// The first call yields ascending order, then it alternates.
    pub fn next_sort_order(&mut self) -> SortOrder {
        let order = self.next_sort;
        self.next_sort = order.reversed();
        order
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::model::record_list::SortOrder;

    #[test]
    fn sort_toggle_starts_ascending_and_alternates() {
        let mut session = Session::new();
        assert_eq!(session.next_sort_order(), SortOrder::Ascending);
        assert_eq!(session.next_sort_order(), SortOrder::Descending);
        assert_eq!(session.peek_sort_order(), SortOrder::Ascending);
        assert_eq!(session.next_sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn cancel_edit_clears_target() {
        let mut session = Session::new();
        session.set_edit_target("42");
        assert_eq!(session.edit_target(), Some("42"));
        session.cancel_edit();
        assert!(!session.is_editing());
    }
}
