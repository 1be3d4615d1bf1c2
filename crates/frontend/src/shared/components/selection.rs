//! Per-page row selection.
//!
//! Each list page constructs its own selection object and passes it to
//! the table; nothing lives at module level, so navigating between pages
//! never leaks selection across entity types. Selection is keyed by
//! entity id and survives pagination within the page view.

use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RowSelection {
    selected: HashMap<i64, bool>,
}

impl RowSelection {
    pub fn set(&mut self, id: i64, on: bool) {
        if on {
            self.selected.insert(id, true);
        } else {
            self.selected.remove(&id);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.get(&id).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selected ids, sorted for stable bulk-operation order.
    pub fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.selected.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Fresh selection state for one page view.
pub fn use_row_selection() -> RwSignal<RowSelection> {
    RwSignal::new(RowSelection::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_and_clearing() {
        let mut sel = RowSelection::default();
        sel.set(3, true);
        sel.set(9, true);
        assert!(sel.is_selected(3));
        assert_eq!(sel.ids(), vec![3, 9]);

        sel.set(3, false);
        assert!(!sel.is_selected(3));
        assert_eq!(sel.count(), 1);

        sel.clear();
        assert_eq!(sel.count(), 0);
    }

    #[test]
    fn selection_is_independent_of_visible_rows() {
        // selecting a row on page 2 must survive rendering page 1
        let mut sel = RowSelection::default();
        sel.set(42, true);
        let _page_one_rows = [1i64, 2, 3];
        assert!(sel.is_selected(42));
    }
}
