//! Pure selection and search-mode state for the async selects.
//!
//! Kept free of signals so toggle semantics and mode resolution stay
//! unit-testable.

use contracts::shared::select::SelectOption;
use std::collections::HashMap;

/// Ordered multi-selection with an id → label cache so badges keep their
/// labels even after the option list changes under them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MultiSelection {
    ids: Vec<i64>,
    labels: HashMap<i64, String>,
}

impl MultiSelection {
    /// Add the option if absent, remove it if present. Ids stay unique
    /// and in toggle order.
    pub fn toggle(&mut self, option: &SelectOption) {
        if let Some(pos) = self.ids.iter().position(|&id| id == option.id) {
            self.ids.remove(pos);
            self.labels.remove(&option.id);
        } else {
            self.ids.push(option.id);
            self.labels.insert(option.id, option.label());
        }
    }

    /// Remove via a badge control; same contract as toggling off.
    pub fn remove(&mut self, id: i64) {
        self.ids.retain(|&i| i != id);
        self.labels.remove(&id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.labels.clear();
    }

    pub fn ids(&self) -> Vec<i64> {
        self.ids.clone()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected options in toggle order, labelled from the cache.
    pub fn badges(&self) -> Vec<SelectOption> {
        self.ids
            .iter()
            .map(|&id| SelectOption {
                id,
                name: self.labels.get(&id).cloned(),
            })
            .collect()
    }
}

/// Single-select click semantics: selecting the already-selected option
/// clears the selection, anything else replaces it.
pub fn single_select_toggle(
    current: Option<&SelectOption>,
    clicked: &SelectOption,
) -> Option<SelectOption> {
    if current.is_some_and(|c| c.id == clicked.id) {
        None
    } else {
        Some(clicked.clone())
    }
}

/// How a select backed by a loadable option set should search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// No preloaded set: every query goes to the remote search function.
    Remote,
    /// Preloaded but truncated: empty query shows the preloaded set,
    /// non-empty queries defer to remote search.
    Hybrid,
    /// Preloaded and complete: filter in memory, no debounce.
    Local,
}

pub fn search_mode(loaded: bool, has_more: bool) -> SearchMode {
    match (loaded, has_more) {
        (false, _) => SearchMode::Remote,
        (true, true) => SearchMode::Hybrid,
        (true, false) => SearchMode::Local,
    }
}

impl SearchMode {
    pub fn debounce_ms(self) -> u32 {
        match self {
            SearchMode::Local => 0,
            SearchMode::Hybrid | SearchMode::Remote => 300,
        }
    }

    pub fn min_search_length(self) -> usize {
        match self {
            SearchMode::Local | SearchMode::Hybrid => 0,
            SearchMode::Remote => 1,
        }
    }
}

/// Case-insensitive `name contains query` over a preloaded set. Unnamed
/// options never match a query.
pub fn filter_local(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let query = query.to_lowercase();
    options
        .iter()
        .filter(|o| {
            o.name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Display label of the option with the given id, if present.
pub fn option_label(options: &[SelectOption], id: i64) -> Option<String> {
    options.iter().find(|o| o.id == id).map(|o| o.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(id: i64, name: &str) -> SelectOption {
        SelectOption {
            id,
            name: Some(name.to_string()),
        }
    }

    #[test]
    fn toggle_twice_yields_empty_selection() {
        let mut sel = MultiSelection::default();
        sel.toggle(&opt(7, "Garage"));
        assert_eq!(sel.ids(), vec![7]);
        sel.toggle(&opt(7, "Garage"));
        assert!(sel.is_empty());
    }

    #[test]
    fn ids_stay_unique_and_in_toggle_order() {
        let mut sel = MultiSelection::default();
        sel.toggle(&opt(2, "Attic"));
        sel.toggle(&opt(1, "Garage"));
        sel.toggle(&opt(2, "Attic"));
        sel.toggle(&opt(2, "Attic"));
        assert_eq!(sel.ids(), vec![1, 2]);
        let ids = sel.ids();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }

    #[test]
    fn badges_keep_cached_labels() {
        let mut sel = MultiSelection::default();
        sel.toggle(&opt(4, "Shed"));
        // option list may have moved on; badge still renders "Shed"
        let badges = sel.badges();
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].label(), "Shed");
        sel.remove(4);
        assert!(sel.badges().is_empty());
    }

    #[test]
    fn badge_remove_and_clear_share_contract() {
        let mut a = MultiSelection::default();
        a.toggle(&opt(1, "x"));
        a.toggle(&opt(2, "y"));
        a.remove(1);
        a.remove(2);

        let mut b = MultiSelection::default();
        b.toggle(&opt(1, "x"));
        b.toggle(&opt(2, "y"));
        b.clear();

        assert_eq!(a.ids(), b.ids());
        assert!(a.badges().is_empty() && b.badges().is_empty());
    }

    #[test]
    fn single_select_toggles_to_none() {
        let x = opt(1, "x");
        let y = opt(2, "y");
        let sel = single_select_toggle(None, &x);
        assert_eq!(sel.as_ref().map(|o| o.id), Some(1));
        let sel = single_select_toggle(sel.as_ref(), &x);
        assert_eq!(sel, None);
        let sel = single_select_toggle(Some(&x), &y);
        assert_eq!(sel.map(|o| o.id), Some(2));
    }

    #[test]
    fn mode_resolution() {
        assert_eq!(search_mode(false, false), SearchMode::Remote);
        assert_eq!(search_mode(false, true), SearchMode::Remote);
        assert_eq!(search_mode(true, true), SearchMode::Hybrid);
        assert_eq!(search_mode(true, false), SearchMode::Local);
        assert_eq!(SearchMode::Local.debounce_ms(), 0);
        assert_eq!(SearchMode::Remote.min_search_length(), 1);
        assert_eq!(SearchMode::Hybrid.min_search_length(), 0);
    }

    #[test]
    fn local_filter_is_case_insensitive() {
        let options = vec![
            opt(1, "Garage"),
            opt(2, "Attic"),
            SelectOption { id: 3, name: None },
        ];
        let hits = filter_local(&options, "gAr");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
        // empty query matches every named option, never unnamed ones
        assert_eq!(filter_local(&options, "").len(), 2);
    }

    #[test]
    fn label_lookup_by_id() {
        let options = vec![opt(1, "Garage"), SelectOption { id: 3, name: None }];
        assert_eq!(option_label(&options, 1).as_deref(), Some("Garage"));
        assert_eq!(option_label(&options, 3).as_deref(), Some("(unnamed)"));
        assert_eq!(option_label(&options, 99), None);
    }
}
