//! Loadable-options controller: a lazily fetched, bounded "show all"
//! option set for dropdown filters.
//!
//! Nothing is fetched until the user asks; a failed load leaves the set
//! unloaded so the "Retry" affordance can trigger it again. Concurrent
//! `load_all` calls are not de-duplicated, since the trigger is an
//! explicit user action.

use contracts::shared::select::{OptionsPage, SelectOption};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::shared::fetch::FetchError;

type OptionsFuture = Pin<Box<dyn Future<Output = Result<OptionsPage, FetchError>>>>;

/// The fetched state of a bounded option set. `loaded` is an explicit
/// flag rather than "options non-empty": a successful fetch of an empty
/// set still counts as loaded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OptionSet {
    pub options: Vec<SelectOption>,
    pub total: u32,
    pub has_more: bool,
    pub loaded: bool,
}

impl OptionSet {
    pub fn absorb(&mut self, page: OptionsPage) {
        self.total = page.total;
        self.has_more = page.has_more;
        self.options = page.data;
        self.loaded = true;
    }
}

#[derive(Clone, Copy)]
pub struct LoadableOptions {
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<bool>,
    set: RwSignal<OptionSet>,
    set_loading: WriteSignal<bool>,
    set_error: WriteSignal<bool>,
    fetch_all: StoredValue<Rc<dyn Fn() -> OptionsFuture>, LocalStorage>,
}

impl LoadableOptions {
    pub fn is_loaded(&self) -> bool {
        self.set.with(|s| s.loaded)
    }

    pub fn is_loaded_untracked(&self) -> bool {
        self.set.with_untracked(|s| s.loaded)
    }

    pub fn has_more(&self) -> bool {
        self.set.with(|s| s.has_more)
    }

    pub fn has_more_untracked(&self) -> bool {
        self.set.with_untracked(|s| s.has_more)
    }

    pub fn total(&self) -> u32 {
        self.set.with(|s| s.total)
    }

    /// How many options are actually held locally.
    pub fn shown(&self) -> usize {
        self.set.with(|s| s.options.len())
    }

    pub fn options_untracked(&self) -> Vec<SelectOption> {
        self.set.with_untracked(|s| s.options.clone())
    }

    pub fn with_options<R>(&self, f: impl FnOnce(&[SelectOption]) -> R) -> R {
        self.set.with(|s| f(&s.options))
    }

    /// Fetch the bounded option set. Retryable after failure.
    pub fn load_all(&self) {
        let this = *self;
        this.set_loading.set(true);
        this.set_error.set(false);
        let fetch_all = this.fetch_all.get_value();
        spawn_local(async move {
            match fetch_all().await {
                Ok(page) => this.set.update(|s| s.absorb(page)),
                Err(e) => {
                    log::error!("Failed to load options: {}", e);
                    this.set_error.set(true);
                }
            }
            this.set_loading.set(false);
        });
    }
}

pub fn use_loadable_options<F, Fut>(fetch_all: F) -> LoadableOptions
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<OptionsPage, FetchError>> + 'static,
{
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(false);

    let fetch_all: Rc<dyn Fn() -> OptionsFuture> =
        Rc::new(move || Box::pin(fetch_all()) as OptionsFuture);

    LoadableOptions {
        loading,
        error,
        set: RwSignal::new(OptionSet::default()),
        set_loading,
        set_error,
        fetch_all: StoredValue::new_local(fetch_all),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorbing_an_empty_page_still_marks_the_set_loaded() {
        let mut set = OptionSet::default();
        assert!(!set.loaded);

        set.absorb(OptionsPage {
            data: vec![],
            total: 0,
            has_more: false,
        });

        assert!(set.loaded);
        assert!(set.options.is_empty());
        assert!(!set.has_more);
    }

    #[test]
    fn absorbing_a_page_replaces_the_previous_contents() {
        let mut set = OptionSet::default();
        set.absorb(OptionsPage {
            data: vec![SelectOption {
                id: 1,
                name: Some("Garage".into()),
            }],
            total: 120,
            has_more: true,
        });

        assert_eq!(set.options.len(), 1);
        assert_eq!(set.total, 120);
        assert!(set.has_more);

        set.absorb(OptionsPage {
            data: vec![],
            total: 0,
            has_more: false,
        });
        assert!(set.loaded);
        assert!(set.options.is_empty());
    }
}
