//! Paginated fetch controller.
//!
//! Owns current page, applied filters, loading/error state and the
//! in-flight request for one list view. Dependency changes (page, applied
//! filters, explicit reload) abort the previous request; a monotonically
//! increasing sequence number ensures only the most recently issued
//! request may commit to visible state, so a stale slow response can
//! never overwrite a fresher one.

use contracts::shared::paging::{total_pages, Paginated};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use web_sys::{AbortController, AbortSignal};

use crate::shared::fetch::FetchError;

pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Whether the pagination UI may request page `n`. Out-of-range requests
/// are ignored rather than clamped; prev/next are disabled at the bounds.
pub fn accepts_page(n: u32, total_pages: u32) -> bool {
    n >= 1 && (total_pages == 0 || n <= total_pages)
}

/// The page and filters driving one fetch. Pure, so the reset rules are
/// testable without the reactive graph.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<F> {
    pub page: u32,
    pub applied: Option<F>,
}

impl<F> QueryState<F> {
    pub fn new(initial_page: u32) -> Self {
        Self {
            page: initial_page.max(1),
            applied: None,
        }
    }

    /// Request page `n`. Out-of-range values change nothing.
    pub fn set_page(&mut self, n: u32, total_pages: u32) -> bool {
        if !accepts_page(n, total_pages) {
            return false;
        }
        self.page = n;
        true
    }

    /// Applying a draft always lands back on page 1.
    pub fn apply_filters(&mut self, draft: F) {
        self.applied = Some(draft);
        self.page = 1;
    }

    /// Dropping the filters also lands back on page 1.
    pub fn clear_filters(&mut self) {
        self.applied = None;
        self.page = 1;
    }
}

/// What a finished request may do to visible state.
#[derive(Debug, PartialEq)]
enum Commit<T> {
    Rows(Paginated<T>),
    Error(String),
    Discard,
}

/// Supersede rule in one place: a cancelled request never surfaces, and
/// anything but the most recently issued sequence number is discarded,
/// errors included.
fn commit_outcome<T>(
    latest_seq: u64,
    my_seq: u64,
    result: Result<Paginated<T>, FetchError>,
) -> Commit<T> {
    match result {
        Err(e) if e.is_cancelled() => Commit::Discard,
        _ if latest_seq != my_seq => Commit::Discard,
        Ok(page) => Commit::Rows(page),
        Err(e) => Commit::Error(e.to_string()),
    }
}

pub struct PaginatedFetch<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
{
    pub rows: ReadSignal<Vec<T>>,
    pub total: ReadSignal<u32>,
    pub page_size: ReadSignal<u32>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    pub page: Memo<u32>,
    pub applied: Signal<Option<F>>,
    query: RwSignal<QueryState<F>>,
    reload: RwSignal<u64>,
}

impl<T, F> Clone for PaginatedFetch<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, F> Copy for PaginatedFetch<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
{
}

impl<T, F> PaginatedFetch<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
{
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total.get(), self.page_size.get())
    }

    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages() > 1
    }

    /// Request page `n` with the currently applied filters. Out-of-range
    /// values are ignored.
    pub fn set_page(&self, n: u32) {
        let total_pages = self.total_pages();
        if !accepts_page(n, total_pages) {
            return;
        }
        self.query.update(|q| {
            q.set_page(n, total_pages);
        });
    }

    /// Apply a filter draft and reset to page 1.
    pub fn apply_filters(&self, draft: F) {
        self.query.update(|q| q.apply_filters(draft));
    }

    /// Drop all applied filters and reset to page 1.
    pub fn clear_filters(&self) {
        self.query.update(|q| q.clear_filters());
    }

    /// Refetch the current page with the current filters.
    pub fn refetch(&self) {
        self.reload.update(|n| *n += 1);
    }
}

/// Create a paginated fetch controller around `fetch_page`.
///
/// The fetch function receives the 1-indexed page, the applied filters
/// and an abort signal wired to the controller's supersede logic.
pub fn use_paginated_fetch<T, F, Fetch, Fut>(
    fetch_page: Fetch,
    initial_page: u32,
) -> PaginatedFetch<T, F>
where
    T: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
    Fetch: Fn(u32, Option<F>, Option<AbortSignal>) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<Paginated<T>, FetchError>> + 'static,
{
    let (rows, set_rows) = signal(Vec::<T>::new());
    let (total, set_total) = signal(0u32);
    let (page_size, set_page_size) = signal(DEFAULT_PAGE_SIZE);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let query = RwSignal::new(QueryState::<F>::new(initial_page));
    let reload = RwSignal::new(0u64);

    let page = Memo::new(move |_| query.with(|q| q.page));
    let applied = Signal::derive(move || query.with(|q| q.applied.clone()));

    let seq = StoredValue::new(0u64);
    let inflight = StoredValue::new_local(None::<AbortController>);

    Effect::new(move |_| {
        let QueryState {
            page: page_n,
            applied: filters,
        } = query.get();
        reload.track();

        // Supersede: only the newest sequence number may commit.
        let my_seq = seq.with_value(|s| s + 1);
        seq.set_value(my_seq);
        if let Some(prev) = inflight.with_value(|c| c.clone()) {
            prev.abort();
        }
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        inflight.set_value(controller);

        set_loading.set(true);
        let fetch_page = fetch_page.clone();
        spawn_local(async move {
            let result = fetch_page(page_n, filters, signal).await;
            match commit_outcome(seq.get_value(), my_seq, result) {
                Commit::Rows(result) => {
                    set_rows.set(result.items);
                    set_total.set(result.total);
                    set_page_size.set(result.page_size.max(1));
                    set_error.set(None);
                    set_loading.set(false);
                }
                Commit::Error(message) => {
                    // stale-while-error: rows keep their last value
                    set_error.set(Some(message));
                    set_loading.set(false);
                }
                Commit::Discard => {}
            }
        });
    });

    PaginatedFetch {
        rows,
        total,
        page_size,
        loading,
        error,
        page,
        applied,
        query,
        reload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_pages_in_bounds() {
        assert!(accepts_page(1, 4));
        assert!(accepts_page(4, 4));
        assert!(!accepts_page(0, 4));
        assert!(!accepts_page(5, 4));
    }

    #[test]
    fn accepts_any_positive_page_before_first_load() {
        // total_pages == 0 means nothing loaded yet
        assert!(accepts_page(1, 0));
        assert!(accepts_page(3, 0));
        assert!(!accepts_page(0, 0));
    }

    #[test]
    fn applying_filters_always_returns_to_page_one() {
        let mut query = QueryState::new(1);
        assert!(query.set_page(3, 5));
        query.apply_filters("name=drill");
        assert_eq!(query.page, 1);
        assert_eq!(query.applied.as_deref(), Some("name=drill"));

        assert!(query.set_page(2, 5));
        query.clear_filters();
        assert_eq!(query.page, 1);
        assert!(query.applied.is_none());
    }

    #[test]
    fn out_of_range_page_requests_change_nothing() {
        let mut query = QueryState::<()>::new(1);
        assert!(!query.set_page(9, 4));
        assert!(!query.set_page(0, 4));
        assert_eq!(query.page, 1);
    }

    fn page_of(items: Vec<&'static str>) -> Paginated<&'static str> {
        Paginated {
            items,
            total: 1,
            page: 1,
            page_size: 25,
            total_pages: 1,
        }
    }

    #[test]
    fn only_the_latest_request_commits() {
        // request 1 was superseded by request 2; its late result is dropped
        let stale = commit_outcome(2, 1, Ok(page_of(vec!["old"])));
        assert_eq!(stale, Commit::Discard);

        let fresh = commit_outcome(2, 2, Ok(page_of(vec!["new"])));
        assert!(matches!(fresh, Commit::Rows(p) if p.items == vec!["new"]));
    }

    #[test]
    fn superseded_and_cancelled_errors_never_surface() {
        let cancelled = commit_outcome::<&str>(2, 2, Err(FetchError::Cancelled));
        assert_eq!(cancelled, Commit::Discard);

        let stale = commit_outcome::<&str>(3, 1, Err(FetchError::Network("down".into())));
        assert_eq!(stale, Commit::Discard);

        let current = commit_outcome::<&str>(3, 3, Err(FetchError::Network("down".into())));
        assert!(matches!(current, Commit::Error(m) if m.contains("down")));
    }
}
