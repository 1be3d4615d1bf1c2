//! Room filter plumbing shared by the containers and items list pages.
//!
//! Wraps the loadable room option set and picks the search mode for the
//! room multi-select: local filtering once the set is known-complete,
//! hybrid when it was truncated, remote until it is loaded at all.

use contracts::shared::select::SelectOption;
use leptos::prelude::*;

use crate::domain::a002_room::api as room_api;
use crate::shared::fetch::FetchError;
use crate::shared::options::{use_loadable_options, LoadableOptions};
use crate::shared::select::core::{filter_local, option_label, search_mode, SearchMode};

/// Bound for the "show all" snapshot; matches the backend's limit cap.
pub const OPTION_LIMIT: u32 = 200;

#[derive(Clone, Copy)]
pub struct RoomFilter {
    pub all: LoadableOptions,
}

pub fn use_room_filter() -> RoomFilter {
    RoomFilter {
        all: use_loadable_options(|| room_api::list_all(OPTION_LIMIT)),
    }
}

impl RoomFilter {
    fn mode_untracked(&self) -> SearchMode {
        search_mode(
            self.all.is_loaded_untracked(),
            self.all.has_more_untracked(),
        )
    }

    fn mode_tracked(&self) -> SearchMode {
        search_mode(self.all.is_loaded(), self.all.has_more())
    }

    pub fn debounce_ms(self) -> Signal<u32> {
        Signal::derive(move || self.mode_tracked().debounce_ms())
    }

    pub fn min_search_length(self) -> Signal<usize> {
        Signal::derive(move || self.mode_tracked().min_search_length())
    }

    pub fn placeholder(self) -> Signal<String> {
        Signal::derive(move || {
            if self.all.is_loaded() {
                "Select rooms...".to_string()
            } else {
                "Search rooms...".to_string()
            }
        })
    }

    /// Search function for the room multi-select, dispatching on mode.
    pub async fn search(self, query: String) -> Result<Vec<SelectOption>, FetchError> {
        match self.mode_untracked() {
            SearchMode::Local => Ok(filter_local(&self.all.options_untracked(), &query)),
            SearchMode::Hybrid => {
                if query.trim().is_empty() {
                    // show the preloaded snapshot verbatim
                    Ok(self.all.options_untracked())
                } else {
                    room_api::search(&query).await
                }
            }
            SearchMode::Remote => room_api::search(&query).await,
        }
    }

    /// Name of a room from the loaded option set, if it is known locally.
    pub fn label_for(self, id: i64) -> Option<String> {
        self.all.with_options(|opts| option_label(opts, id))
    }
}

/// "Show all" / Retry / truncation notice next to a filter label.
#[component]
pub fn ShowAllControl(options: LoadableOptions, what: &'static str) -> impl IntoView {
    view! {
        <Show when=move || !options.is_loaded()>
            {move || {
                if options.loading.get() {
                    view! { <span style="font-size: 12px; color: #888;">"Loading..."</span> }
                        .into_any()
                } else if options.error.get() {
                    view! {
                        <span style="font-size: 12px; color: #c62828;">
                            {format!("Failed to load {}. ", what)}
                            <button
                                type="button"
                                on:click=move |_| options.load_all()
                                style="border: none; background: none; cursor: pointer; color: inherit; text-decoration: underline; font-size: 12px; padding: 0;"
                            >
                                "Retry"
                            </button>
                        </span>
                    }
                    .into_any()
                } else {
                    view! {
                        <button
                            type="button"
                            on:click=move |_| options.load_all()
                            style="border: none; background: none; cursor: pointer; color: #888; text-decoration: underline; font-size: 12px; padding: 0;"
                        >
                            "Show all"
                        </button>
                    }
                    .into_any()
                }
            }}
        </Show>
        <Show when=move || options.is_loaded() && options.has_more()>
            <span style="font-size: 12px; color: #b26a00;">
                {move || {
                    format!(
                        "Showing {} of {}. Use search for more.",
                        options.shown(),
                        options.total(),
                    )
                }}
            </span>
        </Show>
    }
}
