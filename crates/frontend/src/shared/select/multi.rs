//! Async multi-select with debounced search and badge-rendered selection.

use contracts::shared::select::SelectOption;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::fetch::FetchError;
use crate::shared::select::core::MultiSelection;

#[component]
pub fn AsyncMultiSelect<F, Fut>(
    /// Pluggable search function (remote, local or hybrid).
    search_fn: F,
    /// Selection state owned by the host page; reset it there to clear.
    selection: RwSignal<MultiSelection>,
    /// Called with the de-duplicated id list, in toggle order.
    #[prop(into, optional)]
    on_change: Option<Callback<Vec<i64>>>,
    #[prop(into)] placeholder: Signal<String>,
    #[prop(into)] debounce_ms: Signal<u32>,
    #[prop(into)] min_search_length: Signal<usize>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView
where
    F: Fn(String) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<SelectOption>, FetchError>> + 'static,
{
    let disabled = disabled.unwrap_or_else(|| Signal::from(false));

    let (open, set_open) = signal(false);
    let (query, set_query) = signal(String::new());
    let (options, set_options) = signal(Vec::<SelectOption>::new());
    let (searching, set_searching) = signal(false);

    // Monotonic tag per dispatched search: debounce cancellation and
    // stale-response discard in one check.
    let seq = StoredValue::new(0u64);

    let run_search = move |q: String| {
        let my_seq = seq.with_value(|s| s + 1);
        seq.set_value(my_seq);

        if q.len() < min_search_length.get_untracked() {
            set_options.set(Vec::new());
            set_searching.set(false);
            return;
        }

        set_searching.set(true);
        let search_fn = search_fn.clone();
        let delay = debounce_ms.get_untracked();
        spawn_local(async move {
            if delay > 0 {
                TimeoutFuture::new(delay).await;
                if seq.get_value() != my_seq {
                    return;
                }
            }
            match search_fn(q).await {
                Ok(results) => {
                    if seq.get_value() == my_seq {
                        set_options.set(results);
                        set_searching.set(false);
                    }
                }
                Err(e) => {
                    if seq.get_value() == my_seq {
                        // UI nicety only: render as empty, log the cause
                        log::error!("Search failed: {}", e);
                        set_options.set(Vec::new());
                        set_searching.set(false);
                    }
                }
            }
        });
    };

    let emit = move || {
        if let Some(cb) = on_change {
            cb.run(selection.with_untracked(|s| s.ids()));
        }
    };

    let toggle_open = {
        let run_search = run_search.clone();
        move |_| {
            if disabled.get_untracked() {
                return;
            }
            let now_open = !open.get_untracked();
            set_open.set(now_open);
            // preloaded sets have min length 0: show them on open
            if now_open && query.get_untracked().is_empty() && min_search_length.get_untracked() == 0
            {
                run_search(String::new());
            }
        }
    };

    let handle_input = {
        let run_search = run_search.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            set_query.set(value.clone());
            run_search(value);
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 4px;">
            {label.map(|l| view! { <label style="font-size: 13px; color: #666;">{l}</label> })}

            <div style="position: relative;">
                <button
                    type="button"
                    disabled=move || disabled.get()
                    on:click=toggle_open
                    style="width: 260px; display: flex; justify-content: space-between; align-items: center; padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer; font-size: 14px; color: #555;"
                >
                    <span style="overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                        {move || {
                            let count = selection.with(|s| s.len());
                            if count > 0 {
                                format!("{} selected", count)
                            } else {
                                placeholder.get()
                            }
                        }}
                    </span>
                    <span style="opacity: 0.5;">"▾"</span>
                </button>

                <Show when=move || open.get()>
                    <div style="position: absolute; top: 100%; left: 0; z-index: 20; width: 260px; margin-top: 2px; background: white; border: 1px solid #ddd; border-radius: 4px; box-shadow: 0 4px 12px rgba(0,0,0,0.15);">
                        <input
                            type="text"
                            placeholder=move || placeholder.get()
                            prop:value=move || query.get()
                            on:input=handle_input.clone()
                            style="width: 100%; box-sizing: border-box; padding: 8px 10px; border: none; border-bottom: 1px solid #eee; font-size: 14px; outline: none;"
                        />
                        <div style="max-height: 240px; overflow: auto;">
                            {move || {
                                if searching.get() {
                                    return view! {
                                        <div style="padding: 16px; text-align: center; color: #888; font-size: 13px;">
                                            "Searching..."
                                        </div>
                                    }
                                    .into_any();
                                }
                                let opts = options.get();
                                if query.get().len() < min_search_length.get() {
                                    return view! {
                                        <div style="padding: 16px; text-align: center; color: #888; font-size: 13px;">
                                            "Type to search..."
                                        </div>
                                    }
                                    .into_any();
                                }
                                if opts.is_empty() {
                                    return view! {
                                        <div style="padding: 16px; text-align: center; color: #888; font-size: 13px;">
                                            "No results found."
                                        </div>
                                    }
                                    .into_any();
                                }
                                opts.into_iter()
                                    .map(|option| {
                                        let is_selected = selection.with(|s| s.is_selected(option.id));
                                        let label = option.label();
                                        let on_pick = {
                                            let option = option.clone();
                                            move |_| {
                                                selection.update(|s| s.toggle(&option));
                                                emit();
                                            }
                                        };
                                        view! {
                                            <div
                                                on:click=on_pick
                                                style="display: flex; align-items: center; gap: 8px; padding: 7px 10px; cursor: pointer; font-size: 14px; border-bottom: 1px solid #f5f5f5;"
                                            >
                                                <span style=format!(
                                                    "width: 14px; {}",
                                                    if is_selected { "opacity: 1;" } else { "opacity: 0;" },
                                                )>
                                                    "✓"
                                                </span>
                                                {label}
                                            </div>
                                        }
                                        .into_any()
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </div>
                    </div>
                </Show>
            </div>

            <Show when=move || selection.with(|s| !s.is_empty())>
                <div style="display: flex; flex-wrap: wrap; gap: 4px; align-items: center;">
                    {move || {
                        selection
                            .with(|s| s.badges())
                            .into_iter()
                            .map(|badge| {
                                let id = badge.id;
                                view! {
                                    <span style="display: inline-flex; align-items: center; gap: 4px; padding: 2px 6px; background: #f0f0f0; border-radius: 10px; font-size: 12px;">
                                        {badge.label()}
                                        <button
                                            type="button"
                                            on:click=move |_| {
                                                selection.update(|s| s.remove(id));
                                                emit();
                                            }
                                            style="border: none; background: none; cursor: pointer; padding: 0 2px; font-size: 12px; color: #888;"
                                        >
                                            "×"
                                        </button>
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                    <Show when=move || selection.with(|s| s.len() > 1)>
                        <button
                            type="button"
                            on:click=move |_| {
                                selection.update(|s| s.clear());
                                emit();
                            }
                            style="border: none; background: none; cursor: pointer; font-size: 12px; color: #888; text-decoration: underline;"
                        >
                            "Clear all"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
