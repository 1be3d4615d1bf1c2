//! Async single-select: same debounced search as the multi variant, but
//! one selection that toggles to none and a popover that closes on pick.

use contracts::shared::select::SelectOption;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::fetch::FetchError;
use crate::shared::select::core::single_select_toggle;

#[component]
pub fn AsyncSingleSelect<F, Fut>(
    search_fn: F,
    /// Selected option owned by the host form.
    value: RwSignal<Option<SelectOption>>,
    #[prop(into, optional)] on_change: Option<Callback<Option<SelectOption>>>,
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
            cb.run(value.get_untracked());
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
            if now_open && query.get_untracked().is_empty() && min_search_length.get_untracked() == 0
            {
                run_search(String::new());
            }
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
                            value
                                .get()
                                .map(|v| v.label())
                                .unwrap_or_else(|| placeholder.get())
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
                            on:input={
                                let run_search = run_search.clone();
                                move |ev| {
                                    let v = event_target_value(&ev);
                                    set_query.set(v.clone());
                                    run_search(v);
                                }
                            }
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
                                        let is_selected =
                                            value.with(|v| v.as_ref().map(|s| s.id) == Some(option.id));
                                        let label = option.label();
                                        let on_pick = {
                                            let option = option.clone();
                                            move |_| {
                                                value.update(|v| {
                                                    *v = single_select_toggle(v.as_ref(), &option);
                                                });
                                                emit();
                                                set_open.set(false);
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
        </div>
    }
}
