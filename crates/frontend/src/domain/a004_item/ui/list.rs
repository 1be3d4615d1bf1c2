use contracts::domain::a004_item::{Item, ItemUpdate};
use contracts::shared::filters::ItemFilters;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a003_container::api as container_api;
use crate::domain::a004_item::api as item_api;
use crate::shared::components::styles;
use crate::shared::components::{use_row_selection, FilterButtons, Paginator};
use crate::shared::date_utils::format_timestamp;
use crate::shared::filter_utils::item_filters_equal;
use crate::shared::pagination::use_paginated_fetch;
use crate::shared::select::core::MultiSelection;
use crate::shared::select::room_filter::ShowAllControl;
use crate::shared::select::{use_room_filter, AsyncMultiSelect};

/// Items list: filter bar with name, rooms and containers, inline edit of
/// name/quantity, per-row quantity decrement, and bulk delete. The
/// container search is always remote and is narrowed to the rooms in the
/// current draft.
#[component]
#[allow(non_snake_case)]
pub fn ItemList() -> impl IntoView {
    let list = use_paginated_fetch(
        |page, filters: Option<ItemFilters>, signal| async move {
            item_api::list(page, filters, signal).await
        },
        1,
    );
    let selection = use_row_selection();

    let draft_name = RwSignal::new(String::new());
    let draft_rooms = RwSignal::new(MultiSelection::default());
    let draft_containers = RwSignal::new(MultiSelection::default());
    let room_filter = use_room_filter();

    let current_draft = move || {
        let name = draft_name.with(|n| n.trim().to_string());
        let rooms = draft_rooms.with(|s| s.ids());
        let containers = draft_containers.with(|s| s.ids());
        ItemFilters {
            name: (!name.is_empty()).then_some(name),
            rooms: (!rooms.is_empty()).then_some(rooms),
            containers: (!containers.is_empty()).then_some(containers),
        }
    };

    let apply = move || {
        let draft = current_draft();
        if draft.is_empty() {
            list.clear_filters();
        } else {
            list.apply_filters(draft);
        }
    };

    let clear = move || {
        draft_name.set(String::new());
        draft_rooms.set(MultiSelection::default());
        draft_containers.set(MultiSelection::default());
        list.clear_filters();
    };

    let apply_disabled = Signal::derive(move || {
        list.applied
            .with(|applied| item_filters_equal(Some(&current_draft()), applied.as_ref()))
    });
    let clear_disabled = Signal::derive(move || {
        current_draft().is_empty()
            && list
                .applied
                .with(|applied| item_filters_equal(applied.as_ref(), None))
    });

    // Container suggestions are scoped to the drafted rooms, not the
    // applied ones, so the draft stays self-consistent.
    let container_search = move |q: String| {
        let rooms = draft_rooms.with_untracked(|s| s.ids());
        async move { container_api::search(&q, &rooms).await }
    };

    // Inline edit state: at most one row at a time.
    let editing = RwSignal::new(None::<i64>);
    let edit_name = RwSignal::new(String::new());
    let edit_qty = RwSignal::new(String::new());

    let save_edit = move |id: i64| {
        let name = edit_name.get_untracked().trim().to_string();
        let body = ItemUpdate {
            name: (!name.is_empty()).then_some(name),
            quantity: edit_qty.get_untracked().trim().parse::<i64>().ok(),
        };
        spawn_local(async move {
            match item_api::update(id, &body).await {
                Ok(()) => {
                    editing.set(None);
                    list.refetch();
                }
                Err(e) => log::error!("failed to update item {id}: {e}"),
            }
        });
    };

    // Decrement takes one off the quantity; the backend drops the row
    // once it reaches zero.
    let decrement = move |id: i64| {
        spawn_local(async move {
            match item_api::remove(id, Some(1)).await {
                Ok(()) => list.refetch(),
                Err(e) => log::error!("failed to decrement item {id}: {e}"),
            }
        });
    };

    let delete_one = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this item?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match item_api::remove(id, None).await {
                Ok(()) => list.refetch(),
                Err(e) => log::error!("failed to delete item {id}: {e}"),
            }
        });
    };

    let delete_selected = move || {
        let ids = selection.with_untracked(|s| s.ids());
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete {} selected item(s)?", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            for id in ids {
                if let Err(e) = item_api::remove(id, None).await {
                    log::error!("failed to delete item {id}: {e}");
                }
            }
            selection.update(|s| s.clear());
            list.refetch();
        });
    };

    view! {
        <div style=styles::PAGE>
            <div style=styles::HEADER>
                <h1 style=styles::TITLE>"Items"</h1>
                <div style=styles::ACTIONS>
                    <A href="/items/new" attr:style=styles::BUTTON_PRIMARY>
                        "New item"
                    </A>
                    <button style=styles::BUTTON on:click=move |_| list.refetch()>
                        "Refresh"
                    </button>
                    <button
                        style=styles::BUTTON_DANGER
                        disabled=move || selection.with(|s| s.count() == 0)
                        on:click=move |_| delete_selected()
                    >
                        {move || format!("Delete ({})", selection.with(|s| s.count()))}
                    </button>
                </div>
            </div>

            <div style=styles::FILTER_BAR>
                <div style="display: flex; flex-direction: column; gap: 4px;">
                    <label style=styles::FIELD_LABEL>"Name"</label>
                    <input
                        style=styles::INPUT
                        placeholder="Filter by name..."
                        prop:value=move || draft_name.get()
                        on:input=move |ev| draft_name.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                apply();
                            }
                        }
                    />
                </div>
                <div style="display: flex; flex-direction: column; gap: 4px;">
                    <div style="display: flex; gap: 8px; align-items: baseline;">
                        <label style=styles::FIELD_LABEL>"Rooms"</label>
                        <ShowAllControl options=room_filter.all what="rooms" />
                    </div>
                    <AsyncMultiSelect
                        search_fn=move |q| room_filter.search(q)
                        selection=draft_rooms
                        placeholder=room_filter.placeholder()
                        debounce_ms=room_filter.debounce_ms()
                        min_search_length=room_filter.min_search_length()
                        disabled=Signal::derive(move || room_filter.all.loading.get())
                    />
                </div>
                <div style="display: flex; flex-direction: column; gap: 4px;">
                    <label style=styles::FIELD_LABEL>"Containers"</label>
                    <AsyncMultiSelect
                        search_fn=container_search
                        selection=draft_containers
                        placeholder="Search containers..."
                        debounce_ms=300u32
                        min_search_length=1usize
                    />
                </div>
                <FilterButtons
                    on_apply=Callback::new(move |()| apply())
                    on_clear=Callback::new(move |()| clear())
                    apply_disabled=apply_disabled
                    clear_disabled=clear_disabled
                />
            </div>

            {move || {
                list.error
                    .get()
                    .map(|e| view! { <div style=styles::ERROR_BOX>{format!("Error: {e}")}</div> })
            }}

            <table style=styles::TABLE>
                <thead>
                    <tr>
                        <th style=styles::TH>
                            <input
                                type="checkbox"
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    let ids: Vec<i64> = list
                                        .rows
                                        .with_untracked(|rows| rows.iter().map(|i: &Item| i.id).collect());
                                    selection
                                        .update(|s| {
                                            if checked {
                                                for id in ids {
                                                    s.set(id, true);
                                                }
                                            } else {
                                                s.clear();
                                            }
                                        });
                                }
                            />
                        </th>
                        <th style=styles::TH>"Name"</th>
                        <th style=styles::TH>"Room"</th>
                        <th style=styles::TH>"Container"</th>
                        <th style=styles::TH>"Quantity"</th>
                        <th style=styles::TH>"Created"</th>
                        <th style=styles::TH>""</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.rows
                            .get()
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                let room = room_filter
                                    .label_for(item.room_id)
                                    .unwrap_or_else(|| format!("#{}", item.room_id));
                                let container = item
                                    .container_id
                                    .map(|c| {
                                        view! { <A href=format!("/containers/{c}")>{format!("#{c}")}</A> }
                                            .into_any()
                                    })
                                    .unwrap_or_else(|| view! { <span>"-"</span> }.into_any());
                                let created = format_timestamp(item.created_at);
                                let name_for_edit = item.name.clone();
                                let qty_for_edit = item.quantity;
                                let is_editing = move || editing.get() == Some(id);
                                view! {
                                    <tr>
                                        <td style=styles::TD>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    selection.with(|s| s.is_selected(id))
                                                }
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    selection.update(|s| s.set(id, checked));
                                                }
                                            />
                                        </td>
                                        <td style=styles::TD>
                                            <Show
                                                when=is_editing
                                                fallback={
                                                    let name = item.name.clone();
                                                    move || name.clone()
                                                }
                                            >
                                                <input
                                                    style=styles::INPUT
                                                    prop:value=move || edit_name.get()
                                                    on:input=move |ev| {
                                                        edit_name.set(event_target_value(&ev))
                                                    }
                                                />
                                            </Show>
                                        </td>
                                        <td style=styles::TD>{room}</td>
                                        <td style=styles::TD>{container}</td>
                                        <td style=styles::TD>
                                            <Show
                                                when=is_editing
                                                fallback=move || qty_for_edit.to_string()
                                            >
                                                <input
                                                    style=format!("{} width: 60px;", styles::INPUT)
                                                    prop:value=move || edit_qty.get()
                                                    on:input=move |ev| {
                                                        edit_qty.set(event_target_value(&ev))
                                                    }
                                                />
                                            </Show>
                                        </td>
                                        <td style=styles::TD>{created}</td>
                                        <td style=format!("{} white-space: nowrap;", styles::TD)>
                                            <Show
                                                when=is_editing
                                                fallback={
                                                    let name_for_edit = name_for_edit.clone();
                                                    move || {
                                                        let name_for_edit = name_for_edit.clone();
                                                        view! {
                                                            <button
                                                                style=styles::BUTTON
                                                                on:click=move |_| {
                                                                    edit_name.set(name_for_edit.clone());
                                                                    edit_qty.set(qty_for_edit.to_string());
                                                                    editing.set(Some(id));
                                                                }
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                style=styles::BUTTON
                                                                title="Remove one"
                                                                on:click=move |_| decrement(id)
                                                            >
                                                                "-1"
                                                            </button>
                                                            <button
                                                                style=styles::BUTTON_DANGER
                                                                on:click=move |_| delete_one(id)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        }
                                                    }
                                                }
                                            >
                                                <button
                                                    style=styles::BUTTON_PRIMARY
                                                    on:click=move |_| save_edit(id)
                                                >
                                                    "Save"
                                                </button>
                                                <button
                                                    style=styles::BUTTON
                                                    on:click=move |_| editing.set(None)
                                                >
                                                    "Cancel"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <Show when=move || {
                !list.loading.get() && list.rows.with(|r| r.is_empty()) && list.error.with(|e| e.is_none())
            }>
                <div style=styles::MUTED>"No items found."</div>
            </Show>
            <Show when=move || list.loading.get()>
                <div style=styles::MUTED>"Loading..."</div>
            </Show>

            <Show when=move || list.has_multiple_pages()>
                <Paginator
                    page=list.page
                    total_pages=Signal::derive(move || list.total_pages())
                    on_page_change=Callback::new(move |n| list.set_page(n))
                />
            </Show>
        </div>
    }
}
