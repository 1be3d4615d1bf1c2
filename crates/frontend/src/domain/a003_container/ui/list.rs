use contracts::domain::a003_container::Container;
use contracts::shared::filters::ContainerFilters;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a003_container::api as container_api;
use crate::shared::api_utils::api_url;
use crate::shared::components::styles;
use crate::shared::components::{use_row_selection, FilterButtons, Paginator};
use crate::shared::filter_utils::container_filters_equal;
use crate::shared::pagination::use_paginated_fetch;
use crate::shared::select::core::MultiSelection;
use crate::shared::select::room_filter::ShowAllControl;
use crate::shared::select::{use_room_filter, AsyncMultiSelect};

#[derive(Clone, Debug)]
struct ContainerRow {
    id: i64,
    label: String,
    room_id: Option<i64>,
    item_count: i64,
    qr_url: Option<String>,
}

impl From<Container> for ContainerRow {
    fn from(c: Container) -> Self {
        Self {
            id: c.id,
            label: c.label(),
            room_id: c.room_id,
            item_count: c.item_count,
            qr_url: c.qr_code_path.as_deref().map(api_url),
        }
    }
}

/// Containers list with a name/rooms filter bar. The bar holds a draft
/// that only reaches the query on Apply; Apply stays disabled while the
/// draft equals what is already applied.
#[component]
#[allow(non_snake_case)]
pub fn ContainerList() -> impl IntoView {
    let list = use_paginated_fetch(
        |page, filters: Option<ContainerFilters>, signal| async move {
            container_api::list(page, filters, signal).await
        },
        1,
    );
    let selection = use_row_selection();

    let draft_name = RwSignal::new(String::new());
    let draft_rooms = RwSignal::new(MultiSelection::default());
    let room_filter = use_room_filter();

    let current_draft = move || {
        let name = draft_name.with(|n| n.trim().to_string());
        let rooms = draft_rooms.with(|s| s.ids());
        ContainerFilters {
            name: (!name.is_empty()).then_some(name),
            rooms: (!rooms.is_empty()).then_some(rooms),
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
        list.clear_filters();
    };

    let apply_disabled = Signal::derive(move || {
        list.applied
            .with(|applied| container_filters_equal(Some(&current_draft()), applied.as_ref()))
    });
    let clear_disabled = Signal::derive(move || {
        current_draft().is_empty()
            && list
                .applied
                .with(|applied| container_filters_equal(applied.as_ref(), None))
    });

    let delete_selected = move || {
        let ids = selection.with_untracked(|s| s.ids());
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete {} selected container(s)?", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            for id in ids {
                if let Err(e) = container_api::remove(id).await {
                    log::error!("failed to delete container {id}: {e}");
                }
            }
            selection.update(|s| s.clear());
            list.refetch();
        });
    };

    view! {
        <div style=styles::PAGE>
            <div style=styles::HEADER>
                <h1 style=styles::TITLE>"Containers"</h1>
                <div style=styles::ACTIONS>
                    <A href="/containers/new" attr:style=styles::BUTTON_PRIMARY>
                        "New container"
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
                                        .with_untracked(|rows| rows.iter().map(|c| c.id).collect());
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
                        <th style=styles::TH>"Items"</th>
                        <th style=styles::TH>"QR"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.rows
                            .get()
                            .into_iter()
                            .map(ContainerRow::from)
                            .map(|row| {
                                let id = row.id;
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
                                            <A href=format!("/containers/{id}")>{row.label}</A>
                                        </td>
                                        <td style=styles::TD>
                                            {row
                                                .room_id
                                                .map(|rid| {
                                                    room_filter
                                                        .label_for(rid)
                                                        .unwrap_or_else(|| format!("#{rid}"))
                                                })
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td style=styles::TD>{row.item_count}</td>
                                        <td style=styles::TD>
                                            {row
                                                .qr_url
                                                .map(|url| {
                                                    view! {
                                                        <a href=url target="_blank">
                                                            "QR"
                                                        </a>
                                                    }
                                                        .into_any()
                                                })
                                                .unwrap_or_else(|| view! { <span>"-"</span> }.into_any())}
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
                <div style=styles::MUTED>"No containers found."</div>
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
