use contracts::domain::a001_floor::Floor;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a001_floor::api as floor_api;
use crate::shared::components::styles;
use crate::shared::components::{use_row_selection, Paginator};
use crate::shared::date_utils::format_timestamp;
use crate::shared::pagination::use_paginated_fetch;

#[derive(Clone, Debug)]
struct FloorRow {
    id: i64,
    label: String,
    floor_number: String,
    created_at: String,
}

impl From<Floor> for FloorRow {
    fn from(f: Floor) -> Self {
        Self {
            id: f.id,
            label: f.label(),
            floor_number: f
                .floor_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            created_at: format_timestamp(f.created_at),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FloorList() -> impl IntoView {
    let list = use_paginated_fetch(
        |page, _filters: Option<()>, signal| floor_api::list(page, signal),
        1,
    );
    let selection = use_row_selection();

    let delete_selected = move || {
        let ids = selection.with_untracked(|s| s.ids());
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete {} selected floor(s)?", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            for id in ids {
                if let Err(e) = floor_api::remove(id).await {
                    log::error!("failed to delete floor {id}: {e}");
                }
            }
            selection.update(|s| s.clear());
            list.refetch();
        });
    };

    view! {
        <div style=styles::PAGE>
            <div style=styles::HEADER>
                <h1 style=styles::TITLE>"Floors"</h1>
                <div style=styles::ACTIONS>
                    <A href="/floors/new" attr:style=styles::BUTTON_PRIMARY>
                        "New floor"
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
                                        .with_untracked(|rows| rows.iter().map(|f| f.id).collect());
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
                        <th style=styles::TH>"Floor number"</th>
                        <th style=styles::TH>"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.rows
                            .get()
                            .into_iter()
                            .map(FloorRow::from)
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
                                            <A href=format!("/floors/{id}")>{row.label}</A>
                                        </td>
                                        <td style=styles::TD>{row.floor_number}</td>
                                        <td style=styles::TD>{row.created_at}</td>
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
                <div style=styles::MUTED>"No floors yet."</div>
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
