use contracts::domain::a002_room::{RoomCreate, RoomDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::a002_room::api as room_api;
use crate::shared::components::styles;
use crate::shared::date_utils::format_timestamp;

#[component]
#[allow(non_snake_case)]
pub fn RoomDetailPage() -> impl IntoView {
    let params = use_params_map();
    let room_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|s| s.parse::<i64>().ok()))
    });

    let (room, set_room) = signal(None::<RoomDetail>);
    let (error, set_error) = signal(None::<String>);
    let edit_name = RwSignal::new(String::new());

    let load = move |id: i64| {
        spawn_local(async move {
            match room_api::get(id).await {
                Ok(detail) => {
                    edit_name.set(detail.name.clone().unwrap_or_default());
                    set_room.set(Some(detail));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    Effect::new(move |_| {
        if let Some(id) = room_id.get() {
            load(id);
        }
    });

    let save = move |_| {
        let Some(id) = room_id.get_untracked() else {
            return;
        };
        let name = edit_name.get_untracked().trim().to_string();
        let body = RoomCreate {
            name: (!name.is_empty()).then_some(name),
            floor_id: room.with_untracked(|r| r.as_ref().and_then(|r| r.floor_id)),
        };
        spawn_local(async move {
            match room_api::update(id, &body).await {
                Ok(()) => load(id),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let navigate = use_navigate();
    let delete = move |_| {
        let Some(id) = room_id.get_untracked() else {
            return;
        };
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this room and everything in it?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match room_api::remove(id).await {
                Ok(()) => navigate("/rooms", Default::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div style=styles::PAGE>
            <div style=styles::HEADER>
                <h1 style=styles::TITLE>
                    {move || {
                        room.get()
                            .map(|r| r.name.unwrap_or_else(|| format!("Room #{}", r.id)))
                            .unwrap_or_else(|| "Room".to_string())
                    }}
                </h1>
                <div style=styles::ACTIONS>
                    <A href="/rooms" attr:style=styles::BUTTON>
                        "Back"
                    </A>
                    <button style=styles::BUTTON_DANGER on:click=delete>
                        "Delete"
                    </button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div style=styles::ERROR_BOX>{format!("Error: {e}")}</div> })
            }}

            <Show when=move || room.with(|r| r.is_some())>
                <div style="display: flex; gap: 16px; align-items: flex-end; margin-bottom: 20px;">
                    <div style="display: flex; flex-direction: column; gap: 4px;">
                        <label style=styles::FIELD_LABEL>"Name"</label>
                        <input
                            style=styles::INPUT
                            prop:value=move || edit_name.get()
                            on:input=move |ev| edit_name.set(event_target_value(&ev))
                        />
                    </div>
                    <button style=styles::BUTTON_PRIMARY on:click=save>
                        "Save"
                    </button>
                    <span style=styles::FIELD_LABEL>
                        {move || {
                            room.get()
                                .map(|r| format!("Created {}", format_timestamp(r.created_at)))
                        }}
                    </span>
                </div>

                <h2 style="font-size: 17px; margin: 0 0 8px 0;">"Containers"</h2>
                <table style=styles::TABLE>
                    <thead>
                        <tr>
                            <th style=styles::TH>"Name"</th>
                            <th style=styles::TH>"Items"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            room.get()
                                .map(|r| r.containers)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|container| {
                                    let id = container.id;
                                    let label = container.label();
                                    let count = container.item_count;
                                    view! {
                                        <tr>
                                            <td style=styles::TD>
                                                <A href=format!("/containers/{id}")>{label}</A>
                                            </td>
                                            <td style=styles::TD>{count}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || {
                    room.with(|r| r.as_ref().is_some_and(|r| r.containers.is_empty()))
                }>
                    <div style=styles::MUTED>"No containers in this room."</div>
                </Show>

                <h2 style="font-size: 17px; margin: 20px 0 8px 0;">"Items"</h2>
                <table style=styles::TABLE>
                    <thead>
                        <tr>
                            <th style=styles::TH>"Name"</th>
                            <th style=styles::TH>"Quantity"</th>
                            <th style=styles::TH>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            room.get()
                                .map(|r| r.items)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|item| {
                                    let created = format_timestamp(item.created_at);
                                    view! {
                                        <tr>
                                            <td style=styles::TD>{item.name}</td>
                                            <td style=styles::TD>{item.quantity}</td>
                                            <td style=styles::TD>{created}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || room.with(|r| r.as_ref().is_some_and(|r| r.items.is_empty()))>
                    <div style=styles::MUTED>"No items in this room."</div>
                </Show>
            </Show>
        </div>
    }
}
