use contracts::domain::a001_floor::{FloorCreate, FloorDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::a001_floor::api as floor_api;
use crate::shared::components::styles;
use crate::shared::date_utils::format_timestamp;

/// Floor page: header fields are editable in place, rooms are listed below.
#[component]
#[allow(non_snake_case)]
pub fn FloorDetailPage() -> impl IntoView {
    let params = use_params_map();
    let floor_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|s| s.parse::<i64>().ok()))
    });

    let (floor, set_floor) = signal(None::<FloorDetail>);
    let (error, set_error) = signal(None::<String>);
    let edit_name = RwSignal::new(String::new());
    let edit_number = RwSignal::new(String::new());

    let load = move |id: i64| {
        spawn_local(async move {
            match floor_api::get(id).await {
                Ok(detail) => {
                    edit_name.set(detail.name.clone().unwrap_or_default());
                    edit_number.set(
                        detail
                            .floor_number
                            .map(|n| n.to_string())
                            .unwrap_or_default(),
                    );
                    set_floor.set(Some(detail));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    Effect::new(move |_| {
        if let Some(id) = floor_id.get() {
            load(id);
        }
    });

    let save = move |_| {
        let Some(id) = floor_id.get_untracked() else {
            return;
        };
        let name = edit_name.get_untracked().trim().to_string();
        let body = FloorCreate {
            name: (!name.is_empty()).then_some(name),
            floor_number: edit_number.get_untracked().trim().parse::<i32>().ok(),
        };
        spawn_local(async move {
            match floor_api::update(id, &body).await {
                Ok(()) => load(id),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let navigate = use_navigate();
    let delete = move |_| {
        let Some(id) = floor_id.get_untracked() else {
            return;
        };
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this floor and everything on it?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match floor_api::remove(id).await {
                Ok(()) => navigate("/floors", Default::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div style=styles::PAGE>
            <div style=styles::HEADER>
                <h1 style=styles::TITLE>
                    {move || {
                        floor
                            .get()
                            .map(|f| {
                                f.name.unwrap_or_else(|| {
                                    f.floor_number
                                        .map(|n| format!("Floor {n}"))
                                        .unwrap_or_else(|| format!("Floor #{}", f.id))
                                })
                            })
                            .unwrap_or_else(|| "Floor".to_string())
                    }}
                </h1>
                <div style=styles::ACTIONS>
                    <A href="/floors" attr:style=styles::BUTTON>
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

            <Show when=move || floor.with(|f| f.is_some())>
                <div style="display: flex; gap: 16px; align-items: flex-end; margin-bottom: 20px;">
                    <div style="display: flex; flex-direction: column; gap: 4px;">
                        <label style=styles::FIELD_LABEL>"Name"</label>
                        <input
                            style=styles::INPUT
                            prop:value=move || edit_name.get()
                            on:input=move |ev| edit_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div style="display: flex; flex-direction: column; gap: 4px;">
                        <label style=styles::FIELD_LABEL>"Floor number"</label>
                        <input
                            style=styles::INPUT
                            prop:value=move || edit_number.get()
                            on:input=move |ev| edit_number.set(event_target_value(&ev))
                        />
                    </div>
                    <button style=styles::BUTTON_PRIMARY on:click=save>
                        "Save"
                    </button>
                    <span style=styles::FIELD_LABEL>
                        {move || {
                            floor
                                .get()
                                .map(|f| format!("Created {}", format_timestamp(f.created_at)))
                        }}
                    </span>
                </div>

                <h2 style="font-size: 17px; margin: 0 0 8px 0;">"Rooms"</h2>
                <table style=styles::TABLE>
                    <thead>
                        <tr>
                            <th style=styles::TH>"Name"</th>
                            <th style=styles::TH>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            floor
                                .get()
                                .map(|f| f.rooms)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|room| {
                                    let id = room.id;
                                    let label = room.label();
                                    let created = format_timestamp(room.created_at);
                                    view! {
                                        <tr>
                                            <td style=styles::TD>
                                                <A href=format!("/rooms/{id}")>{label}</A>
                                            </td>
                                            <td style=styles::TD>{created}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || floor.with(|f| f.as_ref().is_some_and(|f| f.rooms.is_empty()))>
                    <div style=styles::MUTED>"No rooms on this floor."</div>
                </Show>
            </Show>
        </div>
    }
}
