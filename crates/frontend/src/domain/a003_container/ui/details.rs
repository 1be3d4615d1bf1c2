use contracts::domain::a003_container::{ContainerCreate, ContainerDetail};
use contracts::domain::a004_item::ItemCreate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::a003_container::api as container_api;
use crate::shared::api_utils::api_url;
use crate::shared::components::styles;
use crate::shared::date_utils::format_timestamp;

/// Container page: rename in place, list its items, and add new items
/// straight into the container via the quick form at the bottom.
#[component]
#[allow(non_snake_case)]
pub fn ContainerDetailPage() -> impl IntoView {
    let params = use_params_map();
    let container_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|s| s.parse::<i64>().ok()))
    });

    let (container, set_container) = signal(None::<ContainerDetail>);
    let (error, set_error) = signal(None::<String>);
    let edit_name = RwSignal::new(String::new());
    let new_item_name = RwSignal::new(String::new());
    let new_item_qty = RwSignal::new("1".to_string());
    let (adding, set_adding) = signal(false);

    let load = move |id: i64| {
        spawn_local(async move {
            match container_api::get(id).await {
                Ok(detail) => {
                    edit_name.set(detail.name.clone().unwrap_or_default());
                    set_container.set(Some(detail));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    Effect::new(move |_| {
        if let Some(id) = container_id.get() {
            load(id);
        }
    });

    let save = move |_| {
        let Some(id) = container_id.get_untracked() else {
            return;
        };
        let name = edit_name.get_untracked().trim().to_string();
        let body = ContainerCreate {
            name: (!name.is_empty()).then_some(name),
            room_id: container.with_untracked(|c| c.as_ref().and_then(|c| c.room_id)),
        };
        spawn_local(async move {
            match container_api::update(id, &body).await {
                Ok(()) => load(id),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let add_item = move || {
        let Some(id) = container_id.get_untracked() else {
            return;
        };
        let name = new_item_name.get_untracked().trim().to_string();
        if name.is_empty() || adding.get_untracked() {
            return;
        }
        let mut body = ItemCreate::new(name);
        if let Ok(qty) = new_item_qty.get_untracked().trim().parse::<i64>() {
            body.quantity = qty.max(1);
        }
        set_adding.set(true);
        spawn_local(async move {
            match container_api::add_item(id, &body).await {
                Ok(_) => {
                    new_item_name.set(String::new());
                    new_item_qty.set("1".to_string());
                    load(id);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_adding.set(false);
        });
    };

    let navigate = use_navigate();
    let delete = move |_| {
        let Some(id) = container_id.get_untracked() else {
            return;
        };
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this container and its items?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match container_api::remove(id).await {
                Ok(()) => navigate("/containers", Default::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div style=styles::PAGE>
            <div style=styles::HEADER>
                <h1 style=styles::TITLE>
                    {move || {
                        container
                            .get()
                            .map(|c| c.name.unwrap_or_else(|| format!("Container #{}", c.id)))
                            .unwrap_or_else(|| "Container".to_string())
                    }}
                </h1>
                <div style=styles::ACTIONS>
                    <A href="/containers" attr:style=styles::BUTTON>
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

            <Show when=move || container.with(|c| c.is_some())>
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
                    {move || {
                        container
                            .get()
                            .and_then(|c| c.qr_code_path)
                            .map(|path| {
                                view! {
                                    <a href=api_url(&path) target="_blank" style=styles::BUTTON>
                                        "QR code"
                                    </a>
                                }
                            })
                    }}
                </div>

                <h2 style="font-size: 17px; margin: 0 0 8px 0;">"Items"</h2>
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
                            container
                                .get()
                                .map(|c| c.items)
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
                <Show when=move || {
                    container.with(|c| c.as_ref().is_some_and(|c| c.items.is_empty()))
                }>
                    <div style=styles::MUTED>"This container is empty."</div>
                </Show>

                <div style="display: flex; gap: 12px; align-items: flex-end; margin-top: 16px;">
                    <div style="display: flex; flex-direction: column; gap: 4px;">
                        <label style=styles::FIELD_LABEL>"New item"</label>
                        <input
                            style=styles::INPUT
                            placeholder="Item name"
                            prop:value=move || new_item_name.get()
                            on:input=move |ev| new_item_name.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    add_item();
                                }
                            }
                        />
                    </div>
                    <div style="display: flex; flex-direction: column; gap: 4px;">
                        <label style=styles::FIELD_LABEL>"Quantity"</label>
                        <input
                            style=format!("{} width: 70px;", styles::INPUT)
                            prop:value=move || new_item_qty.get()
                            on:input=move |ev| new_item_qty.set(event_target_value(&ev))
                        />
                    </div>
                    <button style=styles::BUTTON_PRIMARY disabled=adding on:click=move |_| add_item()>
                        {move || if adding.get() { "Adding..." } else { "Add item" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
