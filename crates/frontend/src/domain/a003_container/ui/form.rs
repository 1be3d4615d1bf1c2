use contracts::domain::a003_container::ContainerCreate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::a003_container::api as container_api;
use crate::shared::cascade::use_floor_room_selection;
use crate::shared::components::styles;
use crate::shared::components::OptionDropdown;

#[component]
#[allow(non_snake_case)]
pub fn ContainerForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let selection = use_floor_room_selection(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let navigate = use_navigate();

    let form_valid = move || {
        !name.with(|n| n.trim().is_empty()) && selection.room_resolved()
    };

    let submit = {
        let navigate = navigate.clone();
        move |_| {
            if saving.get_untracked() || !form_valid() {
                return;
            }
            let body = ContainerCreate {
                name: Some(name.get_untracked().trim().to_string()),
                room_id: selection.selected_room_id.get_untracked(),
            };
            set_saving.set(true);
            set_error.set(None);
            let navigate = navigate.clone();
            spawn_local(async move {
                match container_api::create(&body).await {
                    Ok(container) => {
                        navigate(&format!("/containers/{}", container.id), Default::default())
                    }
                    Err(e) => {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                    }
                }
            });
        }
    };

    let cancel = move |_| navigate("/containers", Default::default());

    view! {
        <div style=styles::PAGE>
            <div style=styles::HEADER>
                <h1 style=styles::TITLE>"New container"</h1>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div style=styles::ERROR_BOX>{format!("Error: {e}")}</div> })
            }}
            {move || {
                selection
                    .error
                    .get()
                    .map(|e| view! { <div style=styles::ERROR_BOX>{format!("Error: {e}")}</div> })
            }}

            <div style="display: flex; flex-direction: column; gap: 14px; max-width: 360px;">
                <div style="display: flex; flex-direction: column; gap: 4px;">
                    <label style=styles::FIELD_LABEL>"Name"</label>
                    <input
                        style=styles::INPUT
                        placeholder="Blue crate"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>

                <Show when=move || selection.show_floor_dropdown.get()>
                    <OptionDropdown
                        options=Signal::derive(move || {
                            selection.floors.get().unwrap_or_default()
                        })
                        selected=Signal::derive(move || selection.selected_floor_id.get())
                        on_select=Callback::new(move |id| {
                            if let Some(id) = id {
                                selection.handle_floor_change(id);
                            }
                        })
                        placeholder="Select floor..."
                        label="Floor"
                    />
                </Show>

                <Show when=move || selection.show_room_dropdown.get()>
                    <OptionDropdown
                        options=Signal::derive(move || selection.rooms.get().unwrap_or_default())
                        selected=Signal::derive(move || selection.selected_room_id.get())
                        on_select=Callback::new(move |id| {
                            if let Some(id) = id {
                                selection.handle_room_change(id);
                            }
                        })
                        placeholder="Select room..."
                        label="Room"
                    />
                </Show>

                <Show when=move || {
                    selection.floors.with(|f| f.as_ref().is_some_and(|f| f.is_empty()))
                }>
                    <div style=styles::MUTED>"Create a floor with a room first."</div>
                </Show>

                <div style=styles::ACTIONS>
                    <button
                        style=styles::BUTTON_PRIMARY
                        disabled=move || saving.get() || !form_valid()
                        on:click=submit
                    >
                        {move || if saving.get() { "Creating..." } else { "Create" }}
                    </button>
                    <button style=styles::BUTTON on:click=cancel>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
