use contracts::domain::a002_room::RoomCreate;
use contracts::shared::select::SelectOption;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::a001_floor::api as floor_api;
use crate::domain::a002_room::api as room_api;
use crate::shared::cascade::{resolve_level, LevelOutcome};
use crate::shared::components::styles;
use crate::shared::components::OptionDropdown;

/// Room creation. The floor choice follows the one-vs-many rule: a single
/// floor is picked silently, more than one renders a dropdown.
#[component]
#[allow(non_snake_case)]
pub fn RoomForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let floors = RwSignal::new(None::<Vec<SelectOption>>);
    let selected_floor_id = RwSignal::new(None::<i64>);
    let show_floor_dropdown = RwSignal::new(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let navigate = use_navigate();

    spawn_local(async move {
        match floor_api::list(1, None).await {
            Ok(page) => {
                let options: Vec<SelectOption> = page
                    .items
                    .iter()
                    .map(|f| SelectOption {
                        id: f.id,
                        name: Some(f.label()),
                    })
                    .collect();
                match resolve_level(&options) {
                    LevelOutcome::Empty => {}
                    LevelOutcome::AutoSelect(id) => selected_floor_id.set(Some(id)),
                    LevelOutcome::ShowDropdown => show_floor_dropdown.set(true),
                }
                floors.set(Some(options));
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    });

    let form_valid = move || {
        !name.with(|n| n.trim().is_empty()) && selected_floor_id.get().is_some()
    };

    let submit = {
        let navigate = navigate.clone();
        move |_| {
            if saving.get_untracked() || !form_valid() {
                return;
            }
            let body = RoomCreate {
                name: Some(name.get_untracked().trim().to_string()),
                floor_id: selected_floor_id.get_untracked(),
            };
            set_saving.set(true);
            set_error.set(None);
            let navigate = navigate.clone();
            spawn_local(async move {
                match room_api::create(&body).await {
                    Ok(room) => navigate(&format!("/rooms/{}", room.id), Default::default()),
                    Err(e) => {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                    }
                }
            });
        }
    };

    let cancel = move |_| navigate("/rooms", Default::default());

    view! {
        <div style=styles::PAGE>
            <div style=styles::HEADER>
                <h1 style=styles::TITLE>"New room"</h1>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div style=styles::ERROR_BOX>{format!("Error: {e}")}</div> })
            }}

            <div style="display: flex; flex-direction: column; gap: 14px; max-width: 360px;">
                <div style="display: flex; flex-direction: column; gap: 4px;">
                    <label style=styles::FIELD_LABEL>"Name"</label>
                    <input
                        style=styles::INPUT
                        placeholder="Kitchen"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>

                <Show when=move || show_floor_dropdown.get()>
                    <OptionDropdown
                        options=Signal::derive(move || floors.get().unwrap_or_default())
                        selected=Signal::derive(move || selected_floor_id.get())
                        on_select=Callback::new(move |id| selected_floor_id.set(id))
                        placeholder="Select floor..."
                        label="Floor"
                    />
                </Show>
                <Show when=move || floors.with(|f| f.as_ref().is_some_and(|f| f.is_empty()))>
                    <div style=styles::MUTED>"Create a floor first."</div>
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
