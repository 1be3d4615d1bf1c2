use contracts::domain::a004_item::ItemCreate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use contracts::shared::select::SelectOption;

use crate::domain::a004_item::api as item_api;
use crate::shared::cascade::use_floor_room_selection;
use crate::shared::components::styles;
use crate::shared::components::OptionDropdown;
use crate::shared::select::{filter_local, AsyncSingleSelect};

/// Item creation: floor and room cascade with auto-advance, then an
/// optional container pick. Submit stays disabled until a room is
/// resolved and a name is present.
#[component]
#[allow(non_snake_case)]
pub fn ItemForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let quantity = RwSignal::new("1".to_string());
    let selection = use_floor_room_selection(true);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let navigate = use_navigate();

    // The container pick filters the preloaded cascade options locally;
    // picking the same container again clears it.
    let container_value = RwSignal::new(None::<SelectOption>);
    let container_search = move |q: String| {
        let options = selection.containers.get_untracked().unwrap_or_default();
        async move { Ok(filter_local(&options, &q)) }
    };

    // Changing floor or room resets the cascade's container id; mirror
    // that into the select's value.
    Effect::new(move |_| {
        if selection.selected_container_id.get().is_none() {
            container_value.set(None);
        }
    });

    let form_valid = move || {
        !name.with(|n| n.trim().is_empty()) && selection.room_resolved()
    };

    let submit = {
        let navigate = navigate.clone();
        move |_| {
            if saving.get_untracked() || !form_valid() {
                return;
            }
            let mut body = ItemCreate::new(name.get_untracked().trim().to_string());
            body.room_id = selection.selected_room_id.get_untracked();
            body.container_id = selection.selected_container_id.get_untracked();
            if let Ok(qty) = quantity.get_untracked().trim().parse::<i64>() {
                body.quantity = qty.max(1);
            }
            set_saving.set(true);
            set_error.set(None);
            let navigate = navigate.clone();
            spawn_local(async move {
                match item_api::create(&body).await {
                    Ok(_) => navigate("/items", Default::default()),
                    Err(e) => {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                    }
                }
            });
        }
    };

    let cancel = move |_| navigate("/items", Default::default());

    view! {
        <div style=styles::PAGE>
            <div style=styles::HEADER>
                <h1 style=styles::TITLE>"New item"</h1>
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
                        placeholder="Cordless drill"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div style="display: flex; flex-direction: column; gap: 4px;">
                    <label style=styles::FIELD_LABEL>"Quantity"</label>
                    <input
                        style=format!("{} width: 80px;", styles::INPUT)
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
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

                // Containers are optional; the dropdown only shows once the
                // room has any.
                <Show when=move || {
                    selection.containers.with(|c| c.as_ref().is_some_and(|c| !c.is_empty()))
                }>
                    <AsyncSingleSelect
                        search_fn=container_search
                        value=container_value
                        on_change=Callback::new(move |picked: Option<SelectOption>| {
                            selection.handle_container_change(picked.map(|o| o.id));
                        })
                        placeholder="No container"
                        debounce_ms=0u32
                        min_search_length=0usize
                        label="Container (optional)"
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
