use contracts::domain::a001_floor::FloorCreate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::a001_floor::api as floor_api;
use crate::shared::components::styles;

#[component]
#[allow(non_snake_case)]
pub fn FloorForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let number = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let navigate = use_navigate();

    let submit = {
        let navigate = navigate.clone();
        move |_| {
            if saving.get_untracked() {
                return;
            }
            let trimmed = name.get_untracked().trim().to_string();
            let body = FloorCreate {
                name: (!trimmed.is_empty()).then_some(trimmed),
                floor_number: number.get_untracked().trim().parse::<i32>().ok(),
            };
            set_saving.set(true);
            set_error.set(None);
            let navigate = navigate.clone();
            spawn_local(async move {
                match floor_api::create(&body).await {
                    Ok(_) => navigate("/floors", Default::default()),
                    Err(e) => {
                        set_error.set(Some(e.to_string()));
                        set_saving.set(false);
                    }
                }
            });
        }
    };

    let cancel = move |_| navigate("/floors", Default::default());

    view! {
        <div style=styles::PAGE>
            <div style=styles::HEADER>
                <h1 style=styles::TITLE>"New floor"</h1>
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
                        placeholder="Ground floor"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div style="display: flex; flex-direction: column; gap: 4px;">
                    <label style=styles::FIELD_LABEL>"Floor number"</label>
                    <input
                        style=styles::INPUT
                        placeholder="0"
                        prop:value=move || number.get()
                        on:input=move |ev| number.set(event_target_value(&ev))
                    />
                </div>
                <div style=styles::ACTIONS>
                    <button style=styles::BUTTON_PRIMARY disabled=saving on:click=submit>
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
