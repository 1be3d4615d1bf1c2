//! Plain `<select>` over a list of options, used by the cascade levels.

use contracts::shared::select::SelectOption;
use leptos::prelude::*;

#[component]
pub fn OptionDropdown(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] selected: Signal<Option<i64>>,
    /// Emits the parsed id, or `None` for the placeholder row.
    on_select: Callback<Option<i64>>,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; gap: 4px;">
            {label.map(|l| view! { <label style="font-size: 13px; color: #666;">{l}</label> })}
            <select
                on:change=move |ev| {
                    on_select.run(event_target_value(&ev).parse::<i64>().ok());
                }
                prop:value=move || {
                    selected
                        .get()
                        .map(|id| id.to_string())
                        .unwrap_or_default()
                }
                style="width: 260px; padding: 7px 10px; border: 1px solid #ddd; border-radius: 4px; background: white; font-size: 14px;"
            >
                <option value="" selected=move || selected.get().is_none()>
                    {placeholder}
                </option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let id = option.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    selected=move || selected.get() == Some(id)
                                >
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
