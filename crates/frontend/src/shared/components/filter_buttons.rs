//! Apply/Clear button pair for filter bars.
//!
//! Enablement is driven by draft-vs-applied comparison in the host page:
//! Apply is disabled while the draft equals what was last applied, Clear
//! while there is nothing to clear.

use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn FilterButtons(
    on_apply: Callback<()>,
    on_clear: Callback<()>,
    #[prop(into)] apply_disabled: Signal<bool>,
    #[prop(into)] clear_disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; gap: 4px; margin-left: auto;">
            // invisible spacer keeps the buttons level with labelled inputs
            <span style="font-size: 13px; visibility: hidden;">"spacer"</span>
            <div style="display: flex; gap: 8px;">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Primary
                    disabled=apply_disabled
                    on_click=move |_| on_apply.run(())
                >
                    "Apply"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    disabled=clear_disabled
                    on_click=move |_| on_clear.run(())
                >
                    "Clear"
                </Button>
            </div>
        </div>
    }
}
