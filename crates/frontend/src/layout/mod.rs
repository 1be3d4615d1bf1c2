use leptos::prelude::*;
use leptos_router::components::A;

const NAV: &str = "display: flex; gap: 4px; align-items: center; padding: 10px 24px; border-bottom: 1px solid #e0e0e0; background: #fff; font-family: system-ui, sans-serif;";
const NAV_LINK: &str = "padding: 6px 12px; border-radius: 4px; text-decoration: none; color: #333; font-size: 14px;";
const BRAND: &str = "font-weight: 700; font-size: 16px; margin-right: 16px;";

#[component]
#[allow(non_snake_case)]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav style=NAV>
            <span style=BRAND>"Home Inventory"</span>
            <A href="/floors" attr:style=NAV_LINK>
                "Floors"
            </A>
            <A href="/rooms" attr:style=NAV_LINK>
                "Rooms"
            </A>
            <A href="/containers" attr:style=NAV_LINK>
                "Containers"
            </A>
            <A href="/items" attr:style=NAV_LINK>
                "Items"
            </A>
        </nav>
    }
}
