use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_floor::ui::{FloorDetailPage, FloorForm, FloorList};
use crate::domain::a002_room::ui::{RoomDetailPage, RoomForm, RoomList};
use crate::domain::a003_container::ui::{ContainerDetailPage, ContainerForm, ContainerList};
use crate::domain::a004_item::ui::{ItemForm, ItemList};
use crate::layout::NavBar;

#[component]
#[allow(non_snake_case)]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main>
                <Routes fallback=|| {
                    view! {
                        <p style="padding: 24px; font-family: system-ui, sans-serif;">
                            "Page not found."
                        </p>
                    }
                }>
                    <Route path=path!("/") view=FloorList />
                    <Route path=path!("/floors") view=FloorList />
                    <Route path=path!("/floors/new") view=FloorForm />
                    <Route path=path!("/floors/:id") view=FloorDetailPage />
                    <Route path=path!("/rooms") view=RoomList />
                    <Route path=path!("/rooms/new") view=RoomForm />
                    <Route path=path!("/rooms/:id") view=RoomDetailPage />
                    <Route path=path!("/containers") view=ContainerList />
                    <Route path=path!("/containers/new") view=ContainerForm />
                    <Route path=path!("/containers/:id") view=ContainerDetailPage />
                    <Route path=path!("/items") view=ItemList />
                    <Route path=path!("/items/new") view=ItemForm />
                </Routes>
            </main>
        </Router>
    }
}
