use contracts::domain::a002_room::{Room, RoomCreate, RoomDetail};
use contracts::shared::paging::Paginated;
use contracts::shared::select::{OptionsPage, SelectOption};
use web_sys::AbortSignal;

use crate::shared::api_utils::api_url;
use crate::shared::fetch::{self, FetchError};

/// Fetch one page of rooms
pub async fn list(page: u32, signal: Option<AbortSignal>) -> Result<Paginated<Room>, FetchError> {
    fetch::get_json(
        &api_url(&format!("/api/rooms/?page={}", page)),
        signal.as_ref(),
    )
    .await
}

/// Fetch a room with its nested containers and items
pub async fn get(id: i64) -> Result<RoomDetail, FetchError> {
    fetch::get_json(&api_url(&format!("/api/rooms/{}", id)), None).await
}

/// Container options for a room (cascade level three)
pub async fn container_options(room_id: i64) -> Result<Vec<SelectOption>, FetchError> {
    fetch::get_json(
        &api_url(&format!("/api/rooms/{}/containers", room_id)),
        None,
    )
    .await
}

/// Search rooms by name
pub async fn search(q: &str) -> Result<Vec<SelectOption>, FetchError> {
    fetch::get_json(
        &api_url(&format!("/api/rooms/search?q={}", urlencoding::encode(q))),
        None,
    )
    .await
}

/// Bounded "show all" snapshot of room options
pub async fn list_all(limit: u32) -> Result<OptionsPage, FetchError> {
    fetch::get_json(&api_url(&format!("/api/rooms/all?limit={}", limit)), None).await
}

/// Create a new room
pub async fn create(body: &RoomCreate) -> Result<Room, FetchError> {
    fetch::post_json(&api_url("/api/rooms/"), body).await
}

/// Update a room
pub async fn update(id: i64, body: &RoomCreate) -> Result<(), FetchError> {
    fetch::put_json(&api_url(&format!("/api/rooms/{}", id)), body).await
}

/// Delete a room
pub async fn remove(id: i64) -> Result<(), FetchError> {
    fetch::delete(&api_url(&format!("/api/rooms/{}", id))).await
}
