use contracts::domain::a001_floor::{Floor, FloorCreate, FloorDetail};
use contracts::shared::paging::Paginated;
use contracts::shared::select::SelectOption;
use web_sys::AbortSignal;

use crate::shared::api_utils::api_url;
use crate::shared::fetch::{self, FetchError};

/// Fetch one page of floors
pub async fn list(page: u32, signal: Option<AbortSignal>) -> Result<Paginated<Floor>, FetchError> {
    fetch::get_json(
        &api_url(&format!("/api/floors/?page={}", page)),
        signal.as_ref(),
    )
    .await
}

/// Fetch a floor with its nested rooms
pub async fn get(id: i64) -> Result<FloorDetail, FetchError> {
    fetch::get_json(&api_url(&format!("/api/floors/{}", id)), None).await
}

/// Room options for a floor (cascade level two)
pub async fn room_options(floor_id: i64) -> Result<Vec<SelectOption>, FetchError> {
    fetch::get_json(&api_url(&format!("/api/floors/{}/rooms", floor_id)), None).await
}

/// Create a new floor
pub async fn create(body: &FloorCreate) -> Result<Floor, FetchError> {
    fetch::post_json(&api_url("/api/floors/"), body).await
}

/// Update a floor's name or number
pub async fn update(id: i64, body: &FloorCreate) -> Result<(), FetchError> {
    fetch::put_json(&api_url(&format!("/api/floors/{}", id)), body).await
}

/// Delete a floor
pub async fn remove(id: i64) -> Result<(), FetchError> {
    fetch::delete(&api_url(&format!("/api/floors/{}", id))).await
}
