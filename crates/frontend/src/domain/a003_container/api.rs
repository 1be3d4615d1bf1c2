use contracts::domain::a003_container::{Container, ContainerCreate, ContainerDetail};
use contracts::domain::a004_item::{Item, ItemCreate};
use contracts::shared::filters::ContainerFilters;
use contracts::shared::paging::Paginated;
use contracts::shared::select::{OptionsPage, SelectOption};
use web_sys::AbortSignal;

use crate::shared::api_utils::{api_url, join_ids};
use crate::shared::fetch::{self, FetchError};

fn list_query(page: u32, filters: Option<&ContainerFilters>) -> String {
    let mut params = format!("?page={}", page);
    if let Some(f) = filters {
        if let Some(name) = f.name.as_deref().filter(|n| !n.is_empty()) {
            params += &format!("&name={}", urlencoding::encode(name));
        }
        if let Some(rooms) = f.rooms.as_deref().filter(|r| !r.is_empty()) {
            params += &format!("&rooms={}", join_ids(rooms));
        }
    }
    params
}

/// Fetch one page of containers, optionally filtered
pub async fn list(
    page: u32,
    filters: Option<ContainerFilters>,
    signal: Option<AbortSignal>,
) -> Result<Paginated<Container>, FetchError> {
    let url = api_url(&format!(
        "/api/containers/{}",
        list_query(page, filters.as_ref())
    ));
    fetch::get_json(&url, signal.as_ref()).await
}

/// Fetch a container with all its items
pub async fn get(id: i64) -> Result<ContainerDetail, FetchError> {
    fetch::get_json(&api_url(&format!("/api/containers/{}", id)), None).await
}

/// Search containers by name, optionally restricted to rooms
pub async fn search(q: &str, rooms: &[i64]) -> Result<Vec<SelectOption>, FetchError> {
    let mut params = format!("?q={}", urlencoding::encode(q));
    if !rooms.is_empty() {
        params += &format!("&rooms={}", join_ids(rooms));
    }
    fetch::get_json(&api_url(&format!("/api/containers/search{}", params)), None).await
}

/// Bounded "show all" snapshot of container options
pub async fn list_all(limit: u32) -> Result<OptionsPage, FetchError> {
    fetch::get_json(
        &api_url(&format!("/api/containers/all?limit={}", limit)),
        None,
    )
    .await
}

/// Create a new container
pub async fn create(body: &ContainerCreate) -> Result<Container, FetchError> {
    fetch::post_json(&api_url("/api/containers/"), body).await
}

/// Add an item directly to a container
pub async fn add_item(container_id: i64, body: &ItemCreate) -> Result<Item, FetchError> {
    fetch::post_json(
        &api_url(&format!("/api/containers/{}/items/", container_id)),
        body,
    )
    .await
}

/// Update a container
pub async fn update(id: i64, body: &ContainerCreate) -> Result<(), FetchError> {
    fetch::put_json(&api_url(&format!("/api/containers/{}", id)), body).await
}

/// Delete a container
pub async fn remove(id: i64) -> Result<(), FetchError> {
    fetch::delete(&api_url(&format!("/api/containers/{}", id))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_includes_only_set_filters() {
        assert_eq!(list_query(2, None), "?page=2");

        let filters = ContainerFilters {
            name: Some("bin".into()),
            rooms: Some(vec![1, 4]),
        };
        assert_eq!(
            list_query(1, Some(&filters)),
            "?page=1&name=bin&rooms=1,4"
        );

        let empty = ContainerFilters {
            name: Some(String::new()),
            rooms: Some(Vec::new()),
        };
        assert_eq!(list_query(3, Some(&empty)), "?page=3");
    }
}
