use contracts::domain::a004_item::{Item, ItemCreate, ItemUpdate};
use contracts::shared::filters::ItemFilters;
use contracts::shared::paging::Paginated;
use web_sys::AbortSignal;

use crate::shared::api_utils::{api_url, join_ids};
use crate::shared::fetch::{self, FetchError};

fn list_query(page: u32, filters: Option<&ItemFilters>) -> String {
    let mut params = format!("?page={}", page);
    if let Some(f) = filters {
        if let Some(name) = f.name.as_deref().filter(|n| !n.is_empty()) {
            params += &format!("&name={}", urlencoding::encode(name));
        }
        if let Some(rooms) = f.rooms.as_deref().filter(|r| !r.is_empty()) {
            params += &format!("&rooms={}", join_ids(rooms));
        }
        if let Some(containers) = f.containers.as_deref().filter(|c| !c.is_empty()) {
            params += &format!("&containers={}", join_ids(containers));
        }
    }
    params
}

/// Fetch one page of items, optionally filtered by name/rooms/containers
pub async fn list(
    page: u32,
    filters: Option<ItemFilters>,
    signal: Option<AbortSignal>,
) -> Result<Paginated<Item>, FetchError> {
    let url = api_url(&format!("/api/items/{}", list_query(page, filters.as_ref())));
    fetch::get_json(&url, signal.as_ref()).await
}

/// Create an item in a room (optionally inside a container)
pub async fn create(body: &ItemCreate) -> Result<Item, FetchError> {
    fetch::post_json(&api_url("/api/items/"), body).await
}

/// Update an item's name or quantity
pub async fn update(id: i64, body: &ItemUpdate) -> Result<(), FetchError> {
    fetch::put_json(&api_url(&format!("/api/items/{}/", id)), body).await
}

/// Delete an item, or decrement its quantity when `quantity` is given
/// and less than the current amount.
pub async fn remove(id: i64, quantity: Option<i64>) -> Result<(), FetchError> {
    let url = match quantity {
        Some(q) => api_url(&format!("/api/items/{}?quantity={}", id, q)),
        None => api_url(&format!("/api/items/{}", id)),
    };
    fetch::delete(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_joins_id_filters() {
        let filters = ItemFilters {
            name: Some("drill bit".into()),
            rooms: Some(vec![5]),
            containers: Some(vec![2, 7]),
        };
        assert_eq!(
            list_query(1, Some(&filters)),
            "?page=1&name=drill%20bit&rooms=5&containers=2,7"
        );
    }

    #[test]
    fn list_query_without_filters() {
        assert_eq!(list_query(4, None), "?page=4");
        assert_eq!(list_query(1, Some(&ItemFilters::default())), "?page=1");
    }
}
