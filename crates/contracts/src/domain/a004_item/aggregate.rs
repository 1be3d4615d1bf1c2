use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Item: belongs to a room and optionally a container; has a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub room_id: i64,
    pub container_id: Option<i64>,
    pub quantity: i64,
    pub created_at: NaiveDateTime,
}

fn default_quantity() -> i64 {
    1
}

/// Body for `POST /api/items/` and `POST /api/containers/{id}/items/`.
///
/// `room_id` is required when posting to `/api/items/`; the container
/// route derives it from the container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_id: Option<i64>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

impl ItemCreate {
    pub fn new(name: String) -> Self {
        Self {
            name,
            room_id: None,
            container_id: None,
            quantity: 1,
        }
    }
}

/// Body for `PUT /api/items/{id}`; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_create_defaults_quantity_to_one() {
        let body: ItemCreate = serde_json::from_str(r#"{"name":"Drill","room_id":5}"#).unwrap();
        assert_eq!(body.quantity, 1);
        assert_eq!(body.room_id, Some(5));
        assert_eq!(body.container_id, None);
    }

    #[test]
    fn item_create_skips_absent_container() {
        let body = ItemCreate {
            name: "Drill".into(),
            room_id: Some(5),
            container_id: None,
            quantity: 1,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("container_id"));
        assert!(json.contains(r#""room_id":5"#));
    }

    #[test]
    fn item_deserializes_null_container() {
        let item: Item = serde_json::from_str(
            r#"{"id":1,"name":"Drill","room_id":5,"container_id":null,"quantity":1,"created_at":"2025-03-15T14:02:26.123456"}"#,
        )
        .unwrap();
        assert_eq!(item.container_id, None);
        assert_eq!(item.quantity, 1);
    }
}
