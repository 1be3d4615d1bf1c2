use serde::{Deserialize, Serialize};

use crate::domain::a004_item::Item;

/// Container: belongs to a room; groups items.
///
/// `item_count` is computed server-side for list rows so tables can show
/// it without fetching the detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub id: i64,
    pub name: Option<String>,
    pub room_id: Option<i64>,
    pub qr_code_path: Option<String>,
    #[serde(default)]
    pub item_count: i64,
}

impl Container {
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Container #{}", self.id))
    }
}

/// Container detail as returned by `GET /api/containers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerDetail {
    pub id: i64,
    pub name: Option<String>,
    pub room_id: Option<i64>,
    pub qr_code_path: Option<String>,
    pub items: Vec<Item>,
}

/// Body for `POST /api/containers/` and `PUT /api/containers/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContainerCreate {
    pub name: Option<String>,
    pub room_id: Option<i64>,
}
