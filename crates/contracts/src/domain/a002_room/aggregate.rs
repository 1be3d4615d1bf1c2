use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::a003_container::Container;
use crate::domain::a004_item::Item;

/// Room: belongs to a floor; groups containers and items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: Option<String>,
    pub floor_id: Option<i64>,
    pub created_at: NaiveDateTime,
}

impl Room {
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Room #{}", self.id))
    }
}

/// Room detail as returned by `GET /api/rooms/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetail {
    pub id: i64,
    pub name: Option<String>,
    pub floor_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub containers: Vec<Container>,
    pub items: Vec<Item>,
}

/// Body for `POST /api/rooms/` and `PUT /api/rooms/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomCreate {
    pub name: Option<String>,
    pub floor_id: Option<i64>,
}
