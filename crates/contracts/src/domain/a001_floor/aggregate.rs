use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::a002_room::Room;

/// Floor: top-level physical location grouping rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    pub id: i64,
    pub name: Option<String>,
    pub floor_number: Option<i32>,
    pub created_at: NaiveDateTime,
}

impl Floor {
    /// Display label for dropdowns and tables.
    pub fn label(&self) -> String {
        match (&self.name, self.floor_number) {
            (Some(name), _) => name.clone(),
            (None, Some(n)) => format!("Floor {}", n),
            (None, None) => format!("Floor #{}", self.id),
        }
    }
}

/// Floor detail as returned by `GET /api/floors/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorDetail {
    pub id: i64,
    pub name: Option<String>,
    pub floor_number: Option<i32>,
    pub created_at: NaiveDateTime,
    pub rooms: Vec<Room>,
}

/// Body for `POST /api/floors/` and `PUT /api/floors/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloorCreate {
    pub name: Option<String>,
    pub floor_number: Option<i32>,
}
