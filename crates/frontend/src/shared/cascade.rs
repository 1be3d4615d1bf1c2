//! Cascading floor → room (→ container) selection for the create forms.
//!
//! Floors load on mount. A level with exactly one option auto-advances
//! without rendering a dropdown; more than one shows a dropdown and
//! waits. Changing an ancestor resets and reloads every descendant
//! level. Containers are always optional and never auto-required.

use contracts::shared::select::SelectOption;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_floor::api as floor_api;
use crate::domain::a002_room::api as room_api;

/// One-vs-many rule for a cascade level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    /// Nothing to pick; the level stays unresolved.
    Empty,
    /// Exactly one option: advance without rendering a dropdown.
    AutoSelect(i64),
    /// The user has to choose.
    ShowDropdown,
}

pub fn resolve_level(options: &[SelectOption]) -> LevelOutcome {
    match options {
        [] => LevelOutcome::Empty,
        [only] => LevelOutcome::AutoSelect(only.id),
        _ => LevelOutcome::ShowDropdown,
    }
}

#[derive(Clone, Copy)]
pub struct FloorRoomSelection {
    pub floors: RwSignal<Option<Vec<SelectOption>>>,
    pub rooms: RwSignal<Option<Vec<SelectOption>>>,
    pub containers: RwSignal<Option<Vec<SelectOption>>>,
    pub selected_floor_id: RwSignal<Option<i64>>,
    pub selected_room_id: RwSignal<Option<i64>>,
    pub selected_container_id: RwSignal<Option<i64>>,
    pub show_floor_dropdown: RwSignal<bool>,
    pub show_room_dropdown: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    with_containers: bool,
}

/// Create the cascade controller and start loading floors.
///
/// `with_containers` enables the third level for forms that place items
/// into containers; container forms stop at the room.
pub fn use_floor_room_selection(with_containers: bool) -> FloorRoomSelection {
    let selection = FloorRoomSelection {
        floors: RwSignal::new(None),
        rooms: RwSignal::new(None),
        containers: RwSignal::new(None),
        selected_floor_id: RwSignal::new(None),
        selected_room_id: RwSignal::new(None),
        selected_container_id: RwSignal::new(None),
        show_floor_dropdown: RwSignal::new(false),
        show_room_dropdown: RwSignal::new(false),
        error: RwSignal::new(None),
        with_containers,
    };
    selection.load_floors();
    selection
}

impl FloorRoomSelection {
    fn load_floors(self) {
        spawn_local(async move {
            match floor_api::list(1, None).await {
                Ok(page) => {
                    let options: Vec<SelectOption> = page
                        .items
                        .iter()
                        .map(|f| SelectOption {
                            id: f.id,
                            name: Some(f.label()),
                        })
                        .collect();
                    let outcome = resolve_level(&options);
                    self.floors.set(Some(options));
                    match outcome {
                        LevelOutcome::AutoSelect(floor_id) => {
                            self.selected_floor_id.set(Some(floor_id));
                            self.load_rooms(floor_id);
                        }
                        LevelOutcome::ShowDropdown => self.show_floor_dropdown.set(true),
                        LevelOutcome::Empty => {}
                    }
                }
                Err(e) => self.error.set(Some(e.to_string())),
            }
        });
    }

    fn load_rooms(self, floor_id: i64) {
        spawn_local(async move {
            match floor_api::room_options(floor_id).await {
                Ok(options) => {
                    let outcome = resolve_level(&options);
                    self.rooms.set(Some(options));
                    match outcome {
                        LevelOutcome::AutoSelect(room_id) => {
                            self.selected_room_id.set(Some(room_id));
                            if self.with_containers {
                                self.load_containers(room_id);
                            }
                        }
                        LevelOutcome::ShowDropdown => self.show_room_dropdown.set(true),
                        LevelOutcome::Empty => {}
                    }
                }
                Err(e) => self.error.set(Some(e.to_string())),
            }
        });
    }

    fn load_containers(self, room_id: i64) {
        spawn_local(async move {
            match room_api::container_options(room_id).await {
                Ok(options) => self.containers.set(Some(options)),
                Err(e) => self.error.set(Some(e.to_string())),
            }
        });
    }

    /// Floor dropdown change: reset every descendant level, then reload.
    pub fn handle_floor_change(self, floor_id: i64) {
        self.selected_floor_id.set(Some(floor_id));
        self.selected_room_id.set(None);
        self.selected_container_id.set(None);
        self.show_room_dropdown.set(false);
        self.rooms.set(None);
        self.containers.set(None);
        self.load_rooms(floor_id);
    }

    /// Room dropdown change: reset the container level, then reload it.
    pub fn handle_room_change(self, room_id: i64) {
        self.selected_room_id.set(Some(room_id));
        self.selected_container_id.set(None);
        self.containers.set(None);
        if self.with_containers {
            self.load_containers(room_id);
        }
    }

    pub fn handle_container_change(self, container_id: Option<i64>) {
        self.selected_container_id.set(container_id);
    }

    /// Required selections present? Submit stays disabled until true.
    pub fn room_resolved(&self) -> bool {
        self.selected_room_id.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(ids: &[i64]) -> Vec<SelectOption> {
        ids.iter()
            .map(|&id| SelectOption {
                id,
                name: Some(format!("option {}", id)),
            })
            .collect()
    }

    #[test]
    fn one_option_auto_advances() {
        assert_eq!(resolve_level(&opts(&[5])), LevelOutcome::AutoSelect(5));
    }

    #[test]
    fn many_options_need_the_user() {
        assert_eq!(resolve_level(&opts(&[1, 2, 3])), LevelOutcome::ShowDropdown);
    }

    #[test]
    fn empty_level_stays_unresolved() {
        assert_eq!(resolve_level(&[]), LevelOutcome::Empty);
    }
}
