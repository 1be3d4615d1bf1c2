pub mod a001_floor;
pub mod a002_room;
pub mod a003_container;
pub mod a004_item;
