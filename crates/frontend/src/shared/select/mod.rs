pub mod core;
pub mod multi;
pub mod room_filter;
pub mod single;

pub use core::{filter_local, search_mode, single_select_toggle, MultiSelection, SearchMode};
pub use multi::AsyncMultiSelect;
pub use room_filter::{use_room_filter, RoomFilter};
pub use single::AsyncSingleSelect;
