pub mod dropdown;
pub mod filter_buttons;
pub mod paginator;
pub mod selection;
pub mod styles;

pub use dropdown::OptionDropdown;
pub use filter_buttons::FilterButtons;
pub use paginator::Paginator;
pub use selection::{use_row_selection, RowSelection};
