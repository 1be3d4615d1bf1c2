pub mod filters;
pub mod paging;
pub mod select;

pub use filters::{ContainerFilters, ItemFilters};
pub use paging::Paginated;
pub use select::{OptionsPage, SelectOption};
