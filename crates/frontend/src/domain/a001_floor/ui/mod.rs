pub mod details;
pub mod form;
pub mod list;

pub use details::FloorDetailPage;
pub use form::FloorForm;
pub use list::FloorList;
