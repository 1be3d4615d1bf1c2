pub mod details;
pub mod form;
pub mod list;

pub use details::RoomDetailPage;
pub use form::RoomForm;
pub use list::RoomList;
