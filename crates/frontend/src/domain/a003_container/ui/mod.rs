pub mod details;
pub mod form;
pub mod list;

pub use details::ContainerDetailPage;
pub use form::ContainerForm;
pub use list::ContainerList;
