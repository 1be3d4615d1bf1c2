pub mod form;
pub mod list;

pub use form::ItemForm;
pub use list::ItemList;
