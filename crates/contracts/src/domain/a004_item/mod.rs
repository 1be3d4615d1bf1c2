pub mod aggregate;

pub use aggregate::{Item, ItemCreate, ItemUpdate};
