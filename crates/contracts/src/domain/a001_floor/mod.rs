pub mod aggregate;

pub use aggregate::{Floor, FloorCreate, FloorDetail};
