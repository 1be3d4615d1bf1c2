pub mod aggregate;

pub use aggregate::{Container, ContainerCreate, ContainerDetail};
