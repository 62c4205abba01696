pub mod policy;
pub mod store;

pub use policy::{PolicyError, PriorityPolicy};
pub use store::{PolicySnapshot, PolicyStore};
