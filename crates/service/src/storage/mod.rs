//! Storage abstractions for service layer
//!
//! Process-local, non-persistent collections. Everything held here is
//! discarded when the process exits.

pub mod resource_store;

pub use resource_store::ResourceStore;
