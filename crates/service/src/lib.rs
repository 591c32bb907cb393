//! Service layer holding the in-memory resource stores.
//! - Stores are append-only and allocate sequential identifiers.
//! - Input shape checks live on the `models` input types and run before a store is touched.

pub mod errors;
pub mod metrics;
pub mod resources;
pub mod storage;

pub use resources::{create_checked, ResourceStores};
pub use storage::ResourceStore;
