//! SQLite-backed key/value configuration with tiered resolution.

mod error;
mod resolver;
mod store;

pub use error::StoreError;
pub use resolver::ConfigResolver;
pub use store::ConfigStore;
