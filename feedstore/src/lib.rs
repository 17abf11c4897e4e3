//! feedstore - persistence for monitored feed sources and their ingestion run log
//!
//! The schema itself lives in the `migration` crate; this crate maps it to
//! SeaORM entities and exposes the read/append operations consumers need.

pub mod config;
pub mod entity;
pub mod platform;
pub mod stats;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use platform::{Platform, UnknownPlatform};
pub use stats::RunStats;
pub use store::{NewSource, Store, StoreError};
