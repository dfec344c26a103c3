//! Domain entities consumed by the dashboard pages.
//!
//! All entities are owned and mutated by the backend; this crate holds
//! read-only copies scoped to a cache entry's lifetime. Fields the backend
//! does not always supply stay optional instead of carrying placeholder text.

pub mod agency;
pub mod billing;
pub mod contract;
pub mod document;
pub mod log;
pub mod payment;
pub mod property;
pub mod types;
pub mod user;
