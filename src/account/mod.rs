//! Account and session module
//!
//! Implements the flat account list, exact-match credential checks, the
//! single-session state machine, and the lazy schema migration of stored
//! records.

pub mod store;
pub mod types;

pub use store::AccountStore;
pub use types::{Account, SCHEMA_VERSION};
