//! Pure domain logic shared by the store and API layers.
//!
//! Nothing in this crate touches the network or the database; it holds the
//! shared ID/timestamp aliases, the domain error classification, slug
//! derivation, and the completion-rate arithmetic.

pub mod error;
pub mod slug;
pub mod stats;
pub mod types;
