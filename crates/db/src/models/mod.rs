//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `*Summary` payload struct adding per-read computed aggregates
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for partial updates

pub mod organization;
pub mod project;
pub mod stats;
pub mod status;
pub mod task;
pub mod task_comment;
