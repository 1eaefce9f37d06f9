//! HTTP layer: configuration, router construction, the document endpoint,
//! and per-domain resolvers.

pub mod config;
pub mod document;
pub mod error;
pub mod resolvers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
