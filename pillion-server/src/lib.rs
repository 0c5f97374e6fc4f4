//! HTTP surface for the Pillion location engine.
//!
//! Wires the vendor adapters from `pillion-providers` into a small REST
//! API: aggregated place search, turn-by-turn directions with vendor
//! fallback, three-word-address search and conversion, and a client
//! configuration endpoint. All orchestration lives here; the adapters
//! stay vendor-shaped and the core stays pure.

#![forbid(unsafe_code)]

pub mod config;
pub mod directions;
pub mod error;
pub mod routes;
pub mod search;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
