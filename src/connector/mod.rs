//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Scoring (ONNX Runtime cross-encoder, deterministic mock)
//! - HTTP API (axum router, controllers, configuration)

pub mod adapter;
pub mod api;

pub use adapter::*;
