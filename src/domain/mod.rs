//! # Domain Layer
//!
//! Core models and errors for document reranking.
//! This layer is independent of external frameworks and infrastructure.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
