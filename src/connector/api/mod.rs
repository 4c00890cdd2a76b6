pub mod config;
pub mod container;
pub mod controller;
pub mod error;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use container::Container;
pub use error::ApiError;
pub use router::build_router;
pub use server::serve;
