pub mod application;
pub mod connector;
pub mod domain;

pub use application::{RerankDocumentsUseCase, ScoringService};

pub use connector::api::{build_router, serve, Container, ServerConfig};
pub use connector::{MockScoring, OrtScoring};

pub use domain::{
    Document, DomainError, RankedDocument, RerankRequest, RerankResponse, ScoredDocument,
};
