mod rerank_documents;

pub use rerank_documents::*;
