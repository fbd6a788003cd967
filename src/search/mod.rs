pub mod data_loader;
pub mod embedding_engine;
pub mod service;

pub use embedding_engine::{EmbeddingEngine, TextEmbedder};
pub use service::{SearchService, DEFAULT_TOP_K};
