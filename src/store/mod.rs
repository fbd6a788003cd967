pub mod endpoints;
pub mod memory;
pub mod weaviate;

use async_trait::async_trait;
use thiserror::Error;

use crate::aid_record::{AidMatch, AidRecord};

pub use memory::MemoryStore;
pub use weaviate::WeaviateClient;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("GraphQL error: {0}")]
    GraphQl(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Class already exists: {0}")]
    ClassExists(String),
    #[error("Unknown class: {0}")]
    UnknownClass(String),
}

/// Class definition for a collection whose vectors are supplied by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub class_name: String,
    pub description: String,
    pub properties: Vec<String>,
}

impl SchemaDescriptor {
    /// Vectorizer mode: the store never computes vectors itself.
    pub const VECTORIZER: &'static str = "none";

    /// The aid program collection, every property text-typed.
    pub fn aid_programs(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            description: "Local aid programs (manual vectors)".to_string(),
            properties: ["name", "type", "city", "description", "contact"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// A vector database holding aid records.
#[async_trait]
pub trait VectorStore {
    async fn schema_exists(&self, schema: &SchemaDescriptor) -> Result<bool, StoreError>;

    /// Fails with an error if the class already exists.
    async fn create_schema(&self, schema: &SchemaDescriptor) -> Result<(), StoreError>;

    async fn count_objects(&self, class_name: &str) -> Result<u64, StoreError>;

    /// Appends one object and returns the id the store assigned to it.
    async fn insert_object(
        &self,
        class_name: &str,
        record: &AidRecord,
        vector: &[f32],
    ) -> Result<String, StoreError>;

    /// Up to `k` stored objects closest to `vector`, nearest first.
    async fn nearest(
        &self,
        class_name: &str,
        fields: &[&str],
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<AidMatch>, StoreError>;
}
