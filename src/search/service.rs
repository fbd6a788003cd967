use anyhow::{Context, Result};
use tracing::debug;

use crate::aid_record::{AidMatch, MATCH_FIELDS};
use crate::search::embedding_engine::TextEmbedder;
use crate::store::VectorStore;

pub const DEFAULT_TOP_K: usize = 3;

/// Semantic lookup over one class of the vector store.
pub struct SearchService<'a, E: ?Sized, S: ?Sized> {
    embedder: &'a E,
    store: &'a S,
    class_name: String,
}

impl<'a, E, S> SearchService<'a, E, S>
where
    E: TextEmbedder + ?Sized,
    S: VectorStore + Sync + ?Sized,
{
    pub fn new(embedder: &'a E, store: &'a S, class_name: &str) -> Self {
        Self {
            embedder,
            store,
            class_name: class_name.to_string(),
        }
    }

    /// The `k` stored programs nearest to `query`, exactly as the store ranks them.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<AidMatch>> {
        let query_embedding = self
            .embedder
            .embed_one(query)
            .with_context(|| format!("Failed to generate embedding for query: {}", query))?;

        let matches = self
            .store
            .nearest(&self.class_name, MATCH_FIELDS, &query_embedding, k)
            .await
            .with_context(|| format!("Nearest-vector query against '{}' failed", self.class_name))?;
        debug!(query, hits = matches.len(), "search complete");
        Ok(matches)
    }
}
