use anyhow::Result;
use model2vec_rs::model::StaticModel;
use tracing::info;

/// Texts are encoded in chunks of this many by default. Output is unaffected.
pub const DEFAULT_BATCH_SIZE: usize = 64;

const MAX_TOKEN_LENGTH: usize = 512;

/// Anything that can turn text into dense vectors.
pub trait TextEmbedder {
    /// Encodes `texts` in order, one vector per input.
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        self.embed(&[text.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Failed to generate embedding for single text: {}", text))
    }
}

pub struct EmbeddingEngine {
    model: StaticModel,
    batch_size: usize,
}

impl EmbeddingEngine {
    pub fn new(model_id: &str) -> Result<Self> {
        info!(model = model_id, "loading embedding model (first run downloads it)");
        let model = StaticModel::from_pretrained(model_id, None, None, None)?;
        info!(model = model_id, "embedding model loaded");
        Ok(Self {
            model,
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

impl TextEmbedder for EmbeddingEngine {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(self
            .model
            .encode_with_args(texts, Some(MAX_TOKEN_LENGTH), self.batch_size))
    }
}
