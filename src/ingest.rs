use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::search::data_loader::load_aid_records;
use crate::search::embedding_engine::TextEmbedder;
use crate::store::{SchemaDescriptor, VectorStore};

const PROGRESS_EVERY: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The store was empty and every CSV row was uploaded.
    Uploaded { rows: usize },
    /// The store already held objects; nothing was written.
    Skipped { existing: u64 },
}

/// Loads the CSV into the store once.
///
/// The class is created when missing. Rows are embedded and uploaded only if the class is
/// empty. There is no per-row dedup and no rollback: a failure partway through leaves the
/// rows inserted so far, and the next run will then skip the upload.
pub async fn ingest<E, S>(
    embedder: &E,
    store: &S,
    schema: &SchemaDescriptor,
    csv_path: &Path,
) -> Result<IngestOutcome>
where
    E: TextEmbedder + ?Sized,
    S: VectorStore + Sync + ?Sized,
{
    if !store
        .schema_exists(schema)
        .await
        .with_context(|| format!("Failed to check schema for class '{}'", schema.class_name))?
    {
        info!(class = %schema.class_name, "class missing, creating it");
        store
            .create_schema(schema)
            .await
            .with_context(|| format!("Failed to create class '{}'", schema.class_name))?;
    }

    info!(path = ?csv_path, "loading resources CSV");
    let records = load_aid_records(csv_path)
        .with_context(|| format!("Failed to load aid records from {:?}", csv_path))?;

    let existing = store
        .count_objects(&schema.class_name)
        .await
        .with_context(|| format!("Failed to count objects in '{}'", schema.class_name))?;
    if existing > 0 {
        info!(existing, class = %schema.class_name, "objects already in store, skipping upload");
        return Ok(IngestOutcome::Skipped { existing });
    }

    info!(rows = records.len(), "vectorising and uploading rows");
    let descriptions: Vec<String> = records.iter().map(|r| r.description.clone()).collect();
    let embeddings = embedder
        .embed(&descriptions)
        .with_context(|| "Failed to generate embeddings for aid descriptions")?;
    if embeddings.len() != records.len() {
        return Err(anyhow::anyhow!(
            "Embeddings and records count mismatch: {} vs {}",
            embeddings.len(),
            records.len()
        ));
    }

    for (idx, (record, embedding)) in records.iter().zip(embeddings.iter()).enumerate() {
        store
            .insert_object(&schema.class_name, record, embedding)
            .await
            .with_context(|| format!("Failed to upload row {} ('{}')", idx, record.name))?;
        if (idx + 1) % PROGRESS_EVERY == 0 {
            info!(uploaded = idx + 1, total = records.len(), "upload progress");
        }
    }
    info!(rows = records.len(), "upload complete");

    Ok(IngestOutcome::Uploaded { rows: records.len() })
}
