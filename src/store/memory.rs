//! In-process vector store with cosine ranking.
//!
//! Used for `--offline` runs, where nothing outlives the process, and by the tests.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{SchemaDescriptor, StoreError, VectorStore};
use crate::aid_record::{AidMatch, AidRecord};

type Float = f32;

#[derive(Debug, Clone)]
struct StoredObject {
    record: AidRecord,
    /// L2-normalized at insert time.
    vector: Vec<Float>,
}

#[derive(Debug, Default)]
struct Collections {
    classes: HashMap<String, Vec<StoredObject>>,
    next_id: u64,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl VectorStore for MemoryStore {
    async fn schema_exists(&self, schema: &SchemaDescriptor) -> Result<bool, StoreError> {
        Ok(self.lock().classes.contains_key(&schema.class_name))
    }

    async fn create_schema(&self, schema: &SchemaDescriptor) -> Result<(), StoreError> {
        let mut collections = self.lock();
        if collections.classes.contains_key(&schema.class_name) {
            return Err(StoreError::ClassExists(schema.class_name.clone()));
        }
        collections.classes.insert(schema.class_name.clone(), Vec::new());
        Ok(())
    }

    async fn count_objects(&self, class_name: &str) -> Result<u64, StoreError> {
        Ok(self
            .lock()
            .classes
            .get(class_name)
            .map_or(0, |objects| objects.len() as u64))
    }

    async fn insert_object(
        &self,
        class_name: &str,
        record: &AidRecord,
        vector: &[f32],
    ) -> Result<String, StoreError> {
        let mut collections = self.lock();
        let id = collections.next_id.to_string();
        let objects = collections
            .classes
            .get_mut(class_name)
            .ok_or_else(|| StoreError::UnknownClass(class_name.to_string()))?;
        objects.push(StoredObject {
            record: record.clone(),
            vector: normalize(vector),
        });
        collections.next_id += 1;
        Ok(id)
    }

    async fn nearest(
        &self,
        class_name: &str,
        _fields: &[&str],
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<AidMatch>, StoreError> {
        let collections = self.lock();
        let objects = collections
            .classes
            .get(class_name)
            .ok_or_else(|| StoreError::UnknownClass(class_name.to_string()))?;

        let query_norm = normalize(vector);
        let mut scored: Vec<(Float, &StoredObject)> = objects
            .iter()
            .map(|object| (dot_product(&object.vector, &query_norm), object))
            .collect();
        // Stable sort: equal scores keep insertion order.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(_, object)| AidMatch::from(&object.record))
            .collect())
    }
}

fn dot_product(vec1: &[Float], vec2: &[Float]) -> Float {
    if vec1.len() != vec2.len() {
        return 0.0;
    }
    vec1.iter().zip(vec2.iter()).map(|(a, b)| a * b).sum()
}

/// Scales a vector to unit length. A zero vector stays zero.
pub fn normalize(vector: &[Float]) -> Vec<Float> {
    let norm = vector.iter().map(|x| x * x).sum::<Float>().sqrt();
    if norm > Float::EPSILON {
        vector.iter().map(|x| x / norm).collect()
    } else {
        vec![0.0; vector.len()]
    }
}
