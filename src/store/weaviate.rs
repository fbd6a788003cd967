use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::{Map, Value};
use tracing::debug;

use super::endpoints::{
    aggregate_count_query, near_vector_query, AggregateGroup, ClassDefinition, GraphQlRequest,
    GraphQlResponse, ObjectCreateRequest, ObjectCreateResponse,
};
use super::{SchemaDescriptor, StoreError, VectorStore};
use crate::aid_record::{AidMatch, AidRecord};

/// Client for a Weaviate instance, talking to its REST and GraphQL endpoints.
#[derive(Debug, Clone)]
pub struct WeaviateClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeaviateClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn error_from(response: Response) -> StoreError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        StoreError::Api { status, body }
    }

    async fn graphql(&self, request: &GraphQlRequest) -> Result<Map<String, Value>, StoreError> {
        let response = self
            .authorized(self.client.post(self.url("/graphql")))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body = response.json::<GraphQlResponse>().await?;
        if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(StoreError::GraphQl(messages.join("; ")));
        }
        Ok(body.data.unwrap_or_default())
    }

    /// Pulls `data.<operation>.<class>` out of a GraphQL result.
    fn class_section(
        data: &Map<String, Value>,
        operation: &str,
        class_name: &str,
    ) -> Option<Value> {
        data.get(operation)
            .and_then(|op| op.get(class_name))
            .filter(|v| !v.is_null())
            .cloned()
    }
}

#[async_trait]
impl VectorStore for WeaviateClient {
    async fn schema_exists(&self, schema: &SchemaDescriptor) -> Result<bool, StoreError> {
        let path = format!("/schema/{}", schema.class_name);
        let response = self.authorized(self.client.get(self.url(&path))).send().await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(Self::error_from(response).await),
        }
    }

    async fn create_schema(&self, schema: &SchemaDescriptor) -> Result<(), StoreError> {
        let definition = ClassDefinition::from(schema);
        let response = self
            .authorized(self.client.post(self.url("/schema")))
            .json(&definition)
            .send()
            .await?;
        if response.status().is_success() {
            debug!(class = %schema.class_name, "created class");
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn count_objects(&self, class_name: &str) -> Result<u64, StoreError> {
        let data = self.graphql(&aggregate_count_query(class_name)).await?;
        let Some(section) = Self::class_section(&data, "Aggregate", class_name) else {
            return Ok(0);
        };
        let groups: Vec<AggregateGroup> = serde_json::from_value(section)
            .map_err(|e| StoreError::MalformedResponse(format!("aggregate result: {}", e)))?;
        Ok(groups.first().map(|g| g.meta.count).unwrap_or(0))
    }

    async fn insert_object(
        &self,
        class_name: &str,
        record: &AidRecord,
        vector: &[f32],
    ) -> Result<String, StoreError> {
        let request = ObjectCreateRequest {
            class: class_name,
            properties: record,
            vector,
        };
        let response = self
            .authorized(self.client.post(self.url("/objects")))
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        let created = response.json::<ObjectCreateResponse>().await?;
        Ok(created.id)
    }

    async fn nearest(
        &self,
        class_name: &str,
        fields: &[&str],
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<AidMatch>, StoreError> {
        if k == 0 {
            return Ok(Vec::new());
        }
        let data = self
            .graphql(&near_vector_query(class_name, fields, vector, k))
            .await?;
        let Some(section) = Self::class_section(&data, "Get", class_name) else {
            return Ok(Vec::new());
        };
        serde_json::from_value(section)
            .map_err(|e| StoreError::MalformedResponse(format!("near vector result: {}", e)))
    }
}
