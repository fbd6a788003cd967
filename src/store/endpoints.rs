use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SchemaDescriptor;
use crate::aid_record::AidRecord;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(rename = "dataType")]
    pub data_type: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClassDefinition {
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub vectorizer: String,
    pub properties: Vec<PropertyDefinition>,
}

impl From<&SchemaDescriptor> for ClassDefinition {
    fn from(schema: &SchemaDescriptor) -> Self {
        Self {
            class: schema.class_name.clone(),
            description: Some(schema.description.clone()),
            vectorizer: SchemaDescriptor::VECTORIZER.to_string(),
            properties: schema
                .properties
                .iter()
                .map(|name| PropertyDefinition {
                    name: name.clone(),
                    data_type: vec!["text".to_string()],
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ObjectCreateRequest<'a> {
    pub class: &'a str,
    pub properties: &'a AidRecord,
    pub vector: &'a [f32],
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObjectCreateResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct GraphQlRequest {
    pub query: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AggregateMeta {
    pub count: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AggregateGroup {
    pub meta: AggregateMeta,
}

/// `{ Aggregate { Class { meta { count } } } }`
pub fn aggregate_count_query(class_name: &str) -> GraphQlRequest {
    GraphQlRequest {
        query: format!("{{ Aggregate {{ {} {{ meta {{ count }} }} }} }}", class_name),
    }
}

/// `{ Get { Class(nearVector: {vector: [...]}, limit: k) { fields } } }`
pub fn near_vector_query(class_name: &str, fields: &[&str], vector: &[f32], k: usize) -> GraphQlRequest {
    let vector_literal = vector
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    GraphQlRequest {
        query: format!(
            "{{ Get {{ {}(nearVector: {{vector: [{}]}}, limit: {}) {{ {} }} }} }}",
            class_name,
            vector_literal,
            k,
            fields.join(" ")
        ),
    }
}
