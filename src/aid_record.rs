use serde::{Deserialize, Deserializer, Serialize};

/// One aid program as read from a row of the resources CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub program_type: String,
    pub city: String,
    pub description: String,
    pub contact: String,
}

/// A search hit. Only the properties requested from the store are carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AidMatch {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub contact: String,
}

impl From<&AidRecord> for AidMatch {
    fn from(record: &AidRecord) -> Self {
        Self {
            name: record.name.clone(),
            city: record.city.clone(),
            description: record.description.clone(),
            contact: record.contact.clone(),
        }
    }
}

// Weaviate returns `null` for properties that were never set on an object.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Properties fetched for every search hit, in display order.
pub const MATCH_FIELDS: &[&str] = &["name", "city", "description", "contact"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aid_record_serializes_type_field() {
        let record = AidRecord {
            name: "Food Bank".to_string(),
            program_type: "food".to_string(),
            city: "Tulsa".to_string(),
            description: "Free groceries".to_string(),
            contact: "555-0100".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "food");
        assert!(value.get("program_type").is_none());
    }

    #[test]
    fn test_aid_match_tolerates_null_and_missing_properties() {
        let hit: AidMatch =
            serde_json::from_str(r#"{"name": "Clinic", "city": null, "description": "Care"}"#).unwrap();
        assert_eq!(hit.name, "Clinic");
        assert_eq!(hit.city, "");
        assert_eq!(hit.contact, "");
    }
}
