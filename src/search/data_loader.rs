use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

use crate::aid_record::AidRecord;

// Expected column headers
const NAME_COL: &str = "name";
const TYPE_COL: &str = "type";
const CITY_COL: &str = "city";
const DESCRIPTION_COL: &str = "description";
const CONTACT_COL: &str = "contact_info";

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", column))
}

/// Reads every row of the resources CSV. Cells are kept verbatim; cells missing from a
/// short row read as empty strings.
pub fn load_aid_records(csv_path: &Path) -> Result<Vec<AidRecord>> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Resources CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open resources CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = rdr.headers()?.clone();

    let name_idx = column_index(&headers, NAME_COL)?;
    let type_idx = column_index(&headers, TYPE_COL)?;
    let city_idx = column_index(&headers, CITY_COL)?;
    let description_idx = column_index(&headers, DESCRIPTION_COL)?;
    let contact_idx = column_index(&headers, CONTACT_COL)?;

    let mut records = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let row = result.with_context(|| format!("Failed to read record at row index {}", row_index))?;
        let cell = |idx: usize| row.get(idx).unwrap_or_default().to_string();

        records.push(AidRecord {
            name: cell(name_idx),
            program_type: cell(type_idx),
            city: cell(city_idx),
            description: cell(description_idx),
            contact: cell(contact_idx),
        });
    }

    Ok(records)
}
