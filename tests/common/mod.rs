#![allow(dead_code)]

use aid_search::aid_record::AidRecord;
use aid_search::search::TextEmbedder;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

pub const DIM: usize = 256;

/// Bag-of-words embedder: each lowercase word bumps one hashed bucket.
#[derive(Default)]
pub struct FakeEmbedder {
    calls: AtomicUsize,
}

impl FakeEmbedder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn bucket(word: &str) -> usize {
    // FNV-1a
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in word.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    (hash % DIM as u64) as usize
}

pub fn bag_of_words(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0; DIM];
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        vector[bucket(&word.to_lowercase())] += 1.0;
    }
    vector
}

impl TextEmbedder for FakeEmbedder {
    fn embed(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts.iter().map(|t| bag_of_words(t)).collect())
    }
}

pub fn sample_records() -> Vec<AidRecord> {
    let rows = [
        ("Care Clinic", "health", "Norman", "Diabetes clinic with free screening", "405-555-0100"),
        ("Tulsa Food Bank", "food", "Tulsa", "Weekly groceries and pantry boxes", "918-555-0100"),
        ("Shelter Now", "housing", "Oklahoma City", "Emergency beds for families", "shelter@example.org"),
        ("Rent Relief", "housing", "Lawton", "Help paying overdue rent", "580-555-0100"),
        ("Ride Share Seniors", "transport", "Edmond", "Rides to medical appointments", "405-555-0199"),
    ];
    rows.iter()
        .map(|(name, kind, city, description, contact)| AidRecord {
            name: name.to_string(),
            program_type: kind.to_string(),
            city: city.to_string(),
            description: description.to_string(),
            contact: contact.to_string(),
        })
        .collect()
}

pub fn write_csv(records: &[AidRecord]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "name,type,city,description,contact_info").expect("write header");
    for r in records {
        writeln!(
            file,
            "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
            r.name, r.program_type, r.city, r.description, r.contact
        )
        .expect("write row");
    }
    file.flush().expect("flush");
    file
}
