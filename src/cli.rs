use clap::Parser;

use crate::config::{DEFAULT_CLASS_NAME, DEFAULT_CSV_PATH};
use crate::search::embedding_engine::DEFAULT_BATCH_SIZE;
use crate::search::service::DEFAULT_TOP_K;

#[derive(Parser, Debug)]
#[command(author, version, about = "Semantic search over local aid programs", long_about = None)]
pub struct Cli {
    /// Path to the resources CSV
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    pub csv: String,

    /// Vector store class holding the programs
    #[arg(long, default_value = DEFAULT_CLASS_NAME)]
    pub class_name: String,

    /// Number of matches shown per query
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// Texts per embedding batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Keep vectors in memory instead of Weaviate (re-ingests on every start)
    #[arg(long)]
    pub offline: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
