use aid_search::cli::parse_args;
use aid_search::config::Config;
use aid_search::ingest::{ingest, IngestOutcome};
use aid_search::repl;
use aid_search::search::{EmbeddingEngine, SearchService};
use aid_search::store::{MemoryStore, SchemaDescriptor, VectorStore, WeaviateClient};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn setup_tracing() {
    // stdout belongs to the interactive loop, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env(); // Loads .env before reading anything
    setup_tracing();
    let cli_args = parse_args();

    let engine = EmbeddingEngine::new(&config.embedding_model)
        .with_context(|| format!("Failed to load embedding model '{}'", config.embedding_model))?
        .with_batch_size(cli_args.batch_size);

    let store: Box<dyn VectorStore + Send + Sync> = if cli_args.offline {
        info!("offline mode: vectors are kept in memory for this session");
        Box::new(MemoryStore::new())
    } else {
        let url = config.require_weaviate_url()?;
        info!(url, "connecting to Weaviate");
        Box::new(WeaviateClient::new(url, config.weaviate_api_key.clone()))
    };

    let schema = SchemaDescriptor::aid_programs(&cli_args.class_name);
    match ingest(&engine, &*store, &schema, Path::new(&cli_args.csv)).await? {
        IngestOutcome::Uploaded { rows } => info!(rows, "ingestion finished"),
        IngestOutcome::Skipped { existing } => info!(existing, "using existing objects"),
    }

    let service = SearchService::new(&engine, &*store, &cli_args.class_name);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&service, cli_args.top_k, stdin, &mut stdout).await?;

    Ok(())
}
