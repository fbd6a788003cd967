pub mod aid_record;
pub mod cli;
pub mod config;
pub mod ingest;
pub mod repl;
pub mod search;
pub mod store;
