pub mod aggregator;
pub mod config;
pub mod enumerator;
pub mod error;
pub mod orchestrator;
pub mod suffix;
pub mod summary;
pub mod tokenizer;

pub use config::EngineConfig;
pub use error::ComputeError;
pub use orchestrator::{compute, compute_sync, Engine};
