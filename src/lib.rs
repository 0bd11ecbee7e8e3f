pub mod config;
pub mod engine;
pub mod history;
pub mod record;
pub mod storage;
pub mod utils;

pub use engine::{compute, compute_sync, ComputeError, Engine, EngineConfig};
pub use record::ResultRecord;
