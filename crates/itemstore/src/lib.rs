//! itemstore - single-item CRUD against DynamoDB.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod scenario;
pub mod storage;

pub use commands::{execute, CommandOutput};
pub use config::StoreConfig;
pub use scenario::{run_scenario, ScenarioConfig, ScenarioReport};
