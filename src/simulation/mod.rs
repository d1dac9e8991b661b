pub mod agent_comm;
pub mod config;
pub mod engine;
pub mod metrics;
