pub mod analyze;
pub mod cli;
pub mod config;
pub mod diagram;
pub mod errors;
pub mod log;
pub mod present;
pub mod prompt;
pub mod provider;
pub mod ux;
pub mod wire;
