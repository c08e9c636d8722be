// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod filtering;
pub mod formatting;
pub mod logging;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cli_context::{RunContext, RunContextBuilder};
pub use client::{JiraApi, JiraClient};
pub use config::{Credentials, credentials_path, load_credentials};
pub use error::{JiraError, JiraResult};
pub use models::*;
