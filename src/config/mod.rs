pub mod config;

pub use config::{Credentials, credentials_path, load_credentials};
