pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{AnalyzeError, ServiceError, ValidationError};
