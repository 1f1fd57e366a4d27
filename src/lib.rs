pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, ServerConfig};
pub use crate::core::math::MathService;
pub use crate::core::server::ApiServer;
pub use crate::utils::error::{MathApiError, Result};
