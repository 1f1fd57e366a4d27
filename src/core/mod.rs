pub mod math;
pub mod server;

pub use crate::domain::model::ServerStatus;
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
