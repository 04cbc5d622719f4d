pub mod errors;
pub mod types;

pub use errors::{AssetError, ConfigError, PlatformError, ReliefError};
pub use types::{Color, LogicalSize};

pub type Result<T> = std::result::Result<T, ReliefError>;
