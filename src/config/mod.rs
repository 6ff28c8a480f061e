//! Configuration loading and settings structures.

mod environment;
pub mod settings;

pub use environment::Environment;
pub use settings::{
    ApplicationConfig, DatabaseConfig, JwtConfig, LoggerConfig, ServerConfig, Settings,
};
