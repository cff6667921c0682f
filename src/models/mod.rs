/// Data models for the Cloudpost wrappers
pub mod config;
pub mod email;
pub mod storage;

// Re-export commonly used types
pub use config::*;
pub use email::*;
pub use storage::*;
