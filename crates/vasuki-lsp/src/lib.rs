pub mod config;
pub mod document;
pub mod handlers;
pub mod server;
mod test_utils;

// Re-export commonly used types
pub use config::VasukiConfig;
pub use server::Backend;
pub use vasuki_core::{Result, VasukiError};
