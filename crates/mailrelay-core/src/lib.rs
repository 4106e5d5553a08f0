/// Mailrelay Core - request validation, response shaping and the SES provider
///
/// This crate holds everything the relay Lambda does apart from the Lambda
/// HTTP wiring itself.
pub mod constants;
pub mod error;
pub mod models;
pub mod relay;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::{RelayError, SendError};
pub use relay::relay_email;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
