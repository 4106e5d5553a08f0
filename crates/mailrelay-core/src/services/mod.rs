/// Provider clients and configuration
pub mod config;
pub mod ses;

// Re-export service traits
pub use config::RelayConfig;
pub use ses::{EmailSender, SesEmailSender};
