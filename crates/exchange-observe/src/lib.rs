//! Process-wide `tracing` setup for binaries built on the exchange crates.
//!
//! Libraries only emit events; whoever owns `main` calls [`init_logger`] once.

mod config;
pub use config::LoggerConfig;

mod error;
pub use error::LoggerError;

mod format;
pub use format::LoggerFormat;

mod level;
pub use level::LoggerLevel;

mod init;
pub use init::init_logger;
