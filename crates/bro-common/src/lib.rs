//! Types shared by every bro crate: error enums and the engine-assigned
//! browser id.

pub mod errors;
pub mod id;

pub use errors::{BroError, ConfigError};
pub use id::BrowserId;

pub type Result<T> = std::result::Result<T, BroError>;
