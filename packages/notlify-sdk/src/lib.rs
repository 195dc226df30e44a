pub mod backend;
pub mod client;
pub mod error;

pub use backend::NotificationBackend;
pub use client::NotlifyClient;
pub use error::{SdkError, SdkResult};
pub use notlify_core::*;
