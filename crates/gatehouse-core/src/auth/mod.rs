//! Identity provider client and session types.

pub mod client;
pub mod types;

pub use client::AuthClient;
pub use types::{ProviderError, Session, SessionUser};
