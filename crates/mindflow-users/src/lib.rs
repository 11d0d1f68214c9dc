//! Client for the external users service that owns OAuth and sessions.

pub mod client;
pub mod error;
pub mod types;

pub use client::UsersClient;
pub use error::UsersError;
pub use types::User;
