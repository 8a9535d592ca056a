//! Types shared across the client modules.

pub mod error;

pub use error::StoreError;
