//! Blocking REST client for the HRIS admin endpoints.
//!
//! [`AdminApiClient`] talks to the recruitment wizard and role console
//! endpoints and plugs into `hris-map` and `hris-roles` through their
//! backend traits.

pub mod backends;
pub mod client;
pub mod error;

pub use client::AdminApiClient;
pub use error::{ClientError, Result};
