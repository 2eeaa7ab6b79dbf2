//! # auth-adapters
//!
//! Implementations of `AdminAuthorizer`.

pub mod shared_secret;

pub use shared_secret::SharedSecretAuthorizer;
