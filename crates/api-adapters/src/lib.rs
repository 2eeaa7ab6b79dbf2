//! # api-adapters
//!
//! The HTTP surface of the portfolio. Maps the six `/api` endpoints onto
//! `PortfolioService` and serves the SPA bundle for everything else.

#[cfg(feature = "web-axum")]
pub mod dto;
#[cfg(feature = "web-axum")]
pub mod error;
#[cfg(feature = "web-axum")]
pub mod handlers;
#[cfg(feature = "web-axum")]
pub mod router;

#[cfg(feature = "web-axum")]
pub use router::{build_router, AppState, RouterOptions};
