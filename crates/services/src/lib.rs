//! Application services: the layer between HTTP adapters and the ports.

pub mod portfolio;

pub use portfolio::PortfolioService;
