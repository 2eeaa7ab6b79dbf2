//! # Ports
//!
//! Any adapter must implement these traits to be wired into the service.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::models::{NewReview, NewWork, Review, Work};

/// Persistence contract for the `content` table.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait WorkRepository: Send + Sync {
    /// All works, newest first.
    async fn list_works(&self) -> anyhow::Result<Vec<Work>>;
    /// Inserts and returns the assigned id.
    async fn create_work(&self, work: NewWork) -> anyhow::Result<i64>;
    /// Returns `true` if a row was removed.
    async fn delete_work(&self, id: i64) -> anyhow::Result<bool>;
    async fn count_works(&self) -> anyhow::Result<i64>;
}

/// Persistence contract for the `reviews` table.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn list_reviews(&self) -> anyhow::Result<Vec<Review>>;
    async fn create_review(&self, review: NewReview) -> anyhow::Result<i64>;
    async fn delete_review(&self, id: i64) -> anyhow::Result<bool>;
    async fn count_reviews(&self) -> anyhow::Result<i64>;
}

/// Gate for admin-only operations.
pub trait AdminAuthorizer: Send + Sync {
    /// `Ok(())` if `supplied` grants admin rights, `DomainError::Unauthorized` otherwise.
    fn authorize(&self, supplied: Option<&str>) -> Result<(), DomainError>;
}
