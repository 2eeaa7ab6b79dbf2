//! # PortfolioService
//!
//! Orchestrates every request the site serves: presence checks, the admin
//! gate for Work mutation, then exactly one repository call.

use std::sync::Arc;

use domains::{
    AdminAuthorizer, CreateReview, CreateWork, DomainError, NewReview, NewWork, Result, Review,
    ReviewRepository, Work, WorkKind, WorkRepository, DEFAULT_RATING,
};
use tracing::{info, warn};

pub const MISSING_WORK_FIELDS: &str = "Missing required fields";
pub const MISSING_REVIEW_FIELDS: &str = "Name and comment are required";
pub const WORK_NOT_FOUND: &str = "Content not found";
pub const REVIEW_NOT_FOUND: &str = "Review not found";

pub struct PortfolioService {
    works: Arc<dyn WorkRepository>,
    reviews: Arc<dyn ReviewRepository>,
    authorizer: Arc<dyn AdminAuthorizer>,
}

impl PortfolioService {
    pub fn new(
        works: Arc<dyn WorkRepository>,
        reviews: Arc<dyn ReviewRepository>,
        authorizer: Arc<dyn AdminAuthorizer>,
    ) -> Self {
        Self {
            works,
            reviews,
            authorizer,
        }
    }

    pub async fn list_works(&self) -> Result<Vec<Work>> {
        Ok(self.works.list_works().await?)
    }

    /// Publishes a Work. The admin key is checked before any field.
    pub async fn create_work(&self, req: CreateWork) -> Result<i64> {
        self.authorize(req.admin_key.as_deref(), "create work")?;

        let (Some(title), Some(body), Some(kind)) = (
            non_empty(req.title),
            non_empty(req.body),
            non_empty(req.kind),
        ) else {
            return Err(DomainError::validation(MISSING_WORK_FIELDS));
        };

        if WorkKind::from_tag(&kind).is_none() {
            warn!(kind = %kind, "storing work with unrecognised kind");
        }

        let id = self
            .works
            .create_work(NewWork {
                title,
                body,
                kind,
                attachment: non_empty(req.attachment),
            })
            .await?;

        info!(id, "work created");
        Ok(id)
    }

    pub async fn delete_work(&self, raw_id: &str, admin_key: Option<&str>) -> Result<()> {
        self.authorize(admin_key, "delete work")?;

        let id = parse_id(raw_id).ok_or_else(|| DomainError::not_found(WORK_NOT_FOUND))?;
        if !self.works.delete_work(id).await? {
            return Err(DomainError::not_found(WORK_NOT_FOUND));
        }

        info!(id, "work deleted");
        Ok(())
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>> {
        Ok(self.reviews.list_reviews().await?)
    }

    pub async fn create_review(&self, req: CreateReview) -> Result<i64> {
        let (Some(name), Some(comment)) = (non_empty(req.name), non_empty(req.comment)) else {
            return Err(DomainError::validation(MISSING_REVIEW_FIELDS));
        };

        let id = self
            .reviews
            .create_review(NewReview {
                name,
                comment,
                rating: req.rating.unwrap_or(DEFAULT_RATING),
            })
            .await?;

        info!(id, "review created");
        Ok(id)
    }

    /// Removes a review. Open to any visitor.
    pub async fn delete_review(&self, raw_id: &str) -> Result<()> {
        let id = parse_id(raw_id).ok_or_else(|| DomainError::not_found(REVIEW_NOT_FOUND))?;
        if !self.reviews.delete_review(id).await? {
            return Err(DomainError::not_found(REVIEW_NOT_FOUND));
        }

        info!(id, "review deleted");
        Ok(())
    }

    fn authorize(&self, supplied: Option<&str>, action: &str) -> Result<()> {
        self.authorizer.authorize(supplied).inspect_err(|_| {
            warn!(action, key_supplied = supplied.is_some(), "admin authorization failed");
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

// A path segment that is not an integer cannot name a row.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domains::{MockReviewRepository, MockWorkRepository};
    use mockall::predicate::eq;

    struct FixedKey(&'static str);

    impl AdminAuthorizer for FixedKey {
        fn authorize(&self, supplied: Option<&str>) -> Result<()> {
            if supplied == Some(self.0) {
                Ok(())
            } else {
                Err(DomainError::Unauthorized)
            }
        }
    }

    fn service(works: MockWorkRepository, reviews: MockReviewRepository) -> PortfolioService {
        PortfolioService::new(Arc::new(works), Arc::new(reviews), Arc::new(FixedKey("secret")))
    }

    fn dawn() -> CreateWork {
        CreateWork {
            title: Some("Dawn".into()),
            body: Some("First light.".into()),
            kind: Some("poetry".into()),
            attachment: None,
            admin_key: Some("secret".into()),
        }
    }

    #[tokio::test]
    async fn test_create_work_inserts_with_valid_key() {
        let mut works = MockWorkRepository::new();
        works
            .expect_create_work()
            .withf(|w| w.title == "Dawn" && w.kind == "poetry" && w.attachment.is_none())
            .times(1)
            .returning(|_| Ok(1));

        let id = service(works, MockReviewRepository::new())
            .create_work(dawn())
            .await
            .unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_create_work_wrong_key_never_touches_store() {
        let mut works = MockWorkRepository::new();
        works.expect_create_work().never();

        let req = CreateWork {
            admin_key: Some("wrong".into()),
            ..dawn()
        };
        let err = service(works, MockReviewRepository::new())
            .create_work(req)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));
    }

    #[tokio::test]
    async fn test_create_work_checks_key_before_fields() {
        let svc = service(MockWorkRepository::new(), MockReviewRepository::new());
        let err = svc.create_work(CreateWork::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));
    }

    #[tokio::test]
    async fn test_create_work_missing_or_empty_fields() {
        let mut works = MockWorkRepository::new();
        works.expect_create_work().never();
        let svc = service(works, MockReviewRepository::new());

        let cases = [
            CreateWork { title: None, ..dawn() },
            CreateWork { body: Some(String::new()), ..dawn() },
            CreateWork { kind: None, ..dawn() },
        ];
        for req in cases {
            match svc.create_work(req).await {
                Err(DomainError::Validation(msg)) => assert_eq!(msg, MISSING_WORK_FIELDS),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_create_work_accepts_unknown_kind() {
        let mut works = MockWorkRepository::new();
        works
            .expect_create_work()
            .withf(|w| w.kind == "essay")
            .returning(|_| Ok(7));

        let req = CreateWork {
            kind: Some("essay".into()),
            ..dawn()
        };
        let id = service(works, MockReviewRepository::new())
            .create_work(req)
            .await
            .unwrap();
        assert_eq!(id, 7);
    }

    #[tokio::test]
    async fn test_create_work_empty_attachment_stored_as_none() {
        let mut works = MockWorkRepository::new();
        works
            .expect_create_work()
            .withf(|w| w.attachment.is_none())
            .returning(|_| Ok(2));

        let req = CreateWork {
            attachment: Some(String::new()),
            ..dawn()
        };
        service(works, MockReviewRepository::new())
            .create_work(req)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_work_not_found() {
        let mut works = MockWorkRepository::new();
        works
            .expect_delete_work()
            .with(eq(999))
            .returning(|_| Ok(false));

        let err = service(works, MockReviewRepository::new())
            .delete_work("999", Some("secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref m) if m == WORK_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_delete_work_requires_key() {
        let mut works = MockWorkRepository::new();
        works.expect_delete_work().never();
        let svc = service(works, MockReviewRepository::new());

        assert!(matches!(
            svc.delete_work("1", None).await,
            Err(DomainError::Unauthorized)
        ));
        assert!(matches!(
            svc.delete_work("1", Some("nope")).await,
            Err(DomainError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_delete_work_non_numeric_id_is_not_found() {
        let mut works = MockWorkRepository::new();
        works.expect_delete_work().never();

        let err = service(works, MockReviewRepository::new())
            .delete_work("abc", Some("secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_review_defaults_rating() {
        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_create_review()
            .withf(|r| r.name == "Ann" && r.rating == DEFAULT_RATING)
            .returning(|_| Ok(1));

        let req = CreateReview {
            name: Some("Ann".into()),
            comment: Some("Lovely.".into()),
            rating: None,
        };
        let id = service(MockWorkRepository::new(), reviews)
            .create_review(req)
            .await
            .unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_create_review_keeps_out_of_range_rating() {
        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_create_review()
            .withf(|r| r.rating == 0)
            .returning(|_| Ok(3));

        let req = CreateReview {
            name: Some("Ann".into()),
            comment: Some("Meh.".into()),
            rating: Some(0),
        };
        service(MockWorkRepository::new(), reviews)
            .create_review(req)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_review_requires_name_and_comment() {
        let mut reviews = MockReviewRepository::new();
        reviews.expect_create_review().never();

        let req = CreateReview {
            name: Some("Ann".into()),
            comment: None,
            rating: Some(4),
        };
        let err = service(MockWorkRepository::new(), reviews)
            .create_review(req)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == MISSING_REVIEW_FIELDS));
    }

    #[tokio::test]
    async fn test_delete_review_needs_no_key() {
        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_delete_review()
            .with(eq(1))
            .returning(|_| Ok(true));

        service(MockWorkRepository::new(), reviews)
            .delete_review("1")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_storage_fault_becomes_internal() {
        let mut works = MockWorkRepository::new();
        works
            .expect_list_works()
            .returning(|| Err(anyhow::anyhow!("disk I/O error")));

        let err = service(works, MockReviewRepository::new())
            .list_works()
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn test_list_reviews_passes_rows_through() {
        let created_at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let mut reviews = MockReviewRepository::new();
        reviews.expect_list_reviews().returning(move || {
            Ok(vec![Review {
                id: 1,
                name: "Ann".into(),
                comment: "Lovely.".into(),
                rating: 5,
                created_at,
            }])
        });

        let rows = service(MockWorkRepository::new(), reviews)
            .list_reviews()
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ann");
    }
}
