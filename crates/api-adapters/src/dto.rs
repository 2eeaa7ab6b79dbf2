//! Wire types. Field names here are the public JSON contract.

use domains::{CreateReview, CreateWork, Review, Work};
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `POST /api/content` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkBody {
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub pdf_data: Option<String>,
    pub admin_key: Option<String>,
}

impl From<CreateWorkBody> for CreateWork {
    fn from(b: CreateWorkBody) -> Self {
        Self {
            title: b.title,
            body: b.body,
            kind: b.kind,
            attachment: b.pdf_data,
            admin_key: b.admin_key,
        }
    }
}

/// `POST /api/reviews` body.
#[derive(Debug, Deserialize)]
pub struct CreateReviewBody {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<i64>,
}

impl From<CreateReviewBody> for CreateReview {
    fn from(b: CreateReviewBody) -> Self {
        Self {
            name: b.name,
            comment: b.comment,
            rating: b.rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorkResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub pdf_data: Option<String>,
    pub created_at: String,
}

impl From<Work> for WorkResponse {
    fn from(w: Work) -> Self {
        Self {
            id: w.id,
            title: w.title,
            body: w.body,
            kind: w.kind,
            pdf_data: w.attachment,
            created_at: w.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub name: String,
    pub comment: String,
    pub rating: i64,
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            name: r.name,
            comment: r.comment,
            rating: r.rating,
            created_at: r.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
