//! # Domain Models
//!
//! These structs represent the two entities of the portfolio: published
//! Works and visitor Reviews. Ids are the store's integer row ids.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Rating stored when a review is submitted without one.
pub const DEFAULT_RATING: i64 = 5;

/// A published poetry or prose entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: i64,
    pub title: String,
    pub body: String,
    /// Free-text tag, normally one of [`WorkKind`]. Not enforced.
    pub kind: String,
    /// Attached document as a data URI (`data:application/pdf;base64,...`)
    pub attachment: Option<String>,
    /// Assigned by the store at insertion (UTC)
    pub created_at: NaiveDateTime,
}

/// The fields of a Work the caller supplies; id and timestamp come from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWork {
    pub title: String,
    pub body: String,
    pub kind: String,
    pub attachment: Option<String>,
}

/// The kinds of Work the site knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkKind {
    Poetry,
    Novel,
}

impl WorkKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "poetry" => Some(Self::Poetry),
            "novel" => Some(Self::Novel),
            _ => None,
        }
    }
}

/// A visitor-submitted rated comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub comment: String,
    /// Caller-supplied; not range-checked
    pub rating: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub name: String,
    pub comment: String,
    pub rating: i64,
}

/// Create-Work request as it arrives from the outside world.
///
/// Every field is optional here; presence is checked by the service so that
/// a missing field is reported as a validation failure, not a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateWork {
    pub title: Option<String>,
    pub body: Option<String>,
    pub kind: Option<String>,
    pub attachment: Option<String>,
    pub admin_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateReview {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<i64>,
}
