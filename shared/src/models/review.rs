//! Review model

use crate::validation::{FieldErrors, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub author_id: String,
    pub author_name: String,
    /// 1 to 5 stars
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// POST `/api/products/{id}/reviews` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewRequest {
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Validate for ReviewRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_range("rating", self.rating, 1, 5);
        if let Some(comment) = &self.comment
            && comment.chars().count() > 500
        {
            errors.add("comment", "comment must be at most 500 characters");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        for rating in 1..=5 {
            let req = ReviewRequest {
                rating,
                comment: None,
            };
            assert!(req.validate().is_ok());
        }
        let req = ReviewRequest {
            rating: 0,
            comment: Some("x".repeat(501)),
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
