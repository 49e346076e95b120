//! Job matching collaborator.
//!
//! This module provides:
//!
//! - `JobListing` and `ResultSet`: the records shown in the results table
//! - `MatchRequest`: validated form input handed to a matcher
//! - `JobMatcher`: the async request/response contract for a matching service
//! - `MockJobMatcher`: the stand-in used until a real service exists
//!
//! A matcher receives the requested result count but the form never truncates
//! what comes back; the listings are shown exactly as returned.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resume::ResumeFile;

/// Errors reported by a job matching service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Job matching service is unavailable: {0}")]
    Unavailable(String),

    #[error("Job matching service rejected the request: {0}")]
    Rejected(String),
}

/// One matched job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub company: String,
    pub title: String,
    pub description: String,
    pub apply_link: String,
}

impl JobListing {
    pub fn new(
        company: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        apply_link: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            title: title.into(),
            description: description.into(),
            apply_link: apply_link.into(),
        }
    }
}

/// The listings currently on display, in the order the matcher returned them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    listings: Vec<JobListing>,
    /// When these listings were delivered; `None` until the first successful search
    delivered_at: Option<DateTime<Local>>,
}

impl ResultSet {
    /// Wrap a freshly delivered list of listings
    pub fn delivered(listings: Vec<JobListing>) -> Self {
        Self {
            listings,
            delivered_at: Some(Local::now()),
        }
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    pub fn delivered_at(&self) -> Option<DateTime<Local>> {
        self.delivered_at
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered_at.is_some()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Validated search input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRequest {
    pub resume: ResumeFile,
    /// Job titles as entered, surrounding whitespace removed
    pub job_titles: String,
    /// Requested number of listings, always at least 1
    pub max_results: u32,
}

/// A service that matches a resume against open positions
#[async_trait]
pub trait JobMatcher: Send + Sync {
    async fn find_matches(&self, request: &MatchRequest) -> Result<Vec<JobListing>, ServiceError>;
}

/// Fixed two-row matcher used in place of a real service
#[derive(Debug, Clone, Copy, Default)]
pub struct MockJobMatcher;

impl MockJobMatcher {
    /// The listings every request receives
    pub fn listings() -> Vec<JobListing> {
        vec![
            JobListing::new(
                "TechCorp",
                "Software Engineer",
                "Exciting role in AI...",
                "https://example.com/apply1",
            ),
            JobListing::new(
                "DataInc",
                "Data Scientist",
                "Work with big data...",
                "https://example.com/apply2",
            ),
        ]
    }
}

#[async_trait]
impl JobMatcher for MockJobMatcher {
    async fn find_matches(&self, request: &MatchRequest) -> Result<Vec<JobListing>, ServiceError> {
        tracing::debug!(
            resume = %request.resume.file_name(),
            titles = %request.job_titles,
            max_results = request.max_results,
            "Matching resume against mock listings"
        );
        Ok(Self::listings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(max_results: u32) -> MatchRequest {
        MatchRequest {
            resume: ResumeFile::from_path("resume.pdf"),
            job_titles: "Software Engineer".to_string(),
            max_results,
        }
    }

    #[tokio::test]
    async fn test_mock_returns_fixed_listings_in_order() {
        let listings = MockJobMatcher.find_matches(&request(5)).await.unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].company, "TechCorp");
        assert_eq!(listings[0].title, "Software Engineer");
        assert_eq!(listings[1].company, "DataInc");
        assert_eq!(listings[1].title, "Data Scientist");
    }

    #[tokio::test]
    async fn test_mock_ignores_requested_count() {
        let listings = MockJobMatcher.find_matches(&request(1)).await.unwrap();
        assert_eq!(listings, MockJobMatcher::listings());
    }

    #[test]
    fn test_listing_serializes_apply_link_in_camel_case() {
        let json = serde_json::to_value(&MockJobMatcher::listings()[0]).unwrap();
        assert_eq!(json["applyLink"], "https://example.com/apply1");
        assert!(json.get("apply_link").is_none());
    }

    #[test]
    fn test_default_result_set_is_undelivered() {
        let results = ResultSet::default();
        assert!(results.is_empty());
        assert!(!results.is_delivered());

        let results = ResultSet::delivered(Vec::new());
        assert!(results.is_empty());
        assert!(results.is_delivered());
    }
}
