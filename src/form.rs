//! Job search form state.
//!
//! `FormState` holds everything one search form shows: the selected resume,
//! the two text inputs, the single error slot, the delivered results and the
//! display mode. Every user action is a method here, so the GUI, the CLI and
//! the shell all drive the same validation rules.
//!
//! Only one error is visible at a time. `submit` checks its inputs in a fixed
//! order and stops at the first failure. `refresh` clears everything except
//! the display mode.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::{JobListing, JobMatcher, MatchRequest, ResultSet, ServiceError};
use crate::resume::ResumeFile;

/// Errors shown in the form's error slot. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please upload a PDF file.")]
    InvalidFileType,

    #[error("Please upload a resume.")]
    MissingResume,

    #[error("Please enter job titles.")]
    MissingJobTitles,

    #[error("Please enter a valid number of jobs to return.")]
    InvalidJobCount,

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Light or dark presentation of the whole window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark { DisplayMode::Dark } else { DisplayMode::Light }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::Light => "Light",
            DisplayMode::Dark => "Dark",
        }
    }
}

/// Coarse state of a form, derived from its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormPhase {
    /// Nothing entered yet (initial state, and after refresh)
    Empty,
    /// Some input present, no error and no results yet
    PartiallyFilled,
    /// The error slot is showing a message
    Invalid,
    /// A search succeeded and its results are on display
    ReadyResults,
}

/// In-memory state of one job search form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    selected_file: Option<ResumeFile>,
    job_titles_text: String,
    job_count_text: String,
    error_message: String,
    display_mode: DisplayMode,
    results: ResultSet,
}

impl FormState {
    pub fn new(display_mode: DisplayMode) -> Self {
        Self {
            display_mode,
            ..Self::default()
        }
    }

    pub fn selected_file(&self) -> Option<&ResumeFile> {
        self.selected_file.as_ref()
    }

    pub fn job_titles_text(&self) -> &str {
        &self.job_titles_text
    }

    pub fn job_count_text(&self) -> &str {
        &self.job_count_text
    }

    /// Current error text, empty when no error is shown
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn phase(&self) -> FormPhase {
        if !self.error_message.is_empty() {
            FormPhase::Invalid
        } else if self.results.is_delivered() {
            FormPhase::ReadyResults
        } else if self.selected_file.is_some()
            || !self.job_titles_text.is_empty()
            || !self.job_count_text.is_empty()
        {
            FormPhase::PartiallyFilled
        } else {
            FormPhase::Empty
        }
    }

    /// Accept a picked file if it declares the PDF MIME type.
    ///
    /// `None` is a cancelled picker and is rejected like a non-PDF file.
    pub fn select_resume_file(&mut self, file: Option<ResumeFile>) -> Result<(), FormError> {
        match file {
            Some(file) if file.is_pdf() => {
                tracing::debug!("Selected resume {}", file.path().display());
                self.selected_file = Some(file);
                self.error_message.clear();
                Ok(())
            }
            other => {
                if let Some(file) = other {
                    tracing::debug!(
                        "Rejected resume {} with type {}",
                        file.file_name(),
                        file.mime_type()
                    );
                }
                self.selected_file = None;
                self.fail(FormError::InvalidFileType)
            }
        }
    }

    pub fn set_job_titles_text(&mut self, text: impl Into<String>) {
        self.job_titles_text = text.into();
    }

    pub fn set_job_count_text(&mut self, text: impl Into<String>) {
        self.job_count_text = text.into();
    }

    /// Validate the inputs and build the request for the job matcher.
    ///
    /// On failure the error slot holds the first failing check's message. On
    /// success the error slot is cleared; results are replaced later by
    /// [`FormState::apply_match_result`].
    pub fn submit(&mut self) -> Result<MatchRequest, FormError> {
        self.error_message.clear();

        let Some(resume) = self.selected_file.clone() else {
            return self.fail(FormError::MissingResume);
        };

        let job_titles = self.job_titles_text.trim();
        if job_titles.is_empty() {
            return self.fail(FormError::MissingJobTitles);
        }
        let job_titles = job_titles.to_string();

        let Some(max_results) = parse_job_count(&self.job_count_text) else {
            return self.fail(FormError::InvalidJobCount);
        };

        Ok(MatchRequest {
            resume,
            job_titles,
            max_results,
        })
    }

    /// Apply the outcome of a matcher call started from [`FormState::submit`].
    ///
    /// Listings replace the current results wholesale. A service error goes
    /// into the error slot and leaves the current results in place.
    ///
    /// `submit` already cleared the error slot, so an error still present here
    /// was raised by an edit made while the request was in flight and is kept.
    pub fn apply_match_result(
        &mut self,
        result: Result<Vec<JobListing>, ServiceError>,
    ) -> Result<&ResultSet, FormError> {
        match result {
            Ok(listings) => {
                self.results = ResultSet::delivered(listings);
                Ok(&self.results)
            }
            Err(e) => {
                tracing::warn!("Job matching failed: {}", e);
                self.fail(FormError::Service(e))
            }
        }
    }

    /// Validate, call the matcher and apply its result in one step
    pub async fn submit_with(&mut self, matcher: &dyn JobMatcher) -> Result<&ResultSet, FormError> {
        let request = self.submit()?;
        let result = matcher.find_matches(&request).await;
        self.apply_match_result(result)
    }

    /// Clear every field except the display mode
    pub fn refresh(&mut self) {
        *self = Self::new(self.display_mode);
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        self.display_mode
    }

    fn fail<T>(&mut self, error: FormError) -> Result<T, FormError> {
        self.error_message = error.to_string();
        Err(error)
    }
}

/// Parse the job count field the way a numeric form input is read.
///
/// Surrounding whitespace is ignored and fractional values are accepted. The
/// value must be finite and at least 1; the requested count is its floor.
pub fn parse_job_count(text: &str) -> Option<u32> {
    let value: f64 = text.trim().parse().ok()?;
    if !value.is_finite() || value < 1.0 {
        return None;
    }
    Some(value.floor().min(u32::MAX as f64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MockJobMatcher;
    use crate::resume::PDF_MIME_TYPE;
    use async_trait::async_trait;

    fn pdf() -> ResumeFile {
        ResumeFile::from_path("resume.pdf")
    }

    fn filled_form() -> FormState {
        let mut form = FormState::default();
        form.select_resume_file(Some(pdf())).unwrap();
        form.set_job_titles_text("Software Engineer, Data Scientist");
        form.set_job_count_text("3");
        form
    }

    struct FailingMatcher;

    #[async_trait]
    impl JobMatcher for FailingMatcher {
        async fn find_matches(&self, _request: &MatchRequest) -> Result<Vec<JobListing>, ServiceError> {
            Err(ServiceError::Unavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = FormState::default();
        assert_eq!(form.phase(), FormPhase::Empty);
        assert_eq!(form.display_mode(), DisplayMode::Light);
        assert!(form.selected_file().is_none());
        assert!(form.error_message().is_empty());
        assert!(form.results().is_empty());
    }

    #[test]
    fn test_select_rejects_non_pdf_types() {
        for mime in ["", "text/plain", "application/x-pdf", "application/pdf; charset=binary", "APPLICATION/PDF"] {
            let mut form = FormState::default();
            let result = form.select_resume_file(Some(ResumeFile::with_mime_type("resume", mime)));

            assert_eq!(result, Err(FormError::InvalidFileType), "mime {mime:?}");
            assert_eq!(form.error_message(), "Please upload a PDF file.");
            assert!(form.selected_file().is_none());
        }
    }

    #[test]
    fn test_select_accepts_pdf_and_clears_error() {
        let mut form = FormState::default();
        form.select_resume_file(Some(ResumeFile::from_path("notes.txt"))).unwrap_err();
        assert_eq!(form.phase(), FormPhase::Invalid);

        form.select_resume_file(Some(ResumeFile::with_mime_type("cv", PDF_MIME_TYPE))).unwrap();
        assert!(form.error_message().is_empty());
        assert_eq!(form.selected_file().map(|f| f.file_name()), Some("cv"));
        assert_eq!(form.phase(), FormPhase::PartiallyFilled);
    }

    #[test]
    fn test_rejected_file_replaces_previous_selection() {
        let mut form = FormState::default();
        form.select_resume_file(Some(pdf())).unwrap();
        form.select_resume_file(Some(ResumeFile::from_path("photo.png"))).unwrap_err();
        assert!(form.selected_file().is_none());

        form.select_resume_file(Some(pdf())).unwrap();
        form.select_resume_file(None).unwrap_err();
        assert!(form.selected_file().is_none());
        assert_eq!(form.error_message(), "Please upload a PDF file.");
    }

    #[test]
    fn test_submit_without_file_reports_missing_resume() {
        let mut form = FormState::default();
        form.set_job_titles_text("Engineer");
        form.set_job_count_text("abc");

        assert_eq!(form.submit(), Err(FormError::MissingResume));
        assert_eq!(form.error_message(), "Please upload a resume.");

        let mut form = FormState::default();
        assert_eq!(form.submit(), Err(FormError::MissingResume));
    }

    #[test]
    fn test_submit_with_blank_titles_reports_missing_titles() {
        for titles in ["", " ", "\t\n  "] {
            let mut form = filled_form();
            form.set_job_titles_text(titles);

            assert_eq!(form.submit(), Err(FormError::MissingJobTitles));
            assert_eq!(form.error_message(), "Please enter job titles.");
        }
    }

    #[test]
    fn test_submit_with_bad_count_reports_invalid_count() {
        for count in ["", "0", "-1", "abc", "0.5", " ", "NaN", "inf"] {
            let mut form = filled_form();
            form.set_job_count_text(count);

            assert_eq!(form.submit(), Err(FormError::InvalidJobCount), "count {count:?}");
            assert_eq!(form.error_message(), "Please enter a valid number of jobs to return.");
        }
    }

    #[test]
    fn test_submit_builds_request() {
        let mut form = filled_form();
        form.set_job_titles_text("  Software Engineer  ");
        form.set_job_count_text("10");

        let request = form.submit().unwrap();
        assert_eq!(request.job_titles, "Software Engineer");
        assert_eq!(request.max_results, 10);
        assert_eq!(request.resume, pdf());
        assert!(form.error_message().is_empty());
    }

    #[test]
    fn test_parse_job_count() {
        assert_eq!(parse_job_count("1"), Some(1));
        assert_eq!(parse_job_count("25"), Some(25));
        assert_eq!(parse_job_count(" 7 "), Some(7));
        assert_eq!(parse_job_count("2.9"), Some(2));
        assert_eq!(parse_job_count("1e2"), Some(100));
        assert_eq!(parse_job_count("99999999999"), Some(u32::MAX));
        assert_eq!(parse_job_count(""), None);
        assert_eq!(parse_job_count("0"), None);
        assert_eq!(parse_job_count("-1"), None);
        assert_eq!(parse_job_count("abc"), None);
        assert_eq!(parse_job_count("infinity"), None);
    }

    #[test]
    fn test_failed_submit_keeps_previous_results() {
        let mut form = filled_form();
        let request = form.submit().unwrap();
        assert_eq!(request.max_results, 3);
        form.apply_match_result(Ok(MockJobMatcher::listings())).unwrap();

        form.set_job_titles_text("");
        form.submit().unwrap_err();
        assert_eq!(form.phase(), FormPhase::Invalid);
        assert_eq!(form.results().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_with_mock_delivers_fixed_listings() {
        let mut form = filled_form();
        form.set_job_count_text("1");

        let results = form.submit_with(&MockJobMatcher).await.unwrap();
        let listings = results.listings();
        assert_eq!(listings.len(), 2);
        assert_eq!((listings[0].company.as_str(), listings[0].title.as_str()), ("TechCorp", "Software Engineer"));
        assert_eq!((listings[1].company.as_str(), listings[1].title.as_str()), ("DataInc", "Data Scientist"));

        assert!(form.error_message().is_empty());
        assert_eq!(form.phase(), FormPhase::ReadyResults);
    }

    #[tokio::test]
    async fn test_successful_submit_clears_previous_error() {
        let mut form = filled_form();
        form.set_job_count_text("0");
        form.submit().unwrap_err();
        assert_eq!(form.phase(), FormPhase::Invalid);

        form.set_job_count_text("2");
        form.submit_with(&MockJobMatcher).await.unwrap();
        assert!(form.error_message().is_empty());
        assert_eq!(form.phase(), FormPhase::ReadyResults);
    }

    #[tokio::test]
    async fn test_service_error_uses_error_slot() {
        let mut form = filled_form();
        form.submit_with(&MockJobMatcher).await.unwrap();

        let err = form.submit_with(&FailingMatcher).await.unwrap_err();
        assert!(matches!(err, FormError::Service(ServiceError::Unavailable(_))));
        assert_eq!(
            form.error_message(),
            "Job matching service is unavailable: connection refused"
        );
        assert_eq!(form.results().len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_resets_everything_but_display_mode() {
        let mut form = filled_form();
        form.toggle_display_mode();
        form.submit_with(&MockJobMatcher).await.unwrap();

        form.refresh();

        assert_eq!(form.phase(), FormPhase::Empty);
        assert!(form.selected_file().is_none());
        assert!(form.job_titles_text().is_empty());
        assert!(form.job_count_text().is_empty());
        assert!(form.error_message().is_empty());
        assert!(form.results().is_empty());
        assert!(!form.results().is_delivered());
        assert_eq!(form.display_mode(), DisplayMode::Dark);
    }

    #[test]
    fn test_refresh_from_invalid() {
        let mut form = FormState::new(DisplayMode::Light);
        form.submit().unwrap_err();
        form.refresh();
        assert_eq!(form.phase(), FormPhase::Empty);
        assert!(form.error_message().is_empty());
    }

    #[test]
    fn test_refresh_from_partially_filled() {
        let mut form = FormState::new(DisplayMode::Dark);
        form.set_job_titles_text("Software Engineer");
        form.set_job_count_text("4");
        assert_eq!(form.phase(), FormPhase::PartiallyFilled);

        form.refresh();
        assert_eq!(form.phase(), FormPhase::Empty);
        assert!(form.job_titles_text().is_empty());
        assert!(form.job_count_text().is_empty());
        assert_eq!(form.display_mode(), DisplayMode::Dark);
    }

    #[test]
    fn test_late_listings_keep_newer_error() {
        let mut form = filled_form();
        form.submit().unwrap();
        form.select_resume_file(Some(ResumeFile::from_path("notes.txt"))).unwrap_err();

        form.apply_match_result(Ok(MockJobMatcher::listings())).unwrap();
        assert_eq!(form.error_message(), "Please upload a PDF file.");
        assert_eq!(form.phase(), FormPhase::Invalid);
        assert_eq!(form.results().len(), 2);
    }

    #[test]
    fn test_double_toggle_restores_mode() {
        let mut form = filled_form();
        form.set_job_count_text("x");
        form.submit().unwrap_err();

        assert_eq!(form.toggle_display_mode(), DisplayMode::Dark);
        assert_eq!(form.toggle_display_mode(), DisplayMode::Light);

        assert_eq!(form.error_message(), "Please enter a valid number of jobs to return.");
        assert_eq!(form.job_count_text(), "x");
        assert!(form.selected_file().is_some());
    }

    #[test]
    fn test_display_mode_helpers() {
        assert_eq!(DisplayMode::from_dark(true), DisplayMode::Dark);
        assert_eq!(DisplayMode::from_dark(false), DisplayMode::Light);
        assert!(DisplayMode::Dark.is_dark());
        assert_eq!(DisplayMode::Light.toggled().toggled(), DisplayMode::Light);
    }
}
