//! Job search command

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{format_results_table, print_formatted, OutputFormat};
use crate::config::{Config, NotifyConfig};
use crate::form::FormState;
use crate::matching::{JobListing, JobMatcher, MockJobMatcher, ResultSet};
use crate::notify::{LogNotifier, Notifier};
use crate::resume::ResumeFile;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Resume file (PDF)
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Job titles, e.g. "Software Engineer, Data Scientist"
    #[arg(short, long, default_value = "")]
    pub titles: String,

    /// Number of jobs to return
    #[arg(short = 'n', long, default_value = "", allow_hyphen_values = true)]
    pub count: String,
}

#[derive(Serialize)]
struct SearchResult<'a> {
    job_titles: &'a str,
    job_count: &'a str,
    delivered_at: Option<DateTime<Local>>,
    jobs: &'a [JobListing],
}

pub async fn run(args: SearchArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let mut form = FormState::new(config.launcher.display_mode());

    if let Some(path) = args.resume {
        if !path.is_file() {
            anyhow::bail!("Resume file not found: {}", path.display());
        }
        form.select_resume_file(Some(ResumeFile::from_path(path)))?;
    }
    form.set_job_titles_text(args.titles);
    form.set_job_count_text(args.count);

    let results = search_and_notify(&mut form, &MockJobMatcher, &LogNotifier, &config.notify).await?;

    let output = SearchResult {
        job_titles: form.job_titles_text(),
        job_count: form.job_count_text(),
        delivered_at: results.delivered_at(),
        jobs: results.listings(),
    };

    print_formatted(&output, format, |r| {
        if quiet {
            format_results_table(r.jobs)
        } else {
            format!("Job Matches ({})\n\n{}", r.jobs.len(), format_results_table(r.jobs))
        }
    });

    Ok(())
}

/// Submit the form, then notify about the delivered results.
///
/// A notification failure is logged and does not fail the search.
pub async fn search_and_notify(
    form: &mut FormState,
    matcher: &dyn JobMatcher,
    notifier: &dyn Notifier,
    settings: &NotifyConfig,
) -> Result<ResultSet> {
    let results = form.submit_with(matcher).await?.clone();

    if settings.enabled {
        let recipient = settings.recipient();
        if let Err(e) = notifier.notify(&results, recipient.as_ref()).await {
            tracing::warn!("{}", e);
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormError;
    use crate::notify::{NotifyError, Recipient};
    use async_trait::async_trait;

    struct BrokenNotifier;

    #[async_trait]
    impl Notifier for BrokenNotifier {
        async fn notify(&self, _results: &ResultSet, _recipient: Option<&Recipient>) -> Result<(), NotifyError> {
            Err(NotifyError::Delivery("mailbox full".to_string()))
        }
    }

    fn filled_form() -> FormState {
        let mut form = FormState::default();
        form.select_resume_file(Some(ResumeFile::from_path("cv.pdf"))).unwrap();
        form.set_job_titles_text("Software Engineer");
        form.set_job_count_text("2");
        form
    }

    #[tokio::test]
    async fn test_search_and_notify_returns_results() {
        let mut form = filled_form();
        let results = search_and_notify(&mut form, &MockJobMatcher, &LogNotifier, &NotifyConfig::default())
            .await
            .unwrap();

        assert_eq!(results.listings(), MockJobMatcher::listings().as_slice());
        assert_eq!(form.results(), &results);
    }

    #[tokio::test]
    async fn test_notification_failure_is_not_fatal() {
        let mut form = filled_form();
        let results = search_and_notify(&mut form, &MockJobMatcher, &BrokenNotifier, &NotifyConfig::default())
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert!(form.error_message().is_empty());
    }

    #[tokio::test]
    async fn test_validation_error_is_returned() {
        let mut form = filled_form();
        form.set_job_count_text("-1");

        let err = search_and_notify(&mut form, &MockJobMatcher, &LogNotifier, &NotifyConfig::default())
            .await
            .unwrap_err();

        assert_eq!(err.downcast_ref::<FormError>(), Some(&FormError::InvalidJobCount));
        assert_eq!(err.to_string(), "Please enter a valid number of jobs to return.");
    }
}
