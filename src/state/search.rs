//! Search-related application state

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::NotifyConfig;
use crate::form::FormState;
use crate::matching::{JobListing, JobMatcher, ResultSet, ServiceError};
use crate::notify::{Notifier, NotifyError, Recipient};
use crate::state::StateEvent;
use crate::task::{cancel_task, poll_task, PollResult};

/// Drives the job matcher and notifier for one form.
///
/// At most one match request is in flight. A submit while one is pending is
/// rejected; refresh aborts it.
pub struct SearchState {
    matcher: Arc<dyn JobMatcher>,
    notifier: Arc<dyn Notifier>,
    /// Whether to notify after each delivered result set
    notify_enabled: bool,
    recipient: Option<Recipient>,
    /// Async task for the pending match request
    task: Option<JoinHandle<Result<Vec<JobListing>, ServiceError>>>,
    /// Async task for the running notification
    notify_task: Option<JoinHandle<Result<(), NotifyError>>>,
    /// Results delivered while a notification was still running
    queued_notify: Option<ResultSet>,
}

impl SearchState {
    pub fn new(
        matcher: Arc<dyn JobMatcher>,
        notifier: Arc<dyn Notifier>,
        settings: &NotifyConfig,
    ) -> Self {
        Self {
            matcher,
            notifier,
            notify_enabled: settings.enabled,
            recipient: settings.recipient(),
            task: None,
            notify_task: None,
            queued_notify: None,
        }
    }

    /// Check if a match request is in flight
    pub fn is_pending(&self) -> bool {
        self.task.is_some()
    }

    /// Check if any background work is still running
    pub fn is_busy(&self) -> bool {
        self.task.is_some() || self.notify_task.is_some() || self.queued_notify.is_some()
    }

    /// Validate the form and start a match request.
    /// Returns the status message for the outcome, or None if a search is
    /// already pending.
    pub fn submit(&mut self, form: &mut FormState) -> Option<StateEvent> {
        if self.is_pending() {
            tracing::debug!("Ignoring submit while a search is pending");
            return None;
        }

        let request = match form.submit() {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Search form invalid: {}", e);
                return Some(StateEvent::StatusMessage(e.to_string()));
            }
        };

        tracing::info!(
            "Searching for up to {} jobs matching {:?}",
            request.max_results,
            request.job_titles
        );

        let matcher = Arc::clone(&self.matcher);
        self.task = Some(tokio::spawn(async move { matcher.find_matches(&request).await }));

        Some(StateEvent::StatusMessage("Finding matching jobs...".to_string()))
    }

    /// Abort the pending match request and any notification still to be
    /// reported. Returns true if a match request was aborted.
    pub fn cancel(&mut self) -> bool {
        let cancelled = cancel_task(&mut self.task);
        if cancelled {
            tracing::info!("Cancelled pending search");
        }
        if cancel_task(&mut self.notify_task) {
            tracing::debug!("Cancelled pending notification");
        }
        self.queued_notify = None;
        cancelled
    }

    /// Cancel any pending search and reset the form
    pub fn refresh(&mut self, form: &mut FormState) {
        self.cancel();
        form.refresh();
    }

    /// Poll search and notification tasks for completion
    pub fn poll(&mut self, form: &mut FormState) -> Vec<StateEvent> {
        let mut events = Vec::new();

        match poll_task(&mut self.task) {
            PollResult::Complete(Ok(result)) => match form.apply_match_result(result) {
                Ok(results) => {
                    let count = results.len();
                    events.push(StateEvent::LogInfo(format!("Delivered {} job matches", count)));
                    events.push(StateEvent::StatusMessage(format!("Found {} matching jobs", count)));
                    let results = results.clone();
                    self.start_notify(results);
                }
                Err(e) => {
                    events.push(StateEvent::StatusMessage(format!("Search failed: {}", e)));
                }
            },
            PollResult::Complete(Err(e)) => {
                events.push(StateEvent::LogError(format!("Search task panicked: {}", e)));
                events.push(StateEvent::StatusMessage("Search failed".to_string()));
            }
            PollResult::Pending | PollResult::NoTask => {}
        }

        match poll_task(&mut self.notify_task) {
            PollResult::Complete(Ok(Ok(()))) => {}
            PollResult::Complete(Ok(Err(e))) => {
                events.push(StateEvent::LogWarn(e.to_string()));
                events.push(StateEvent::StatusMessage(
                    "Results shown, but could not be sent".to_string(),
                ));
            }
            PollResult::Complete(Err(e)) => {
                events.push(StateEvent::LogError(format!("Notification task panicked: {}", e)));
            }
            PollResult::Pending | PollResult::NoTask => {}
        }

        if self.notify_task.is_none() {
            if let Some(results) = self.queued_notify.take() {
                self.start_notify(results);
            }
        }

        events
    }

    fn start_notify(&mut self, results: ResultSet) {
        if !self.notify_enabled {
            tracing::debug!("Result notification disabled");
            return;
        }

        if self.notify_task.is_some() {
            tracing::debug!("Notification in progress, queueing latest results");
            self.queued_notify = Some(results);
            return;
        }

        let notifier = Arc::clone(&self.notifier);
        let recipient = self.recipient.clone();
        self.notify_task = Some(tokio::spawn(async move {
            notifier.notify(&results, recipient.as_ref()).await
        }));
    }
}

impl Drop for SearchState {
    fn drop(&mut self) {
        // Tearing down the view abandons its in-flight request
        self.cancel();
    }
}
