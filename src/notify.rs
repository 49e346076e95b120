//! Result delivery notifications.
//!
//! After a search succeeds the results are "sent" to the user. The only
//! notifier today writes a log line; a failing notifier never prevents the
//! results from being displayed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::ResultSet;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("Failed to deliver results: {0}")]
    Delivery(String),
}

/// Where delivered results are sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipient(String);

impl Recipient {
    /// Build a recipient from configuration text; blank text means no recipient
    pub fn parse(address: &str) -> Option<Self> {
        let address = address.trim();
        if address.is_empty() {
            None
        } else {
            Some(Self(address.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, results: &ResultSet, recipient: Option<&Recipient>) -> Result<(), NotifyError>;
}

/// Notifier that records delivery in the log instead of sending email
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, results: &ResultSet, recipient: Option<&Recipient>) -> Result<(), NotifyError> {
        tracing::info!(
            recipient = recipient.map(Recipient::as_str).unwrap_or("<unset>"),
            count = results.len(),
            "Email sent with job results"
        );
        Ok(())
    }
}
