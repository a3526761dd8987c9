//! Contact form submission
//!
//! ```text
//!   Idle ──submit──► Sending ──ok──► Sent ──hold──► Idle
//!    ▲                  │
//!    │                  └──err──► Failed ──submit──► Sending
//!    └─────────────────────────────────┘
//! ```
//!
//! Submits are accepted from `Idle` and `Failed` only; anything arriving
//! while a request is in flight or the confirmation is showing is ignored.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use ulid::Ulid;

use crate::error::{FolioError, FolioResult};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> FolioResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(FolioError::Validation(format!("{field} is required")));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => {
                return Err(FolioError::Validation(format!(
                    "{email:?} is not an email address"
                )))
            }
        }
        Ok(())
    }
}

/// Receipt for a delivered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub reference: Ulid,
    pub received_at: DateTime<Utc>,
}

impl Ack {
    pub fn now() -> Self {
        Self {
            reference: Ulid::new(),
            received_at: Utc::now(),
        }
    }
}

/// Delivers a message somewhere
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, message: &ContactMessage) -> FolioResult<Ack>;
}

/// Pretends to deliver after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, message: &ContactMessage) -> FolioResult<Ack> {
        tokio::time::sleep(self.delay).await;
        let ack = Ack::now();
        tracing::info!(
            reference = %ack.reference,
            subject = %message.subject,
            "Contact message accepted"
        );
        Ok(ack)
    }
}

/// Bounds how long the inner submitter may take
#[derive(Debug, Clone)]
pub struct WithTimeout<S> {
    inner: S,
    limit: Duration,
}

impl<S> WithTimeout<S> {
    pub fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl<S: ContactSubmitter> ContactSubmitter for WithTimeout<S> {
    async fn submit(&self, message: &ContactMessage) -> FolioResult<Ack> {
        match tokio::time::timeout(self.limit, self.inner.submit(message)).await {
            Ok(result) => result,
            Err(_) => Err(FolioError::SubmitTimeout(self.limit.as_millis() as u64)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmitStatus::Idle | SubmitStatus::Failed(_))
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered(Ack),
    /// Dropped because a submission was already in progress or confirmed
    Ignored,
    /// Input failed validation; status untouched
    Rejected(String),
    Failed(String),
}

pub struct ContactForm {
    submitter: Arc<dyn ContactSubmitter>,
    status: watch::Sender<SubmitStatus>,
    sent_hold: Duration,
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("status", &*self.status.borrow())
            .field("sent_hold", &self.sent_hold)
            .finish()
    }
}

impl ContactForm {
    pub fn new(submitter: Arc<dyn ContactSubmitter>, sent_hold: Duration) -> Self {
        let (status, _) = watch::channel(SubmitStatus::Idle);
        Self {
            submitter,
            status,
            sent_hold,
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmitStatus> {
        self.status.subscribe()
    }

    /// Submit `message` and drive the status through to its resting state.
    ///
    /// On success this resolves after the confirmation hold, once the form
    /// is back to `Idle`.
    pub async fn submit(&self, message: ContactMessage) -> SubmitOutcome {
        if !self.status.borrow().accepts_submit() {
            return SubmitOutcome::Ignored;
        }
        if let Err(e) = message.validate() {
            return SubmitOutcome::Rejected(e.to_string());
        }

        let claimed = self.status.send_if_modified(|status| {
            if status.accepts_submit() {
                *status = SubmitStatus::Sending;
                true
            } else {
                false
            }
        });
        if !claimed {
            return SubmitOutcome::Ignored;
        }

        match self.submitter.submit(&message).await {
            Ok(ack) => {
                self.status.send_replace(SubmitStatus::Sent);
                tokio::time::sleep(self.sent_hold).await;
                self.status.send_replace(SubmitStatus::Idle);
                SubmitOutcome::Delivered(ack)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact submission failed");
                let reason = e.to_string();
                self.status.send_replace(SubmitStatus::Failed(reason.clone()));
                SubmitOutcome::Failed(reason)
            }
        }
    }
}
