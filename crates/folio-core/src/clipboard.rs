//! Copy-to-clipboard with a transient confirmation
//!
//! The system clipboard is tried first. When it is missing or refuses the
//! write, a fallback backend (for the desktop shell, a selection-based copy
//! inside the webview) is used instead. Either success raises the
//! confirmation flag for a fixed hold; a later copy restarts the hold.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::{watch, Mutex as AsyncMutex};

use crate::error::FolioResult;

/// Something that can receive text
///
/// Resolves once the write is known to have landed, or with the reason it
/// did not.
#[async_trait]
pub trait ClipboardBackend: Send {
    async fn write_text(&mut self, text: &str) -> FolioResult<()>;
}

/// In-memory selection buffer
///
/// Stands in for "select the text and copy the selection". Clones share
/// the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SelectionBuffer {
    contents: Arc<Mutex<Option<String>>>,
}

impl SelectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

#[async_trait]
impl ClipboardBackend for SelectionBuffer {
    async fn write_text(&mut self, text: &str) -> FolioResult<()> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyMethod),
    Failed,
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

pub struct ClipboardCopier {
    primary: Option<AsyncMutex<Box<dyn ClipboardBackend>>>,
    fallback: AsyncMutex<Box<dyn ClipboardBackend>>,
    feedback: watch::Sender<bool>,
    generation: AtomicU64,
    hold: Duration,
}

impl std::fmt::Debug for ClipboardCopier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardCopier")
            .field("has_primary", &self.primary.is_some())
            .field("showing", &*self.feedback.borrow())
            .field("hold", &self.hold)
            .finish()
    }
}

impl ClipboardCopier {
    /// `primary` is `None` when no system clipboard is available
    pub fn new(
        primary: Option<Box<dyn ClipboardBackend>>,
        fallback: Box<dyn ClipboardBackend>,
        hold: Duration,
    ) -> Self {
        let (feedback, _) = watch::channel(false);
        Self {
            primary: primary.map(AsyncMutex::new),
            fallback: AsyncMutex::new(fallback),
            feedback,
            generation: AtomicU64::new(0),
            hold,
        }
    }

    /// Watch the confirmation flag
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.feedback.subscribe()
    }

    pub fn is_showing(&self) -> bool {
        *self.feedback.borrow()
    }

    /// Copy `text`, show the confirmation, and clear it after the hold.
    ///
    /// Resolves once the hold has elapsed (or immediately on failure).
    pub async fn copy(&self, text: &str) -> CopyOutcome {
        let method = match self.write(text).await {
            Some(method) => method,
            None => return CopyOutcome::Failed,
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.feedback.send_replace(true);
        tracing::debug!(?method, "Copied to clipboard");

        tokio::time::sleep(self.hold).await;

        // A newer copy owns the flag now
        if self.generation.load(Ordering::SeqCst) == generation {
            self.feedback.send_replace(false);
        }
        CopyOutcome::Copied(method)
    }

    async fn write(&self, text: &str) -> Option<CopyMethod> {
        if let Some(primary) = &self.primary {
            match primary.lock().await.write_text(text).await {
                Ok(()) => return Some(CopyMethod::Primary),
                Err(e) => tracing::debug!(error = %e, "System clipboard refused, using fallback"),
            }
        }
        match self.fallback.lock().await.write_text(text).await {
            Ok(()) => Some(CopyMethod::Fallback),
            Err(e) => {
                tracing::warn!(error = %e, "Copy failed");
                None
            }
        }
    }
}
