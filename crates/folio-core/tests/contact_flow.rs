//! Timing tests for the asynchronous user actions
//!
//! Copy-to-clipboard confirmation and contact form submission, run on a
//! paused tokio clock so every hold can be checked to the millisecond.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::{
    Ack, ClipboardBackend, ClipboardCopier, ContactForm, ContactMessage, ContactSubmitter,
    CopyMethod, CopyOutcome, FolioError, FolioResult, SelectionBuffer, SimulatedSubmitter,
    SubmitOutcome, SubmitStatus, WithTimeout,
};
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Project enquiry".to_string(),
        message: "Are you available next month?".to_string(),
    }
}

// ============================================================================
// Test Doubles
// ============================================================================

/// System clipboard that is present but always refuses
struct DeniedClipboard;

#[async_trait]
impl ClipboardBackend for DeniedClipboard {
    async fn write_text(&mut self, _text: &str) -> FolioResult<()> {
        Err(FolioError::Clipboard("permission denied".to_string()))
    }
}

/// Selection copy whose document command reports false after a round trip
struct RefusedSelection {
    round_trip: Duration,
}

#[async_trait]
impl ClipboardBackend for RefusedSelection {
    async fn write_text(&mut self, _text: &str) -> FolioResult<()> {
        sleep(self.round_trip).await;
        Err(FolioError::Clipboard("copy command was refused".to_string()))
    }
}

/// Counts calls and fails the first `failures` of them
struct FlakySubmitter {
    calls: AtomicUsize,
    failures: usize,
    delay: Duration,
}

impl FlakySubmitter {
    fn new(failures: usize, delay: Duration) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failures,
            delay,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactSubmitter for FlakySubmitter {
    async fn submit(&self, _message: &ContactMessage) -> FolioResult<Ack> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        sleep(self.delay).await;
        if call < self.failures {
            Err(FolioError::SubmitFailed("mail relay unavailable".to_string()))
        } else {
            Ok(Ack::now())
        }
    }
}

// ============================================================================
// Clipboard
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_fallback_copy_confirms_for_two_seconds() {
    let selection = SelectionBuffer::new();
    let copier = Arc::new(ClipboardCopier::new(
        Some(Box::new(DeniedClipboard)),
        Box::new(selection.clone()),
        ms(2000),
    ));

    let task = {
        let copier = copier.clone();
        tokio::spawn(async move { copier.copy("ntp.nantasang@gmail.com").await })
    };

    sleep(ms(1)).await;
    assert!(copier.is_showing());
    assert_eq!(selection.contents().as_deref(), Some("ntp.nantasang@gmail.com"));

    sleep(ms(1998)).await; // t = 1999
    assert!(copier.is_showing());

    sleep(ms(2)).await; // t = 2001
    assert!(!copier.is_showing());

    assert_eq!(task.await.unwrap(), CopyOutcome::Copied(CopyMethod::Fallback));
}

#[tokio::test(start_paused = true)]
async fn test_refused_fallback_never_confirms() {
    let copier = Arc::new(ClipboardCopier::new(
        Some(Box::new(DeniedClipboard)),
        Box::new(RefusedSelection { round_trip: ms(30) }),
        ms(2000),
    ));
    let mut feedback = copier.subscribe();

    let task = {
        let copier = copier.clone();
        tokio::spawn(async move { copier.copy("ntp.nantasang@gmail.com").await })
    };

    sleep(ms(10)).await;
    assert!(!copier.is_showing());

    assert_eq!(task.await.unwrap(), CopyOutcome::Failed);
    assert!(!copier.is_showing());
    assert!(!feedback.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_no_system_clipboard_uses_fallback() {
    let selection = SelectionBuffer::new();
    let copier = ClipboardCopier::new(None, Box::new(selection.clone()), ms(2000));
    assert_eq!(
        copier.copy("hello").await,
        CopyOutcome::Copied(CopyMethod::Fallback)
    );
    assert_eq!(selection.contents().as_deref(), Some("hello"));
}

#[tokio::test(start_paused = true)]
async fn test_second_copy_restarts_confirmation() {
    let copier = Arc::new(ClipboardCopier::new(
        None,
        Box::new(SelectionBuffer::new()),
        ms(2000),
    ));
    let mut feedback = copier.subscribe();

    let first = {
        let copier = copier.clone();
        tokio::spawn(async move { copier.copy("a").await })
    };
    sleep(ms(1500)).await;

    let second = {
        let copier = copier.clone();
        tokio::spawn(async move { copier.copy("b").await })
    };

    sleep(ms(501)).await; // t = 2001, first hold over
    assert!(copier.is_showing());

    sleep(ms(1000)).await; // t = 3001, second hold still running
    assert!(copier.is_showing());

    sleep(ms(500)).await; // t = 3501
    assert!(!copier.is_showing());

    first.await.unwrap();
    second.await.unwrap();
    assert!(!*feedback.borrow_and_update());
}

// ============================================================================
// Contact Form
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_submit_is_not_reentrant() {
    let submitter = Arc::new(FlakySubmitter::new(0, ms(1200)));
    let form = Arc::new(ContactForm::new(submitter.clone(), ms(4000)));

    let first = {
        let form = form.clone();
        tokio::spawn(async move { form.submit(message()).await })
    };

    sleep(ms(1)).await;
    assert_eq!(form.status(), SubmitStatus::Sending);

    // Double click while the first request is in flight
    assert_eq!(form.submit(message()).await, SubmitOutcome::Ignored);

    sleep(ms(1198)).await; // t = 1199
    assert_eq!(form.status(), SubmitStatus::Sending);

    sleep(ms(2)).await; // t = 1201
    assert_eq!(form.status(), SubmitStatus::Sent);

    // Submits during the confirmation are dropped too
    assert_eq!(form.submit(message()).await, SubmitOutcome::Ignored);

    sleep(ms(3998)).await; // t = 5199
    assert_eq!(form.status(), SubmitStatus::Sent);

    sleep(ms(2)).await; // t = 5201
    assert_eq!(form.status(), SubmitStatus::Idle);

    assert!(matches!(
        first.await.unwrap(),
        SubmitOutcome::Delivered(_)
    ));
    assert_eq!(submitter.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_status_transitions_are_observable() {
    let form = Arc::new(ContactForm::new(
        Arc::new(SimulatedSubmitter::new(ms(1200))),
        ms(4000),
    ));
    let mut rx = form.subscribe();

    let task = {
        let form = form.clone();
        tokio::spawn(async move { form.submit(message()).await })
    };

    let mut seen = Vec::new();
    while rx.changed().await.is_ok() {
        let status = rx.borrow_and_update().clone();
        let done = status == SubmitStatus::Idle;
        seen.push(status);
        if done {
            break;
        }
    }
    task.await.unwrap();

    assert_eq!(
        seen,
        vec![SubmitStatus::Sending, SubmitStatus::Sent, SubmitStatus::Idle]
    );
}

#[tokio::test(start_paused = true)]
async fn test_failure_is_retryable() {
    let submitter = Arc::new(FlakySubmitter::new(1, ms(300)));
    let form = ContactForm::new(submitter.clone(), ms(4000));

    let outcome = form.submit(message()).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed("Submission failed: mail relay unavailable".to_string())
    );
    assert!(matches!(form.status(), SubmitStatus::Failed(_)));
    assert!(form.status().accepts_submit());

    assert!(matches!(
        form.submit(message()).await,
        SubmitOutcome::Delivered(_)
    ));
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert_eq!(submitter.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_message_does_not_reach_submitter() {
    let submitter = Arc::new(FlakySubmitter::new(0, ms(10)));
    let form = ContactForm::new(submitter.clone(), ms(4000));

    let mut blank = message();
    blank.name = String::new();
    assert!(matches!(
        form.submit(blank).await,
        SubmitOutcome::Rejected(_)
    ));
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert_eq!(submitter.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_wrapper() {
    let slow = WithTimeout::new(SimulatedSubmitter::new(ms(20_000)), ms(10_000));
    let start = tokio::time::Instant::now();
    let err = slow.submit(&message()).await.unwrap_err();
    assert!(matches!(err, FolioError::SubmitTimeout(10_000)));
    assert!(start.elapsed() >= ms(10_000));

    let form = ContactForm::new(Arc::new(slow), ms(4000));
    assert_eq!(
        form.submit(message()).await,
        SubmitOutcome::Failed("Submission timed out after 10000 ms".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn test_fast_submitter_passes_through_timeout() {
    let fast = WithTimeout::new(SimulatedSubmitter::new(ms(1200)), ms(10_000));
    let ack = fast.submit(&message()).await.unwrap();
    assert!(!ack.reference.to_string().is_empty());
}
