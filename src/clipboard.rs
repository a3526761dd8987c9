//! Clipboard backends for the desktop shell
//!
//! `SystemClipboard` writes through arboard. `WebviewSelection` is the
//! fallback: it selects a throwaway textarea inside the webview and runs
//! the document copy command there, reporting whether the command took.
//! Scripts can only be evaluated from the UI runtime, so the backend hands
//! each request to a coroutine owned by the shell and awaits the reply.

use async_trait::async_trait;
use dioxus::document;
use folio_core::{ClipboardBackend, FolioError, FolioResult};
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender};
use futures::channel::oneshot;
use futures::StreamExt;

pub struct SystemClipboard(arboard::Clipboard);

impl SystemClipboard {
    /// `None` when the platform has no usable clipboard
    pub fn open() -> Option<Self> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Some(Self(clipboard)),
            Err(e) => {
                tracing::debug!(error = %e, "System clipboard unavailable");
                None
            }
        }
    }
}

#[async_trait]
impl ClipboardBackend for SystemClipboard {
    async fn write_text(&mut self, text: &str) -> FolioResult<()> {
        self.0
            .set_text(text.to_string())
            .map_err(|e| FolioError::Clipboard(e.to_string()))
    }
}

/// Text to copy and where to send the verdict
pub type SelectionRequest = (String, oneshot::Sender<FolioResult<()>>);

pub struct WebviewSelection {
    requests: UnboundedSender<SelectionRequest>,
}

impl WebviewSelection {
    pub fn new(requests: UnboundedSender<SelectionRequest>) -> Self {
        Self { requests }
    }
}

#[async_trait]
impl ClipboardBackend for WebviewSelection {
    async fn write_text(&mut self, text: &str) -> FolioResult<()> {
        let (reply, verdict) = oneshot::channel();
        self.requests
            .unbounded_send((text.to_string(), reply))
            .map_err(|_| FolioError::Clipboard("webview is gone".to_string()))?;
        verdict
            .await
            .map_err(|_| FolioError::Clipboard("webview dropped the copy".to_string()))?
    }
}

/// Serve selection copies until every sender is dropped
pub async fn run_selection_copies(mut requests: UnboundedReceiver<SelectionRequest>) {
    while let Some((text, reply)) = requests.next().await {
        // Requester may have given up
        let _ = reply.send(selection_copy(&text).await);
    }
}

async fn selection_copy(text: &str) -> FolioResult<()> {
    let literal = serde_json::to_string(text).map_err(|e| FolioError::Clipboard(e.to_string()))?;
    let copied = document::eval(&selection_copy_script(&literal))
        .join::<bool>()
        .await
        .map_err(|e| FolioError::Clipboard(format!("{e:?}")))?;
    if copied {
        Ok(())
    } else {
        Err(FolioError::Clipboard("copy command was refused".to_string()))
    }
}

fn selection_copy_script(literal: &str) -> String {
    format!(
        r#"
        const area = document.createElement("textarea");
        area.value = {literal};
        area.setAttribute("readonly", "");
        area.style.position = "fixed";
        area.style.opacity = "0";
        document.body.appendChild(area);
        area.select();
        let ok = false;
        try {{
            ok = document.execCommand("copy");
        }} finally {{
            document.body.removeChild(area);
        }}
        return ok;
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_embeds_escaped_literal() {
        let literal = serde_json::to_string("a\"b</script>").unwrap();
        let script = selection_copy_script(&literal);
        assert!(script.contains(r#"area.value = "a\"b</script>";"#));
    }

    #[test]
    fn script_reports_command_result() {
        let script = selection_copy_script("\"x\"");
        assert!(script.contains(r#"ok = document.execCommand("copy");"#));
        assert!(script.trim_end().ends_with("return ok;"));
    }

    #[tokio::test]
    async fn refused_selection_is_an_error() {
        let (tx, mut rx) = futures::channel::mpsc::unbounded::<SelectionRequest>();
        let mut selection = WebviewSelection::new(tx);
        let webview = async {
            let (text, reply) = rx.next().await.unwrap();
            assert_eq!(text, "hi@example.com");
            reply
                .send(Err(FolioError::Clipboard("copy command was refused".to_string())))
                .unwrap();
        };
        let (result, ()) = tokio::join!(selection.write_text("hi@example.com"), webview);
        assert!(matches!(result, Err(FolioError::Clipboard(_))));
    }

    #[tokio::test]
    async fn closed_webview_is_an_error() {
        let (tx, rx) = futures::channel::mpsc::unbounded::<SelectionRequest>();
        drop(rx);
        let mut selection = WebviewSelection::new(tx);
        assert!(selection.write_text("x").await.is_err());
    }
}
