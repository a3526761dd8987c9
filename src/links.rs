//! External links (CV, social profiles, project repos)

use std::path::Path;

/// Open `url` in the system browser.
///
/// Relative links are treated as local files and opened only if they
/// exist.
pub fn open_external(url: &str) {
    let Some(target) = resolve(url) else {
        tracing::warn!(url, "Link target not found");
        return;
    };
    match webbrowser::open(&target) {
        Ok(()) => tracing::debug!(url = %target, "Opened link"),
        Err(e) => tracing::warn!(url = %target, error = %e, "Failed to open link"),
    }
}

fn resolve(url: &str) -> Option<String> {
    if is_external(url) {
        return Some(url.to_string());
    }
    if url.contains(':') {
        return None;
    }
    let path = Path::new(url).canonicalize().ok()?;
    Some(format!("file://{}", path.display()))
}

fn is_external(url: &str) -> bool {
    ["https://", "http://", "mailto:", "file://"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}
