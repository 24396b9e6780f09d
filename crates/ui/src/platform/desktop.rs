use std::process::Command;

use super::UiLinkOpener;

/// Hands links to the operating system's default browser.
pub struct SystemLinkOpener;

impl UiLinkOpener for SystemLinkOpener {
    fn open_url(&self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        #[cfg(target_os = "macos")]
        let spawned = Command::new("open").arg(url).spawn();
        #[cfg(target_os = "windows")]
        let spawned = Command::new("cmd").args(["/C", "start", "", url]).spawn();
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let spawned = Command::new("xdg-open").arg(url).spawn();

        if let Err(err) = spawned {
            tracing::warn!(url, error = %err, "failed to open link");
        }
    }
}
