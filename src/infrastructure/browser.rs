//! Headless browser session manager
//!
//! Some job boards only render their listings client-side; adapters for
//! those need a real browser. The session is lazy: nothing is launched
//! until an adapter asks for it, and both lifecycle transitions are
//! idempotent. The manager owns the browser process exclusively - adapters
//! open tabs through it rather than holding the process handle.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, info};

/// Environment override pointing at a pre-installed browser binary.
pub const CHROME_EXECUTABLE_ENV: &str = "CHROME_EXECUTABLE_PATH";

/// Fixed launch arguments; sandboxing is disabled separately via
/// `LaunchOptions::sandbox` so the session works in containers.
const BROWSER_ARGS: &[&str] = &[
    "--disable-dev-shm-usage",
    "--disable-accelerated-2d-canvas",
    "--disable-gpu",
];

const WINDOW_SIZE: (u32, u32) = (1920, 1080);

/// Two-state lifecycle over an optional headless Chrome process.
///
/// Starts Closed; `initialize` transitions to Open, `close` back to Closed.
/// Calling either in its current state is a no-op.
#[derive(Default)]
pub struct BrowserSession {
    browser: Option<Browser>,
}

impl BrowserSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch the headless browser if it is not already running.
    pub fn initialize(&mut self) -> Result<()> {
        if self.browser.is_some() {
            debug!("browser session already open");
            return Ok(());
        }

        let args: Vec<&OsStr> = BROWSER_ARGS.iter().map(|arg| OsStr::new(*arg)).collect();
        let path = std::env::var_os(CHROME_EXECUTABLE_ENV).map(PathBuf::from);

        let browser = Browser::new(LaunchOptions {
            headless: true,
            sandbox: false,
            window_size: Some(WINDOW_SIZE),
            args,
            path,
            ..Default::default()
        })
        .context("failed to launch headless browser")?;

        info!("browser session opened");
        self.browser = Some(browser);
        Ok(())
    }

    /// Terminate the browser process if one is running.
    pub fn close(&mut self) {
        if self.browser.take().is_some() {
            info!("browser session closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.browser.is_some()
    }

    /// Open a fresh tab for a rendering adapter. Fails while Closed.
    pub fn new_tab(&self) -> Result<Arc<Tab>> {
        self.browser
            .as_ref()
            .context("browser session is not initialized")?
            .new_tab()
            .context("failed to open browser tab")
    }

    /// Process id of the running browser, if Open.
    pub fn process_id(&self) -> Option<u32> {
        self.browser.as_ref().and_then(Browser::get_process_id)
    }
}
