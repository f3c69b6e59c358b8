//! PDF export – writes the print document to a scoped temporary file, hands
//! it to a [`RenderService`], and saves the returned PDF bytes.
//!
//! The production service drives a headless Chrome through
//! `headless_chrome`. The temporary document is a `NamedTempFile`, so it is
//! removed on every exit path including render failures.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::error::GenerateError;
use crate::templates::HIGHLIGHT_DONE_FLAG;

/// How long the page may take to reach `document.readyState == "complete"`.
pub const LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Pause after highlighting so late DOM updates make it into the snapshot.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Result of a bounded wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The condition became true before the deadline.
    Signaled,
    /// The deadline passed first.
    TimedOut,
}

/// Poll `check` until it returns `true` or `timeout` elapses.
///
/// `check` runs at least once, even with a zero timeout. Errors from `check`
/// end the wait immediately.
pub fn wait_until<E>(
    timeout: Duration,
    poll: Duration,
    mut check: impl FnMut() -> Result<bool, E>,
) -> Result<WaitOutcome, E> {
    let deadline = Instant::now() + timeout;
    loop {
        if check()? {
            return Ok(WaitOutcome::Signaled);
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(WaitOutcome::TimedOut);
        }
        thread::sleep(poll.min(deadline - now));
    }
}

/// What the rendering service needs besides the document itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Paper size in inches; `None` leaves it to the document's `@page` rule.
    pub paper_size_inches: Option<(f64, f64)>,
    /// Upper bound on waiting for the highlight-completion flag.
    pub highlight_timeout: Duration,
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        let paper_size_inches = config.paper_size_inches();
        if paper_size_inches.is_none() {
            log::warn!(
                "Slide size {} × {} is not an absolute length, using the document's @page size",
                config.slide_width,
                config.slide_height
            );
        }
        Self {
            paper_size_inches,
            highlight_timeout: Duration::from_millis(config.timeout),
        }
    }
}

/// Something that turns an HTML file on disk into PDF bytes.
pub trait RenderService {
    fn render_pdf(&self, document: &Path, options: &RenderOptions)
        -> Result<Vec<u8>, GenerateError>;

    /// Short description for operator output.
    fn describe(&self) -> String {
        "external renderer".to_string()
    }
}

/// Headless Chrome (or Chromium) as the rendering service.
#[derive(Debug, Clone, Default)]
pub struct ChromeRenderer {
    /// Browser executable; `None` lets `headless_chrome` find one.
    pub executable: Option<PathBuf>,
}

impl ChromeRenderer {
    pub fn new(executable: Option<PathBuf>) -> Self {
        Self { executable }
    }

    fn launch(&self) -> Result<Browser, GenerateError> {
        match &self.executable {
            Some(path) => log::info!("Launching browser {}", path.display()),
            None => log::info!("Launching auto-detected browser"),
        }

        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .path(self.executable.clone())
            .build()
            .map_err(|e| GenerateError::Render(format!("invalid browser options: {e}")))?;

        Browser::new(options)
            .map_err(|e| GenerateError::Render(format!("browser launch failed: {e}")))
    }
}

impl RenderService for ChromeRenderer {
    fn render_pdf(
        &self,
        document: &Path,
        options: &RenderOptions,
    ) -> Result<Vec<u8>, GenerateError> {
        let absolute = document
            .canonicalize()
            .map_err(|e| GenerateError::io(document, e))?;
        let url = Url::from_file_path(&absolute).map_err(|_| {
            GenerateError::Render(format!(
                "cannot build a file URL for {}",
                absolute.display()
            ))
        })?;

        let browser = self.launch()?;
        let tab = browser
            .new_tab()
            .map_err(|e| GenerateError::Render(format!("could not open a tab: {e}")))?;

        log::info!("Loading presentation...");
        tab.navigate_to(url.as_str())
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| GenerateError::Render(format!("navigation failed: {e}")))?;

        let loaded = wait_until(LOAD_TIMEOUT, POLL_INTERVAL, || {
            page_flag(&tab, "document.readyState === 'complete'")
        })?;
        if loaded == WaitOutcome::TimedOut {
            return Err(GenerateError::Render(format!(
                "page did not finish loading within {}s",
                LOAD_TIMEOUT.as_secs()
            )));
        }

        log::info!("Applying syntax highlighting...");
        let highlight_check = format!("window.{HIGHLIGHT_DONE_FLAG} === true");
        match wait_until(options.highlight_timeout, POLL_INTERVAL, || {
            page_flag(&tab, &highlight_check)
        })? {
            WaitOutcome::Signaled => thread::sleep(SETTLE_DELAY),
            WaitOutcome::TimedOut => {
                log::warn!("Syntax highlighting did not finish, continuing without it")
            }
        }

        log::info!("Saving PDF...");
        let (paper_width, paper_height) = match options.paper_size_inches {
            Some((w, h)) => (Some(w), Some(h)),
            None => (None, None),
        };
        let pdf_options = PrintToPdfOptions {
            print_background: Some(true),
            prefer_css_page_size: Some(true),
            paper_width,
            paper_height,
            margin_top: Some(0.0),
            margin_bottom: Some(0.0),
            margin_left: Some(0.0),
            margin_right: Some(0.0),
            ..Default::default()
        };
        tab.print_to_pdf(Some(pdf_options))
            .map_err(|e| GenerateError::Render(format!("PDF rendering failed: {e}")))
    }

    fn describe(&self) -> String {
        match &self.executable {
            Some(path) => path.display().to_string(),
            None => "Auto-detect".to_string(),
        }
    }
}

/// Evaluate a boolean expression in the page.
fn page_flag(tab: &Tab, expression: &str) -> Result<bool, GenerateError> {
    let result = tab
        .evaluate(expression, false)
        .map_err(|e| GenerateError::Render(format!("page script failed: {e}")))?;
    Ok(matches!(result.value, Some(Value::Bool(true))))
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub output: PathBuf,
    pub bytes: usize,
}

/// Render `document` to `output`.
///
/// The document is written to a temporary `<name>-print*.html` inside
/// `temp_dir`, which is deleted again whether or not rendering succeeds.
pub fn export_pdf(
    document: &str,
    name: &str,
    temp_dir: &Path,
    output: &Path,
    options: &RenderOptions,
    renderer: &dyn RenderService,
) -> Result<ExportReport, GenerateError> {
    let mut temp = tempfile::Builder::new()
        .prefix(&format!("{name}-print-"))
        .suffix(".html")
        .tempfile_in(temp_dir)
        .map_err(|e| GenerateError::io(temp_dir, e))?;
    temp.write_all(document.as_bytes())
        .and_then(|_| temp.flush())
        .map_err(|e| GenerateError::io(temp.path(), e))?;
    log::debug!("Wrote print document to {}", temp.path().display());

    let bytes = renderer.render_pdf(temp.path(), options)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
        }
    }
    fs::write(output, &bytes).map_err(|e| GenerateError::io(output, e))?;

    let temp_path = temp.path().to_path_buf();
    if let Err(e) = temp.close() {
        log::warn!("Could not remove {}: {e}", temp_path.display());
    }

    Ok(ExportReport {
        output: output.to_path_buf(),
        bytes: bytes.len(),
    })
}
