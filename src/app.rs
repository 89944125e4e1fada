//! Preview host: reads markdown, renders it, writes HTML, and re-renders on change.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::document::{self, EXAMPLE_MARKDOWN, page};
use crate::perf;
use crate::watcher::{DEFAULT_DEBOUNCE, FileWatcher};

/// How often the watch loop polls for debounced changes.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Where the markdown comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
    /// The built-in syntax guide.
    Example,
}

impl Source {
    /// Interpret a command-line argument: none is the guide, `-` is stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            None => Self::Example,
            Some(path) if path.as_os_str() == "-" => Self::Stdin,
            Some(path) => Self::File(path),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read standard input")?;
                Ok(buf)
            }
            Self::Example => Ok(EXAMPLE_MARKDOWN.to_owned()),
        }
    }
}

/// Renders a source to HTML once, or keeps it rendered while it changes.
pub struct App {
    source: Source,
    output: Option<PathBuf>,
    watch_enabled: bool,
    standalone: bool,
    title: Option<String>,
    debounce: Duration,
}

impl App {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            output: None,
            watch_enabled: false,
            standalone: false,
            title: None,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    /// Enable or disable re-rendering when the source file changes.
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// Write to `path` instead of standard output.
    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }

    /// Emit a full HTML page rather than a fragment.
    pub const fn with_standalone(mut self, enabled: bool) -> Self {
        self.standalone = enabled;
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    fn page_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        match &self.source {
            Source::File(path) => path
                .file_name()
                .map_or_else(|| page::DEFAULT_TITLE.to_owned(), |n| n.to_string_lossy().into_owned()),
            Source::Stdin | Source::Example => page::DEFAULT_TITLE.to_owned(),
        }
    }

    /// Read the source and render it.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read.
    pub fn render_once(&self) -> Result<String> {
        let _scope = perf::scope("preview.render");
        let markdown = self.source.read()?;
        let html = document::parse(&markdown);
        if self.standalone {
            Ok(page::wrap(&self.page_title(), &html))
        } else {
            Ok(html)
        }
    }

    fn write_output(&self, html: &str) -> Result<()> {
        match &self.output {
            Some(path) => fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display())),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(html.as_bytes())
                    .and_then(|()| stdout.flush())
                    .context("Failed to write standard output")
            }
        }
    }

    fn check_source(&self) -> Result<()> {
        match &self.source {
            Source::File(path) => {
                if !path.exists() {
                    bail!("File not found: {}", path.display());
                }
                if !document::is_markdown_file(path) {
                    tracing::info!(path = %path.display(), "rendering file without a markdown extension");
                }
            }
            Source::Stdin | Source::Example if self.watch_enabled => {
                bail!("--watch needs a file to watch");
            }
            Source::Stdin | Source::Example => {}
        }
        Ok(())
    }

    /// Render once, then keep re-rendering on change if watching is enabled.
    ///
    /// # Errors
    /// Returns an error if the source is missing, cannot be read initially,
    /// cannot be watched, or the output cannot be written.
    pub fn run(&self) -> Result<()> {
        self.check_source()?;
        self.write_output(&self.render_once()?)?;
        perf::log_event("preview.rendered", format!("{:?}", self.source));

        if self.watch_enabled {
            self.watch_until(|| true)?;
        }
        Ok(())
    }

    /// Re-render the source file on every debounced change while `keep_going` holds.
    ///
    /// Read failures during the loop are logged and skipped; the last
    /// successful render stays in place.
    ///
    /// # Errors
    /// Returns an error if the source is not a file, the watcher cannot be
    /// created, or the output cannot be written.
    pub fn watch_until(&self, mut keep_going: impl FnMut() -> bool) -> Result<()> {
        let Source::File(path) = &self.source else {
            bail!("--watch needs a file to watch");
        };
        let mut watcher = make_file_watcher(path, self.debounce)?;
        tracing::info!(path = %watcher.target_path().display(), "watching for changes");

        while keep_going() {
            if watcher.take_change_ready() {
                match self.render_once() {
                    Ok(html) => {
                        self.write_output(&html)?;
                        perf::log_event("preview.rerendered", format!("bytes={}", html.len()));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "skipping re-render");
                        perf::log_event("preview.error", format!("{err:#}"));
                    }
                }
            }
            std::thread::sleep(POLL_INTERVAL);
        }
        Ok(())
    }
}

fn make_file_watcher(path: &Path, debounce: Duration) -> Result<FileWatcher> {
    FileWatcher::new(path, debounce).with_context(|| format!("Failed to watch {}", path.display()))
}
