//! Saved default flags.
//!
//! A config file holds command-line tokens, any number per line. Blank lines
//! and `#` comments are skipped, and unknown tokens are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub standalone: bool,
    pub perf: bool,
    pub title: Option<String>,
    pub render_debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: switches combine, values from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            standalone: self.standalone || other.standalone,
            perf: self.perf || other.perf,
            title: other.title.clone().or_else(|| self.title.clone()),
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("livemark").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("livemark")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("livemark").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("livemark")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".livemarkrc")
}

/// Read flags from `path`; a missing file yields the defaults.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(line_tokens)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Split one config line into flag tokens.
///
/// A line that starts with a value option keeps the rest of the line as the
/// value, so titles and paths may contain spaces.
fn line_tokens(line: &str) -> Vec<String> {
    for option in ["--title", "--render-debug-log"] {
        let value = line.strip_prefix(option).and_then(|rest| {
            rest.strip_prefix('=')
                .or_else(|| rest.strip_prefix(char::is_whitespace))
        });
        if let Some(value) = value {
            return vec![option.to_owned(), value.trim().to_owned()];
        }
    }
    line.split_whitespace().map(ToOwned::to_owned).collect()
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# livemark defaults (saved with --save)".to_owned()];
    if flags.watch {
        lines.push("--watch".to_owned());
    }
    if flags.standalone {
        lines.push("--standalone".to_owned());
    }
    if flags.perf {
        lines.push("--perf".to_owned());
    }
    if let Some(title) = &flags.title {
        lines.push(format!("--title={title}"));
    }
    if let Some(path) = &flags.render_debug_log {
        lines.push(format!("--render-debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the known flags out of a token list such as `std::env::args()`.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--watch" | "-w" => flags.watch = true,
            "--standalone" | "-s" => flags.standalone = true,
            "--perf" => flags.perf = true,
            "--title" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.title = Some(next.clone());
                    i += 1;
                }
            }
            "--render-debug-log" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.render_debug_log = Some(PathBuf::from(next));
                    i += 1;
                }
            }
            _ => {
                if let Some(value) = token.strip_prefix("--title=") {
                    flags.title = Some(value.to_owned());
                } else if let Some(value) = token.strip_prefix("--render-debug-log=") {
                    flags.render_debug_log = Some(PathBuf::from(value));
                }
            }
        }
        i += 1;
    }
    flags
}
