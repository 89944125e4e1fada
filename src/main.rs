//! Livemark - render markdown to HTML and keep it fresh while you edit.
//!
//! # Usage
//!
//! ```bash
//! livemark README.md > README.html
//! livemark --watch --standalone -o preview.html README.md
//! cat notes.md | livemark -
//! livemark            # render the built-in syntax guide
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use livemark::app::{App, Source};
use livemark::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use livemark::perf;

/// Render markdown to HTML for live preview
#[derive(Parser, Debug)]
#[command(name = "livemark", version, about, long_about = None)]
struct Cli {
    /// Markdown file to render, `-` for stdin, or nothing for the syntax guide
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Re-render whenever the file changes
    #[arg(short, long)]
    watch: bool,

    /// Emit a complete HTML page instead of a fragment
    #[arg(short, long)]
    standalone: bool,

    /// Page title for --standalone (defaults to the file name)
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// Print render timings to stderr
    #[arg(long)]
    perf: bool,

    /// Write detailed render/watch debug events to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "effective flags");

    perf::set_enabled(effective.perf);
    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("LIVEMARK_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        tracing::warn!(
            path = ?render_debug_log_path,
            error = %err,
            "failed to initialize render debug log"
        );
    }

    let app = App::new(Source::from_arg(cli.file))
        .with_output(cli.output)
        .with_watch(effective.watch)
        .with_standalone(effective.standalone)
        .with_title(effective.title);

    app.run().context("Preview error")
}
