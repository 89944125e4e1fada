// Transitive dependency version mismatches we can't control.
#![allow(clippy::multiple_crate_versions)]

//! # Livemark
//!
//! Markdown to HTML rendering for a live-preview editing surface.
//!
//! The renderer is a pure function, [`document::parse`], that runs a fixed
//! pipeline of text rewriting passes and never fails. A host calls it with the
//! current draft on every change and displays the returned markup.
//!
//! ## Modules
//!
//! - [`document`]: The conversion passes and the pipeline
//! - [`app`]: Preview host that renders files, stdin or the syntax guide
//! - [`watcher`]: Debounced file watching for live re-rendering
//! - [`config`]: Saved default flags
//! - [`perf`]: Render timing and debug event log

pub mod app;
pub mod config;
pub mod document;
pub mod perf;
pub mod watcher;
