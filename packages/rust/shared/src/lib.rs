//! Shared types, error model, and configuration for linkdigest.
//!
//! This crate is the foundation depended on by all other linkdigest crates.
//! It provides:
//! - [`LinkDigestError`] — the unified error type
//! - Domain types ([`FeedEntry`], [`CandidateLink`], [`ClassifiedLink`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, FeedConfig, FilterConfig, OutputConfig, SheetsConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from, resolve_sheets_token,
};
pub use error::{LinkDigestError, Result};
pub use types::{CandidateLink, ClassifiedLink, FeedEntry, OTHERS_LABEL};
