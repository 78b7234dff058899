//! Cutpath Settings Crate
//!
//! Handles application configuration: editor and viewer preferences, the
//! robot profile used for export, and the recent-files list.

pub mod config;
pub mod error;

pub use config::{Config, ConfigSource, EditorSettings, ViewerSettings};
pub use error::{SettingsError, SettingsResult};
