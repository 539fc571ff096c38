//! SchemeKit Settings Crate
//!
//! Handles editor configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{
    ClipboardSettings, EditorConfig, HandleSettings, HistorySettings, SnapSettings, TextSettings,
};
pub use error::{SettingsError, SettingsResult};
