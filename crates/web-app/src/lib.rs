#![warn(clippy::pedantic)]

pub mod diagram;
pub mod log;
pub mod service;
mod settings;

pub use settings::{Settings, SettingsRepository, SettingsService};
