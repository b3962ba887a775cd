//! Configuration module for FinTrack
//!
//! - Path resolution for settings and the local store
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;
