// Library root for the VoiceGuard API service

pub mod api;
pub mod config;
pub mod core;
pub mod engine;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::engine::{AnalyzerConfig, VoiceAnalyzer, VoiceFingerprint};
