//! mentor-app - Application state and orchestration for Code Mentor
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the `Message` enum, the `update()` function, and all screen
//! state. It also owns the mock datasets, the consolidated preference
//! store, the analysis-provider seam, and configuration loading.

pub mod config;
pub mod data;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod prefs;
pub mod provider;
pub mod screens;
pub mod settings_state;
pub mod state;

// Re-export primary types
pub use config::{load_config, save_config, SimulationConfig, UserConfig};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{ActionTarget, AnalysisTarget, CopyTarget, Message};
pub use prefs::PreferenceStore;
pub use provider::{AnalysisKind, AnalysisProvider, AnalysisReply, AnalysisRequest, MockProvider};
pub use state::{AppState, Screen, Toast, ToastLevel};
