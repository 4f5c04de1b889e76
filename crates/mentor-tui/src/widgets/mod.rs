//! Widget modules for the TUI.

pub mod chat;
pub mod confirm_dialog;
pub mod dashboard;
pub mod dropdown;
pub mod header;
pub mod history;
pub mod modal_overlay;
pub mod settings;
pub mod status_bar;
pub mod team;
pub mod toast;

pub use chat::render_chat;
pub use confirm_dialog::render_confirm_dialog;
pub use dashboard::render_dashboard;
pub use dropdown::{dropdown_rect, render_dropdown};
pub use header::MainHeader;
pub use history::render_history;
pub use modal_overlay::{centered_rect, dim_area};
pub use settings::render_settings;
pub use status_bar::StatusBar;
pub use team::render_team;
pub use toast::render_toasts;
