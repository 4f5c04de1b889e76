//! # mentor-core - Core Domain Types
//!
//! Foundation crate for CodeMentor TUI. Provides the settings-section router,
//! the simulated async-action state machine, overlay placement geometry,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Section Routing (`section`)
//! - [`Section`] - One settings panel among the closed, fixed set
//! - [`SectionRoute`] - Resolved route: a valid section or a redirect
//! - [`resolve`] - Map a free-form route segment to a `SectionRoute`
//! - [`SectionGroup`] - Grouped section listing for the navigation dropdown
//!
//! ### Simulated Actions (`action`)
//! - [`AsyncAction`] - `idle -> pending -> {succeeded, failed} -> idle`
//! - [`ActionStatus`], [`ActionOutcome`]
//! - [`ScheduledCompletion`] - Timer handoff to the runtime
//!
//! ### Overlay Placement (`placement`)
//! - [`Placement`] - Above/below orientation for an overlay
//! - [`choose_placement`] - The viewport-overflow rule
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mentor_core::prelude::*;
//! ```

pub mod action;
pub mod error;
pub mod logging;
pub mod placement;
pub mod prelude;
pub mod section;

pub use action::{ActionOutcome, ActionStatus, AsyncAction, ScheduledCompletion};
pub use error::{Error, Result, ResultExt};
pub use placement::{choose_placement, Placement};
pub use section::{resolve, Section, SectionGroup, SectionRoute, SECTION_GROUPS};
