//! # CodeRefine - browser demo for code refine/optimize/convert
//!
//! A small web UI with a Home panel and three tool panels. Each tool takes
//! pasted code plus a language, produces a placeholder transform, and offers
//! the result as a file download.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`state`): Application state per browser session
//! - **Message** (`msg`): Navigation, submissions and export results
//! - **Update** (`update`): Pure functions that transform state
//! - **Command** (`cmd`): Side effects (file export, logging)
//! - **View** (`presentation`): HTML rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use coderefine::{
//!     core::msg::{nav::NavMsg, Msg},
//!     core::state::{AppState, Panel},
//!     update,
//! };
//!
//! let state = AppState::new();
//! let (state, commands) = update(Msg::Nav(NavMsg::ShowRefine), state);
//!
//! assert_eq!(state.current_panel(), Panel::Refine);
//! assert_eq!(state.visibility().as_tuple(), (false, true, false, false));
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm core (state, messages, update, commands)
//! - [`domain`] - Language table, operations and transforms
//! - [`infrastructure`] - CLI, config, export, sessions, HTTP server
//! - [`integration`] - Runtime driving update/command cycles
//! - [`presentation`] - HTML rendering
//! - [`utils`] - Logging, panic handling, paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{cmd::Cmd, msg::Msg, state::AppState, update::update};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
