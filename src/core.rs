//! Core Elm Architecture implementation
//!
//! This module contains the core components of the Elm architecture:
//! - Messages describing navigation, submissions and their results
//! - Application state (visible panel, tool forms, status line)
//! - Update logic and command execution

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod state;
pub mod update;
