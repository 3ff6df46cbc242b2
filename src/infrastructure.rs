//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - CLI argument processing
//! - Layered configuration
//! - File export
//! - Session storage
//! - HTTP server

pub mod cli;
pub mod config;
pub mod export;
pub mod server;
pub mod session;
