//! Integration runtime
//!
//! Glue between the pure Elm core and the command executor.

pub mod runtime;
