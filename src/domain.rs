//! Domain logic
//!
//! This module contains the pure, I/O-free parts of the application:
//! - Language → file extension lookup
//! - Operations and their export file naming
//! - Code transforms and the exported file record

pub mod export;
pub mod language;
pub mod operation;
pub mod transform;

pub use export::ExportedFile;
pub use language::{extension_for, FALLBACK_EXTENSION, LANGUAGE_EXTENSIONS};
pub use operation::Operation;
pub use transform::TransformRequest;
