use serde::{Deserialize, Serialize};

use crate::domain::TransformRequest;

/// Elm-like command definitions
/// Represents side effects (file I/O, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Run a transform and write its output file
    Export { request: TransformRequest },

    // Logging related
    LogError { message: String },
    LogInfo { message: String },
}
