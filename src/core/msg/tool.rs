use serde::{Deserialize, Serialize};

use crate::domain::{ExportedFile, Operation, TransformRequest};

/// Messages for the three tool panels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolMsg {
    /// Form submitted from a tool panel
    Submit(TransformRequest),
    /// The export command finished and the file is ready for download
    Exported(ExportedFile),
    ExportFailed { operation: Operation, error: String },
}

impl ToolMsg {
    pub fn operation(&self) -> Operation {
        match self {
            ToolMsg::Submit(request) => request.operation(),
            ToolMsg::Exported(file) => file.operation,
            ToolMsg::ExportFailed { operation, .. } => *operation,
        }
    }
}
