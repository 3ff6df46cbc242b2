use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::operation::Operation;

/// A transform result that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFile {
    pub operation: Operation,
    /// Bare file name, e.g. `refined_code.py`
    pub file_name: String,
    pub path: PathBuf,
    pub bytes: usize,
}
