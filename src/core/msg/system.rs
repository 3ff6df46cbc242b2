use serde::{Deserialize, Serialize};

/// Status line messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}
