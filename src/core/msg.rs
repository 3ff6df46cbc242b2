use serde::{Deserialize, Serialize};

pub mod nav;
pub mod system;
pub mod tool;

use nav::NavMsg;
use system::SystemMsg;
use tool::ToolMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // Panel switching (delegated to ViewState)
    Nav(NavMsg),

    // Submissions and export results (delegated to ToolsState)
    Tool(ToolMsg),

    // Status line (delegated to SystemState)
    System(SystemMsg),
}

impl From<NavMsg> for Msg {
    fn from(msg: NavMsg) -> Self {
        Msg::Nav(msg)
    }
}

impl From<ToolMsg> for Msg {
    fn from(msg: ToolMsg) -> Self {
        Msg::Tool(msg)
    }
}

impl From<SystemMsg> for Msg {
    fn from(msg: SystemMsg) -> Self {
        Msg::System(msg)
    }
}
