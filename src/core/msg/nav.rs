use serde::{Deserialize, Serialize};

use crate::core::state::view::Panel;

/// Navigation between the four panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    ShowHome,
    ShowRefine,
    ShowOptimize,
    ShowConvert,
}

impl NavMsg {
    /// Panel that becomes visible after this message
    pub fn target(self) -> Panel {
        match self {
            NavMsg::ShowHome => Panel::Home,
            NavMsg::ShowRefine => Panel::Refine,
            NavMsg::ShowOptimize => Panel::Optimize,
            NavMsg::ShowConvert => Panel::Convert,
        }
    }

    pub fn to(panel: Panel) -> Self {
        match panel {
            Panel::Home => NavMsg::ShowHome,
            Panel::Refine => NavMsg::ShowRefine,
            Panel::Optimize => NavMsg::ShowOptimize,
            Panel::Convert => NavMsg::ShowConvert,
        }
    }
}
