pub mod system;
pub mod tool;
pub mod view;

pub use system::SystemState;
pub use tool::{ToolState, ToolsState};
pub use view::{Panel, PanelVisibility, ViewState};

/// Unified application state for one browser session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub view: ViewState,
    pub tools: ToolsState,
    pub system: SystemState,
}

impl AppState {
    /// Fresh session state: Home visible, empty forms
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_panel(&self) -> Panel {
        self.view.current()
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.view.visibility()
    }
}
