//! Panel visibility
//!
//! Exactly one of the four panels is visible at any time. Home is the hub:
//! every tool panel is reachable from it and returns to it.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
    core::{cmd::Cmd, msg::nav::NavMsg},
    domain::Operation,
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Panel {
    #[default]
    Home,
    Refine,
    Optimize,
    Convert,
}

impl Panel {
    /// The operation a tool panel runs; `None` for Home
    pub fn operation(self) -> Option<Operation> {
        match self {
            Panel::Home => None,
            Panel::Refine => Some(Operation::Refine),
            Panel::Optimize => Some(Operation::Optimize),
            Panel::Convert => Some(Operation::Convert),
        }
    }

    pub fn for_operation(operation: Operation) -> Self {
        match operation {
            Operation::Refine => Panel::Refine,
            Operation::Optimize => Panel::Optimize,
            Operation::Convert => Panel::Convert,
        }
    }
}

/// Visibility flags in the order (home, refine, optimize, convert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelVisibility {
    pub home: bool,
    pub refine: bool,
    pub optimize: bool,
    pub convert: bool,
}

impl PanelVisibility {
    pub fn only(panel: Panel) -> Self {
        Self {
            home: panel == Panel::Home,
            refine: panel == Panel::Refine,
            optimize: panel == Panel::Optimize,
            convert: panel == Panel::Convert,
        }
    }

    pub fn as_tuple(self) -> (bool, bool, bool, bool) {
        (self.home, self.refine, self.optimize, self.convert)
    }

    pub fn is_visible(self, panel: Panel) -> bool {
        match panel {
            Panel::Home => self.home,
            Panel::Refine => self.refine,
            Panel::Optimize => self.optimize,
            Panel::Convert => self.convert,
        }
    }

    pub fn visible_count(self) -> usize {
        [self.home, self.refine, self.optimize, self.convert]
            .into_iter()
            .filter(|visible| *visible)
            .count()
    }
}

/// Which panel is shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    current: Panel,
}

impl ViewState {
    pub fn current(&self) -> Panel {
        self.current
    }

    pub fn visibility(&self) -> PanelVisibility {
        PanelVisibility::only(self.current)
    }

    pub fn show_home(&mut self) -> PanelVisibility {
        self.show(Panel::Home)
    }

    pub fn show_refine(&mut self) -> PanelVisibility {
        self.show(Panel::Refine)
    }

    pub fn show_optimize(&mut self) -> PanelVisibility {
        self.show(Panel::Optimize)
    }

    pub fn show_convert(&mut self) -> PanelVisibility {
        self.show(Panel::Convert)
    }

    fn show(&mut self, panel: Panel) -> PanelVisibility {
        self.current = panel;
        self.visibility()
    }

    /// View-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        let from = self.current;
        match msg {
            NavMsg::ShowHome => self.show_home(),
            NavMsg::ShowRefine => self.show_refine(),
            NavMsg::ShowOptimize => self.show_optimize(),
            NavMsg::ShowConvert => self.show_convert(),
        };
        tracing::debug!(%from, to = %self.current, "panel switched");
        vec![]
    }
}
