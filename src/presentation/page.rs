use handlebars::Handlebars;
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{
    core::state::{AppState, Panel, PanelVisibility, ToolState},
    domain::{language::language_names, Operation},
    infrastructure::session::SessionId,
};

const PAGE_TEMPLATE: &str = include_str!("templates/page.hbs");
const TOOL_TEMPLATE: &str = include_str!("templates/tool.hbs");
const STYLESHEET: &str = include_str!("templates/style.css");

const APP_TITLE: &str = "CodeRefine AI";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template registration failed: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),
    #[error("page rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

#[derive(Debug, Serialize)]
struct LanguageOption {
    name: &'static str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct DownloadLink {
    name: String,
    url: String,
}

#[derive(Debug, Serialize)]
struct ToolView {
    operation: Operation,
    icon: &'static str,
    label: &'static str,
    download_label: String,
    visible: bool,
    is_convert: bool,
    nav_url: String,
    home_url: String,
    action_url: String,
    code: String,
    language_selected: bool,
    languages: Vec<LanguageOption>,
    from_selected: bool,
    from_languages: Vec<LanguageOption>,
    download: Option<DownloadLink>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct PageView {
    title: &'static str,
    css: &'static str,
    panel: Panel,
    visibility: PanelVisibility,
    tools: Vec<ToolView>,
    status: Option<String>,
}

fn language_options(selected: Option<&str>) -> Vec<LanguageOption> {
    language_names()
        .map(|name| LanguageOption {
            name,
            selected: selected == Some(name),
        })
        .collect()
}

fn is_known(selected: Option<&str>) -> bool {
    selected.is_some_and(crate::domain::language::is_known_language)
}

/// Base URL of a session, e.g. `/s/{id}`
pub fn session_url(session: SessionId) -> String {
    format!("/s/{session}")
}

impl ToolView {
    fn new(session: SessionId, operation: Operation, tool: &ToolState, visible: bool) -> Self {
        let base = session_url(session);
        let language = tool.language.as_deref();
        let from_language = tool.from_language.as_deref();
        let download_label = format!(
            "Download {} Code",
            match operation {
                Operation::Refine => "Refined",
                Operation::Optimize => "Optimized",
                Operation::Convert => "Converted",
            }
        );

        Self {
            operation,
            icon: operation.icon(),
            label: operation.label(),
            download_label,
            visible,
            is_convert: operation == Operation::Convert,
            nav_url: format!("{base}/nav/{operation}"),
            home_url: format!("{base}/nav/{}", Panel::Home),
            action_url: format!("{base}/{operation}"),
            code: tool.code.clone(),
            language_selected: is_known(language),
            languages: language_options(language),
            from_selected: is_known(from_language),
            from_languages: language_options(from_language),
            download: tool.download_name().map(|name| DownloadLink {
                name: name.to_string(),
                url: format!("{base}/files/{name}"),
            }),
            error: tool.last_error.clone(),
        }
    }
}

/// Handlebars-backed HTML renderer
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("templates", &self.handlebars.get_templates().keys())
            .finish()
    }
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars
            .register_template_string("page", PAGE_TEMPLATE)
            .map_err(Box::new)?;
        handlebars
            .register_partial("tool", TOOL_TEMPLATE)
            .map_err(Box::new)?;
        Ok(Self { handlebars })
    }

    /// Render the whole page for a session
    pub fn render(&self, session: SessionId, state: &AppState) -> Result<String, RenderError> {
        let visibility = state.visibility();
        let tools = Operation::iter()
            .map(|op| {
                let visible = visibility.is_visible(Panel::for_operation(op));
                ToolView::new(session, op, state.tools.get(op), visible)
            })
            .collect();
        let view = PageView {
            title: APP_TITLE,
            css: STYLESHEET,
            panel: state.current_panel(),
            visibility,
            tools,
            status: state.system.status_message().cloned(),
        };
        Ok(self.handlebars.render("page", &view)?)
    }
}
