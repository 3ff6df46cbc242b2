use crate::{
    core::cmd::Cmd,
    core::msg::{nav::NavMsg, system::SystemMsg, tool::ToolMsg, Msg},
    core::state::{AppState, Panel},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Navigation: switch panel and drop the previous panel's status line
        Msg::Nav(nav_msg) => {
            let mut commands = state.view.update(nav_msg);
            commands.extend(state.system.update(SystemMsg::ClearStatusMessage));
            (state, commands)
        }

        Msg::Tool(tool_msg) => match tool_msg {
            ToolMsg::Submit(request) => {
                // A submission can only come from the panel that owns it
                let owner = Panel::for_operation(request.operation());
                let mut commands = if state.current_panel() != owner {
                    tracing::debug!(
                        operation = %request.operation(),
                        panel = %state.current_panel(),
                        "submission from a hidden panel, switching to it"
                    );
                    state.view.update(NavMsg::to(owner))
                } else {
                    vec![]
                };
                commands.extend(state.tools.update(ToolMsg::Submit(request)));
                (state, commands)
            }

            ToolMsg::Exported(file) => {
                let status = format!(
                    "[{}] {}",
                    capitalize(file.operation.past_tense()),
                    file.file_name
                );
                let mut commands = state.tools.update(ToolMsg::Exported(file));
                commands.extend(state.system.update(SystemMsg::UpdateStatusMessage(status)));
                (state, commands)
            }

            ToolMsg::ExportFailed { operation, error } => {
                let mut commands = state.tools.update(ToolMsg::ExportFailed {
                    operation,
                    error: error.clone(),
                });
                commands.extend(state.system.update(SystemMsg::ShowError(error)));
                (state, commands)
            }
        },

        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
