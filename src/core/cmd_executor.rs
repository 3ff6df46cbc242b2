use crate::{
    core::{
        cmd::Cmd,
        msg::{tool::ToolMsg, Msg},
    },
    infrastructure::export::FileExporter,
};

/// Command executor that runs side effects and reports their outcome as messages
#[derive(Debug, Clone)]
pub struct CmdExecutor {
    exporter: FileExporter,
}

impl CmdExecutor {
    pub fn new(exporter: FileExporter) -> Self {
        Self { exporter }
    }

    /// Execute a single command
    /// Returns: Messages produced by the command (fed back into update)
    pub fn execute_command(&self, cmd: &Cmd) -> Vec<Msg> {
        match cmd {
            Cmd::Export { request } => match self.exporter.export(request) {
                Ok(file) => vec![Msg::Tool(ToolMsg::Exported(file))],
                Err(e) => {
                    let error = match std::error::Error::source(&e) {
                        Some(source) => format!("{e}: {source}"),
                        None => e.to_string(),
                    };
                    vec![Msg::Tool(ToolMsg::ExportFailed {
                        operation: request.operation(),
                        error,
                    })]
                }
            },

            Cmd::LogError { message } => {
                log::error!("{message}");
                vec![]
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
                vec![]
            }
        }
    }

    /// Execute multiple commands in order
    pub fn execute_commands(&self, cmds: &[Cmd]) -> Vec<Msg> {
        cmds.iter()
            .flat_map(|cmd| self.execute_command(cmd))
            .collect()
    }
}
