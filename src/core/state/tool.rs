use crate::{
    core::{cmd::Cmd, msg::tool::ToolMsg},
    domain::{ExportedFile, Operation, TransformRequest},
};

/// Form state of a single tool panel
///
/// Remembers the last submission so the panel re-renders with the user's
/// input, plus the outcome of the last export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolState {
    pub code: String,
    /// Selected language (target language for convert)
    pub language: Option<String>,
    /// Source language, convert only
    pub from_language: Option<String>,
    pub last_export: Option<ExportedFile>,
    pub last_error: Option<String>,
}

impl ToolState {
    fn record_submission(&mut self, request: &TransformRequest) {
        self.code = request.code().to_owned();
        self.language = Some(request.target_language().to_owned());
        if let TransformRequest::Convert { from_language, .. } = request {
            self.from_language = Some(from_language.clone());
        }
    }

    fn record_export(&mut self, file: ExportedFile) {
        self.last_export = Some(file);
        self.last_error = None;
    }

    fn record_failure(&mut self, error: String) {
        self.last_export = None;
        self.last_error = Some(error);
    }

    /// File name offered for download, if the last export succeeded
    pub fn download_name(&self) -> Option<&str> {
        self.last_export.as_ref().map(|file| file.file_name.as_str())
    }
}

/// State of the three tool panels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolsState {
    pub refine: ToolState,
    pub optimize: ToolState,
    pub convert: ToolState,
}

impl ToolsState {
    pub fn get(&self, operation: Operation) -> &ToolState {
        match operation {
            Operation::Refine => &self.refine,
            Operation::Optimize => &self.optimize,
            Operation::Convert => &self.convert,
        }
    }

    pub fn get_mut(&mut self, operation: Operation) -> &mut ToolState {
        match operation {
            Operation::Refine => &mut self.refine,
            Operation::Optimize => &mut self.optimize,
            Operation::Convert => &mut self.convert,
        }
    }

    /// Tool-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ToolMsg) -> Vec<Cmd> {
        let tool = self.get_mut(msg.operation());
        match msg {
            ToolMsg::Submit(request) => {
                tool.record_submission(&request);
                vec![Cmd::Export { request }]
            }

            ToolMsg::Exported(file) => {
                let message = format!("Exported {}", file.file_name);
                tool.record_export(file);
                vec![Cmd::LogInfo { message }]
            }

            ToolMsg::ExportFailed { error, .. } => {
                tool.record_failure(error);
                vec![]
            }
        }
    }
}
