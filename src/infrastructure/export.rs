//! Writes transform results to the output directory

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::domain::{ExportedFile, Operation, TransformRequest};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub fn path(&self) -> &Path {
        match self {
            ExportError::CreateDir { path, .. } | ExportError::Write { path, .. } => path,
        }
    }
}

/// Exports files into a single directory.
///
/// Each operation always writes to the same name for a given extension, so a
/// new export replaces the previous one. The write is not atomic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExporter {
    output_dir: PathBuf,
}

impl FileExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Exporter writing into a subdirectory named `scope`
    pub fn scoped(&self, scope: &str) -> Self {
        Self::new(self.output_dir.join(scope))
    }

    pub fn export(&self, request: &TransformRequest) -> Result<ExportedFile, ExportError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let file_name = request.file_name();
        let path = self.output_dir.join(&file_name);
        let contents = request.render();
        fs::write(&path, contents.as_bytes()).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            operation = %request.operation(),
            path = %path.display(),
            bytes = contents.len(),
            "exported file"
        );

        Ok(ExportedFile {
            operation: request.operation(),
            file_name,
            path,
            bytes: contents.len(),
        })
    }

    pub fn refine_code(&self, code: &str, language: &str) -> Result<ExportedFile, ExportError> {
        self.export(&TransformRequest::refine(code, language))
    }

    pub fn optimize_code(&self, code: &str, language: &str) -> Result<ExportedFile, ExportError> {
        self.export(&TransformRequest::optimize(code, language))
    }

    pub fn convert_code(
        &self,
        code: &str,
        from_language: &str,
        to_language: &str,
    ) -> Result<ExportedFile, ExportError> {
        self.export(&TransformRequest::convert(code, from_language, to_language))
    }

    /// Path of a previously exported file.
    ///
    /// Returns `None` for names the exporter never produces.
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        Operation::from_file_name(file_name).map(|_| self.output_dir.join(file_name))
    }
}
