//! Language → file extension lookup table

use serde::Serialize;

/// Extension used for any language that is not in [`LANGUAGE_EXTENSIONS`]
pub const FALLBACK_EXTENSION: &str = ".txt";

/// Supported languages and the extension their exports get.
///
/// The order is the order the languages are offered in the UI.
pub const LANGUAGE_EXTENSIONS: [(&str, &str); 5] = [
    ("Python", ".py"),
    ("C", ".c"),
    ("C++", ".cpp"),
    ("Java", ".java"),
    ("JavaScript", ".js"),
];

/// A single row of the extension table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub name: &'static str,
    pub extension: &'static str,
}

/// Look up the export extension for a language name.
///
/// Matching is exact (case-sensitive); unknown names fall back to `.txt`.
pub fn extension_for(language: &str) -> &'static str {
    LANGUAGE_EXTENSIONS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, extension)| *extension)
        .unwrap_or(FALLBACK_EXTENSION)
}

pub fn is_known_language(language: &str) -> bool {
    LANGUAGE_EXTENSIONS.iter().any(|(name, _)| *name == language)
}

/// Whether `extension` is something [`extension_for`] can return
pub fn is_export_extension(extension: &str) -> bool {
    extension == FALLBACK_EXTENSION || LANGUAGE_EXTENSIONS.iter().any(|(_, ext)| *ext == extension)
}

pub fn language_names() -> impl Iterator<Item = &'static str> {
    LANGUAGE_EXTENSIONS.iter().map(|(name, _)| *name)
}

pub fn entries() -> Vec<LanguageEntry> {
    LANGUAGE_EXTENSIONS
        .iter()
        .map(|(name, extension)| LanguageEntry { name, extension })
        .collect()
}
