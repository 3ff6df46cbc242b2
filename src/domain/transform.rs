//! Placeholder code transforms
//!
//! None of these analyse the code. Each produces a `#` header line naming the
//! action followed by a newline and the (possibly rewritten) body.

use serde::{Deserialize, Serialize};

use crate::domain::{language::extension_for, operation::Operation};

/// `# Refined {language} code` followed by the code uppercased
pub fn refine(code: &str, language: &str) -> String {
    format!("# Refined {language} code\n{}", code.to_uppercase())
}

/// `# Optimized {language} code` followed by the code reversed character by character
pub fn optimize(code: &str, language: &str) -> String {
    let reversed: String = code.chars().rev().collect();
    format!("# Optimized {language} code\n{reversed}")
}

/// `# Converted from {from} to {to}` followed by the unmodified code
pub fn convert(code: &str, from_language: &str, to_language: &str) -> String {
    format!("# Converted from {from_language} to {to_language}\n{code}")
}

/// A single submission from one of the tool panels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum TransformRequest {
    Refine {
        code: String,
        language: String,
    },
    Optimize {
        code: String,
        language: String,
    },
    Convert {
        code: String,
        from_language: String,
        to_language: String,
    },
}

impl TransformRequest {
    pub fn refine(code: impl Into<String>, language: impl Into<String>) -> Self {
        TransformRequest::Refine {
            code: code.into(),
            language: language.into(),
        }
    }

    pub fn optimize(code: impl Into<String>, language: impl Into<String>) -> Self {
        TransformRequest::Optimize {
            code: code.into(),
            language: language.into(),
        }
    }

    pub fn convert(
        code: impl Into<String>,
        from_language: impl Into<String>,
        to_language: impl Into<String>,
    ) -> Self {
        TransformRequest::Convert {
            code: code.into(),
            from_language: from_language.into(),
            to_language: to_language.into(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            TransformRequest::Refine { .. } => Operation::Refine,
            TransformRequest::Optimize { .. } => Operation::Optimize,
            TransformRequest::Convert { .. } => Operation::Convert,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            TransformRequest::Refine { code, .. }
            | TransformRequest::Optimize { code, .. }
            | TransformRequest::Convert { code, .. } => code,
        }
    }

    /// The language that decides the export extension.
    ///
    /// For `convert` this is the target language; the source language only
    /// shows up in the header.
    pub fn target_language(&self) -> &str {
        match self {
            TransformRequest::Refine { language, .. }
            | TransformRequest::Optimize { language, .. } => language,
            TransformRequest::Convert { to_language, .. } => to_language,
        }
    }

    pub fn extension(&self) -> &'static str {
        extension_for(self.target_language())
    }

    pub fn file_name(&self) -> String {
        self.operation().file_name(self.extension())
    }

    /// Full file contents for this request
    pub fn render(&self) -> String {
        match self {
            TransformRequest::Refine { code, language } => refine(code, language),
            TransformRequest::Optimize { code, language } => optimize(code, language),
            TransformRequest::Convert {
                code,
                from_language,
                to_language,
            } => convert(code, from_language, to_language),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[test]
    fn test_refine() {
        assert_eq!(refine("abc", "Python"), "# Refined Python code\nABC");
    }

    #[test]
    fn test_optimize() {
        assert_eq!(optimize("abc", "C"), "# Optimized C code\ncba");
    }

    #[test]
    fn test_convert_keeps_code() {
        assert_eq!(
            convert("abc", "Java", "JavaScript"),
            "# Converted from Java to JavaScript\nabc"
        );
    }

    #[test]
    fn test_empty_code_is_header_only() {
        assert_eq!(refine("", "C"), "# Refined C code\n");
        assert_eq!(optimize("", "C"), "# Optimized C code\n");
        assert_eq!(convert("", "C", "Java"), "# Converted from C to Java\n");
    }

    #[test]
    fn test_unselected_language_leaves_header_blank() {
        assert_eq!(refine("x", ""), "# Refined  code\nX");
        assert_eq!(convert("x", "", ""), "# Converted from  to \nx");
        assert_eq!(TransformRequest::refine("x", "").file_name(), "refined_code.txt");
    }

    #[test]
    fn test_optimize_reverses_characters_not_bytes() {
        assert_eq!(optimize("héllo\n", "Python"), "# Optimized Python code\n\nolléh");
    }

    #[test]
    fn test_refine_multiline() {
        assert_eq!(
            refine("def f():\n    return 1", "Python"),
            "# Refined Python code\nDEF F():\n    RETURN 1"
        );
    }

    #[rstest]
    #[case(TransformRequest::refine("x", "Python"), "refined_code.py")]
    #[case(TransformRequest::refine("x", "Go"), "refined_code.txt")]
    #[case(TransformRequest::optimize("x", "C++"), "optimized_code.cpp")]
    #[case(TransformRequest::convert("x", "Java", "JavaScript"), "converted_code.js")]
    #[case(TransformRequest::convert("x", "Python", "Haskell"), "converted_code.txt")]
    fn test_request_file_name(#[case] request: TransformRequest, #[case] expected: &str) {
        assert_eq!(request.file_name(), expected);
    }

    #[test]
    fn test_convert_extension_ignores_source_language() {
        let a = TransformRequest::convert("x", "Python", "C");
        let b = TransformRequest::convert("x", "Unknown", "C");
        assert_eq!(a.extension(), ".c");
        assert_eq!(a.extension(), b.extension());
        assert_eq!(a.target_language(), "C");
    }

    #[test]
    fn test_request_serde() -> serde_json::Result<()> {
        let request = TransformRequest::convert("abc", "Java", "C");
        let json = serde_json::to_value(&request)?;
        assert_eq!(json["operation"], "convert");
        assert_eq!(json["from_language"], "Java");
        let back: TransformRequest = serde_json::from_value(json)?;
        assert_eq!(back, request);
        Ok(())
    }
}
