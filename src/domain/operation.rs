use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::domain::language::is_export_extension;

/// One of the three code actions offered by the UI
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Refine,
    Optimize,
    Convert,
}

impl Operation {
    /// Past-tense verb used in file names and headers ("refined", ...)
    pub fn past_tense(self) -> &'static str {
        match self {
            Operation::Refine => "refined",
            Operation::Optimize => "optimized",
            Operation::Convert => "converted",
        }
    }

    /// `{past_tense}_code{extension}`
    pub fn file_name(self, extension: &str) -> String {
        format!("{}_code{extension}", self.past_tense())
    }

    /// Reverse of [`Operation::file_name`].
    ///
    /// Only names the exporter can actually produce are accepted, so the
    /// result is safe to join onto an output directory.
    pub fn from_file_name(file_name: &str) -> Option<Operation> {
        Operation::iter().find(|op| {
            file_name
                .strip_prefix(op.past_tense())
                .and_then(|rest| rest.strip_prefix("_code"))
                .is_some_and(is_export_extension)
        })
    }

    /// Label used on buttons and panel headings
    pub fn label(self) -> &'static str {
        match self {
            Operation::Refine => "Refine Code",
            Operation::Optimize => "Optimize Code",
            Operation::Convert => "Convert Code",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Operation::Refine => "✨",
            Operation::Optimize => "⚡",
            Operation::Convert => "🔄",
        }
    }
}
