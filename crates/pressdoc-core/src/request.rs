use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::advisory::MediaAdvisory;
use crate::models::run_of_show::RunOfShow;

/// `type` values that name the run of show explicitly. Anything else that is
/// not `advisory` still routes to the run of show, see [`DocumentKind::parse`].
const RUN_OF_SHOW_ALIASES: &[&str] = &["run_of_show", "runofshow", "schedule"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DocumentKind {
    Advisory,
    RunOfShow,
}

/// Outcome of parsing a request `type` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKind {
    pub kind: DocumentKind,
    /// True when the value was not one we recognize and fell through to the
    /// run of show.
    pub fallback: bool,
}

impl DocumentKind {
    /// `"advisory"` selects the advisory. Every other value selects the run
    /// of show, including typos; those are flagged with `fallback`.
    pub fn parse(value: &str) -> ParsedKind {
        if value == "advisory" {
            ParsedKind {
                kind: DocumentKind::Advisory,
                fallback: false,
            }
        } else {
            ParsedKind {
                kind: DocumentKind::RunOfShow,
                fallback: !RUN_OF_SHOW_ALIASES.contains(&value),
            }
        }
    }

    /// File stem used for generated artifacts and download names.
    pub fn file_stem(self) -> &'static str {
        match self {
            DocumentKind::Advisory => "media_advisory",
            DocumentKind::RunOfShow => "run_of_show",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Advisory => write!(f, "media advisory"),
            DocumentKind::RunOfShow => write!(f, "run of show"),
        }
    }
}

/// A validated record ready for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRequest {
    Advisory(MediaAdvisory),
    RunOfShow(RunOfShow),
}

impl DocumentRequest {
    /// Build the record for `kind` from the raw `content` object.
    ///
    /// Missing required fields, wrong JSON types and unknown fields are all
    /// reported as [`CoreError::InvalidContent`].
    pub fn from_content(kind: DocumentKind, content: serde_json::Value) -> Result<Self, CoreError> {
        let invalid = |source| CoreError::InvalidContent { kind, source };
        match kind {
            DocumentKind::Advisory => serde_json::from_value(content)
                .map(DocumentRequest::Advisory)
                .map_err(invalid),
            DocumentKind::RunOfShow => serde_json::from_value(content)
                .map(DocumentRequest::RunOfShow)
                .map_err(invalid),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentRequest::Advisory(_) => DocumentKind::Advisory,
            DocumentRequest::RunOfShow(_) => DocumentKind::RunOfShow,
        }
    }
}
