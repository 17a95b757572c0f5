use thiserror::Error;

use crate::request::DocumentKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid {kind} content: {source}")]
    InvalidContent {
        kind: DocumentKind,
        #[source]
        source: serde_json::Error,
    },
}
