use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use pressdoc_core::request::{DocumentKind, DocumentRequest};
use pressdoc_export::pipeline::{self, OutputFormat};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub content: serde_json::Value,
    #[serde(default)]
    pub format: OutputFormat,
}

/// Generate a media advisory or run of show and return it as an attachment.
///
/// `type == "advisory"` builds the advisory; any other value builds the run
/// of show. Unrecognized values are logged but still served.
pub async fn generate_document(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    let parsed = DocumentKind::parse(&req.doc_type);
    if parsed.fallback {
        tracing::warn!(
            doc_type = %req.doc_type,
            "unrecognized document type, generating run of show"
        );
    }

    let request = DocumentRequest::from_content(parsed.kind, req.content)?;
    let format = req.format;

    let span = tracing::info_span!(
        "generate_document",
        request_id = %Uuid::new_v4(),
        kind = %parsed.kind
    );

    let doc = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        pipeline::generate(
            &request,
            format,
            &state.styles,
            state.converter.as_ref(),
            state.scratch_dir.as_deref(),
        )
    })
    .await??;

    let disposition = format!("attachment; filename=\"{}\"", doc.filename);
    Ok((
        [
            (header::CONTENT_TYPE, doc.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        doc.bytes,
    )
        .into_response())
}
