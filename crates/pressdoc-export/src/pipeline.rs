use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use pressdoc_core::request::DocumentRequest;

use crate::advisory::format_advisory;
use crate::blocks::Document;
use crate::docx::write_docx;
use crate::error::ExportError;
use crate::pdf::PdfConverter;
use crate::run_of_show::format_run_of_show;
use crate::styles::DocumentStyles;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Pdf,
    Docx,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Docx => "docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Pdf => PDF_CONTENT_TYPE,
            OutputFormat::Docx => DOCX_CONTENT_TYPE,
        }
    }
}

/// A finished document, ready to send as an attachment.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Lay out the record as styled blocks.
pub fn format_document(request: &DocumentRequest) -> Document {
    match request {
        DocumentRequest::Advisory(advisory) => format_advisory(advisory),
        DocumentRequest::RunOfShow(show) => format_run_of_show(show),
    }
}

/// Format, render and (for PDF) convert one document.
///
/// All intermediate files live in a scratch directory unique to this call,
/// created under `scratch_parent` or the system temp dir. It is removed on
/// every exit path. Failing to delete the intermediate DOCX after a good
/// conversion is logged, not returned.
pub fn generate(
    request: &DocumentRequest,
    format: OutputFormat,
    styles: &DocumentStyles,
    converter: &dyn PdfConverter,
    scratch_parent: Option<&Path>,
) -> Result<GeneratedDocument, ExportError> {
    let kind = request.kind();
    let stem = kind.file_stem();
    let document = format_document(request);

    let scratch = scratch_dir(scratch_parent)?;
    let docx_path = scratch.path().join(format!("{stem}.docx"));
    write_docx(&document, styles, &docx_path)?;

    let bytes = match format {
        OutputFormat::Docx => fs::read(&docx_path)?,
        OutputFormat::Pdf => {
            let pdf_path = scratch.path().join(format!("{stem}.pdf"));
            converter.convert(&docx_path, &pdf_path)?;
            let bytes = fs::read(&pdf_path).map_err(|e| {
                ExportError::Pdf(format!("no output at {}: {e}", pdf_path.display()))
            })?;
            if !bytes.starts_with(b"%PDF") {
                return Err(ExportError::Pdf(format!(
                    "converter output at {} is not a PDF ({} bytes)",
                    pdf_path.display(),
                    bytes.len()
                )));
            }
            bytes
        }
    };

    if let Err(e) = fs::remove_file(&docx_path) {
        tracing::warn!(
            path = %docx_path.display(),
            error = %e,
            "failed to remove intermediate docx"
        );
    }
    let scratch_path = scratch.path().to_path_buf();
    if let Err(e) = scratch.close() {
        tracing::warn!(
            path = %scratch_path.display(),
            error = %e,
            "failed to remove scratch directory"
        );
    }

    tracing::info!(
        kind = %kind,
        format = format.extension(),
        bytes = bytes.len(),
        "document generated"
    );

    Ok(GeneratedDocument {
        filename: format!("{stem}.{}", format.extension()),
        content_type: format.content_type(),
        bytes,
    })
}

fn scratch_dir(parent: Option<&Path>) -> Result<TempDir, ExportError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("pressdoc-");
    let dir = match parent {
        Some(parent) => builder.tempdir_in(parent)?,
        None => builder.tempdir()?,
    };
    Ok(dir)
}
