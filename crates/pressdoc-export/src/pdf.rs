use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ExportError;

/// Converts a DOCX file on disk into a PDF file on disk.
///
/// Implementations must fail rather than leave a missing or empty PDF behind
/// a successful return.
pub trait PdfConverter: Send + Sync {
    fn convert(&self, docx: &Path, pdf: &Path) -> Result<(), ExportError>;
}

/// PDF conversion by shelling out to a headless office suite
/// (`soffice --headless --convert-to pdf`).
///
/// Each call runs with its own throwaway user profile next to the output
/// file. Two office processes sharing a profile block on its lock, so
/// concurrent conversions must never share one.
#[derive(Debug, Clone)]
pub struct OfficeConverter {
    program: PathBuf,
}

impl OfficeConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Ask the converter for its version string.
    pub fn probe(&self) -> Result<String, ExportError> {
        let output = Command::new(&self.program)
            .arg("--version")
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(ExportError::Pdf(format!(
                "{} --version exited with {}",
                self.program.display(),
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn spawn_error(&self, e: std::io::Error) -> ExportError {
        ExportError::Pdf(format!("failed to run {}: {e}", self.program.display()))
    }
}

impl Default for OfficeConverter {
    fn default() -> Self {
        Self::new("soffice")
    }
}

impl PdfConverter for OfficeConverter {
    fn convert(&self, docx: &Path, pdf: &Path) -> Result<(), ExportError> {
        let out_dir = match pdf.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let stem = docx
            .file_stem()
            .ok_or_else(|| ExportError::Pdf(format!("not a file path: {}", docx.display())))?;

        let profile = tempfile::Builder::new()
            .prefix(".office-profile-")
            .tempdir_in(out_dir)?;

        tracing::info!(
            program = %self.program.display(),
            input = %docx.display(),
            "converting docx to pdf"
        );

        let output = Command::new(&self.program)
            .arg(format!("-env:UserInstallation={}", file_url(profile.path())?))
            .args(["--headless", "--norestore", "--convert-to", "pdf", "--outdir"])
            .arg(out_dir)
            .arg(docx)
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::Pdf(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        let mut produced = out_dir.join(stem);
        produced.set_extension("pdf");

        let len = std::fs::metadata(&produced).map(|m| m.len()).map_err(|_| {
            let stderr = String::from_utf8_lossy(&output.stderr);
            ExportError::Pdf(format!(
                "no output at {} ({})",
                produced.display(),
                stderr.trim()
            ))
        })?;
        if len == 0 {
            return Err(ExportError::Pdf(format!(
                "empty output at {}",
                produced.display()
            )));
        }

        if produced != pdf {
            std::fs::rename(&produced, pdf)?;
        }

        if let Err(e) = profile.close() {
            tracing::warn!(error = %e, "failed to remove office profile directory");
        }

        tracing::info!(output = %pdf.display(), bytes = len, "pdf conversion complete");
        Ok(())
    }
}

/// `file://` URL for a local directory, as `-env:UserInstallation` expects.
fn file_url(path: &Path) -> Result<String, ExportError> {
    let absolute = std::path::absolute(path)?;
    let normalized = absolute.to_string_lossy().replace('\\', "/");
    if normalized.starts_with('/') {
        Ok(format!("file://{normalized}"))
    } else {
        Ok(format!("file:///{normalized}"))
    }
}
