use std::path::PathBuf;
use std::sync::Arc;

use pressdoc_export::pdf::PdfConverter;
use pressdoc_export::styles::DocumentStyles;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Everything here is read-only; each request builds its own document.
#[derive(Clone)]
pub struct AppState {
    pub converter: Arc<dyn PdfConverter>,
    pub styles: DocumentStyles,
    /// Parent for per-request scratch directories. `None` uses the system
    /// temp dir.
    pub scratch_dir: Option<PathBuf>,
}
