use std::io::Cursor;
use std::path::Path;

use docx_rs::{AlignmentType, BreakType, Docx, PageMargin, Paragraph, Run, RunFonts};

use crate::blocks::{Alignment, Block, BlockKind, BULLET, Document, TextRun};
use crate::error::ExportError;
use crate::styles::DocumentStyles;

// 8.5in x 11in
const LETTER_WIDTH_TWIPS: u32 = 12240;
const LETTER_HEIGHT_TWIPS: u32 = 15840;

/// Render a formatted document to DOCX bytes.
///
/// Every block becomes one paragraph, every run one DOCX run:
/// - alignment, bold, italic, underline and size carry over as-is
/// - bullet blocks get a leading bullet run
/// - `\n` inside a run becomes a line break within that run
/// - the single section is US Letter with uniform margins from `styles`
pub fn render_docx(document: &Document, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    build_docx(document, styles)
        .build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

/// Assemble the docx-rs document without packing it.
///
/// The single section is US Letter with uniform margins from `styles`.
pub fn build_docx(document: &Document, styles: &DocumentStyles) -> Docx {
    let margin = styles.margin_twips();
    let mut docx = Docx::new()
        .page_size(LETTER_WIDTH_TWIPS, LETTER_HEIGHT_TWIPS)
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        );

    for block in &document.blocks {
        docx = docx.add_paragraph(block_paragraph(block, styles));
    }

    docx
}

/// Render and write the DOCX to `path`.
pub fn write_docx(
    document: &Document,
    styles: &DocumentStyles,
    path: &Path,
) -> Result<(), ExportError> {
    let bytes = render_docx(document, styles)?;
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "docx written");
    Ok(())
}

fn block_paragraph(block: &Block, styles: &DocumentStyles) -> Paragraph {
    let align = match block.alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    };
    let mut para = Paragraph::new().align(align);

    if block.kind == BlockKind::Bullet {
        para = para.add_run(
            Run::new()
                .add_text(format!("{BULLET} "))
                .size(styles.body_size * 2)
                .fonts(RunFonts::new().ascii(&styles.body_font)),
        );
    }

    for run in &block.runs {
        para = para.add_run(styled_run(run, styles));
    }

    para
}

fn styled_run(run: &TextRun, styles: &DocumentStyles) -> Run {
    let mut out = Run::new()
        .fonts(RunFonts::new().ascii(&styles.body_font))
        // OOXML uses half-points
        .size(run.size.unwrap_or(styles.body_size) * 2);

    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    if run.underline {
        out = out.underline("single");
    }

    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out = out.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            out = out.add_text(line);
        }
    }

    out
}
