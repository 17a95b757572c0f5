//! Intermediate document model shared by the formatters and the renderer.
//!
//! A [`Document`] is an ordered list of [`Block`]s. Each block is a paragraph
//! or a bullet item made of styled [`TextRun`]s. A block with no runs renders
//! as a blank line.

/// Marker printed in front of every bullet item.
pub const BULLET: &str = "\u{2022}";

/// A span of text sharing one set of style attributes.
///
/// The text may contain `\n`; the renderer turns those into line breaks
/// inside the same run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font size in points. `None` uses the body size.
    pub size: Option<usize>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn size(mut self, points: usize) -> Self {
        self.size = Some(points);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockKind {
    #[default]
    Paragraph,
    Bullet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub alignment: Alignment,
    pub runs: Vec<TextRun>,
}

impl Block {
    pub fn paragraph() -> Self {
        Self::default()
    }

    pub fn bullet() -> Self {
        Self {
            kind: BlockKind::Bullet,
            ..Self::default()
        }
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn is_blank(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated run text, with the bullet marker for bullet items.
    pub fn text(&self) -> String {
        let body: String = self.runs.iter().map(|r| r.text.as_str()).collect();
        match self.kind {
            BlockKind::Paragraph => body,
            BlockKind::Bullet => format!("{BULLET} {body}"),
        }
    }
}

/// An ordered sequence of blocks, built fresh for every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append an empty paragraph.
    pub fn blank(&mut self) {
        self.blocks.push(Block::paragraph());
    }

    /// Plain text of the whole document, one block per line.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
