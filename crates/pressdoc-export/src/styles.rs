/// Document styling configuration for exports.
#[derive(Debug, Clone)]
pub struct DocumentStyles {
    /// Font for all text (e.g. "Times New Roman", "Calibri").
    pub body_font: String,

    /// Font size in points for runs that don't set their own.
    pub body_size: usize,

    /// Page margin in inches, applied to all four sides.
    pub margin_inches: f64,
}

impl DocumentStyles {
    /// Margin in twentieths of a point, the unit OOXML section margins use.
    pub fn margin_twips(&self) -> i32 {
        (self.margin_inches * 1440.0).round() as i32
    }
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            body_size: 12,
            margin_inches: 1.0,
        }
    }
}
