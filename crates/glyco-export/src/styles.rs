use serde::{Deserialize, Serialize};

/// Document styling configuration for DOCX exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Calibri").
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    pub heading1_size: usize,
    pub heading2_size: usize,

    /// Hex colour for the high-risk status line.
    pub alert_color: String,

    /// Hex colour for the low-risk status line.
    pub ok_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            heading1_size: 20,
            heading2_size: 14,
            alert_color: "CC3333".to_string(),
            ok_color: "33B34D".to_string(),
        }
    }
}

/// RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);
}

/// Page geometry and palette for the PDF report. Lengths are millimetres,
/// measured from the bottom-left corner of an A4 page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfStyles {
    pub page_width: f32,
    pub page_height: f32,
    pub left_margin: f32,
    /// Cursor position at the top of a continuation page.
    pub top_y: f32,
    /// A new page starts before anything would be drawn below this line.
    pub bottom_margin: f32,
    pub header_color: Rgb,
    pub alert_color: Rgb,
    pub ok_color: Rgb,
    pub muted_color: Rgb,
    pub footer_color: Rgb,
}

impl Default for PdfStyles {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            left_margin: 17.6,
            top_y: 282.2,
            bottom_margin: 28.2,
            header_color: Rgb(0.2, 0.4, 0.8),
            alert_color: Rgb(0.8, 0.2, 0.2),
            ok_color: Rgb(0.2, 0.7, 0.3),
            muted_color: Rgb(0.4, 0.4, 0.4),
            footer_color: Rgb(0.5, 0.5, 0.5),
        }
    }
}
