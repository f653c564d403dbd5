//! Page layout for the PDF report.
//!
//! Layout produces a display list per page; [`crate::pdf`] only replays it.
//! Keeping the two apart lets page breaks be checked without parsing PDF.

use glyco_core::label::RiskLabel;
use glyco_core::reference::FieldStatus;

use crate::document::{format_value, ReportDocument};
use crate::styles::{PdfStyles, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
    Oblique,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Filled rectangle anchored at its lower-left corner.
    Fill {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        font: Font,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// All text drawn on this page, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Fill { .. } => None,
        })
    }
}

const METRIC_STEP: f32 = 8.8;
const LIST_STEP: f32 = 6.35;
const SECTION_GAP: f32 = 3.5;
const COMPARISON_HEADING: f32 = LIST_STEP + 2.0;
const RECOMMENDATION_HEADING: f32 = LIST_STEP + 4.0;

/// Tracks the vertical cursor and starts pages as space runs out.
struct Cursor<'a> {
    styles: &'a PdfStyles,
    pages: Vec<Page>,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(styles: &'a PdfStyles) -> Self {
        Self {
            styles,
            pages: vec![Page::default()],
            y: styles.top_y,
        }
    }

    fn page(&mut self) -> &mut Page {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Break the page if drawing `height` below the cursor would cross the
    /// bottom margin.
    fn reserve(&mut self, height: f32) {
        if self.y - height < self.styles.bottom_margin {
            self.pages.push(Page::default());
            self.y = self.styles.top_y;
        }
    }

    fn text(&mut self, text: impl Into<String>, x: f32, size: f32, font: Font, color: Rgb) {
        let y = self.y;
        self.page().ops.push(DrawOp::Text {
            text: text.into(),
            x,
            y,
            size,
            font,
            color,
        });
    }

    /// Draw a section heading and step down to its first row. The heading
    /// moves to a new page with that row when the row would not fit.
    fn heading(&mut self, text: &str, drop: f32) {
        self.reserve(drop);
        self.text(text, self.styles.left_margin, 13.0, Font::Bold, Rgb::BLACK);
        self.y -= drop;
    }

    fn fill(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.page().ops.push(DrawOp::Fill {
            x,
            y,
            width,
            height,
            color,
        });
    }
}

/// Lay out the report onto as many A4 pages as needed.
pub fn layout(doc: &ReportDocument, styles: &PdfStyles) -> Vec<Page> {
    let mut c = Cursor::new(styles);
    let left = styles.left_margin;
    let indent = left + 3.5;

    // Header band
    c.fill(0.0, 264.6, styles.page_width, styles.page_height - 264.6, styles.header_color);
    c.y = 282.2;
    c.text(&doc.title, 42.3, 22.0, Font::Bold, Rgb::WHITE);
    c.y = 275.2;
    c.text(&doc.subtitle, 84.7, 10.0, Font::Regular, Rgb::WHITE);

    // Patient block
    c.y = 254.0;
    c.text(format!("Patient: {}", doc.patient_name), left, 14.0, Font::Bold, Rgb::BLACK);
    c.y = 247.0;
    c.text(format!("Date: {}", doc.date), left, 11.0, Font::Regular, Rgb::BLACK);

    // Risk status box
    let box_color = match doc.label {
        RiskLabel::Positive => styles.alert_color,
        RiskLabel::Negative => styles.ok_color,
    };
    c.fill(left, 231.0, 90.0, 10.6, box_color);
    c.y = 234.6;
    c.text(&doc.status_text, left + 4.0, 12.0, Font::Bold, Rgb::WHITE);

    // Metrics
    c.y = 215.2;
    c.text("Health Metrics Analysis:", left, 13.0, Font::Bold, Rgb::BLACK);
    c.y -= METRIC_STEP;
    for row in &doc.metrics {
        c.reserve(0.0);
        c.text(format!("{}:", row.label), indent, 10.0, Font::Bold, Rgb::BLACK);
        c.text(&row.value, 70.6, 10.0, Font::Regular, Rgb::BLACK);
        c.text(
            format!("(Normal: {})", row.normal_range),
            98.8,
            10.0,
            Font::Regular,
            styles.muted_color,
        );
        let (mark, color) = match row.status {
            FieldStatus::Normal => ("OK", styles.ok_color),
            FieldStatus::OutOfRange => ("CHECK", styles.alert_color),
        };
        c.text(mark, 169.3, 10.0, Font::Bold, color);
        c.y -= METRIC_STEP;
    }

    // Comparison table
    if let Some(rows) = &doc.comparison {
        c.y -= SECTION_GAP;
        c.heading("Comparison with Reference Values:", COMPARISON_HEADING);
        for row in rows {
            c.reserve(0.0);
            c.text(format!("{}:", row.metric), indent, 10.0, Font::Bold, Rgb::BLACK);
            c.text(
                format_value(row.feature, row.your_value),
                70.6,
                10.0,
                Font::Regular,
                Rgb::BLACK,
            );
            c.text(
                format!("(Reference: {})", format_value(row.feature, row.optimal_value)),
                98.8,
                10.0,
                Font::Regular,
                styles.muted_color,
            );
            c.text(
                format!("{:+.2}", row.difference()),
                169.3,
                10.0,
                Font::Regular,
                Rgb::BLACK,
            );
            c.y -= LIST_STEP;
        }
    }

    // Recommendations
    c.y -= SECTION_GAP;
    c.heading("Recommendations:", RECOMMENDATION_HEADING);
    for rec in &doc.recommendations {
        c.reserve(0.0);
        c.text(format!("- {rec}"), indent, 10.0, Font::Regular, Rgb::BLACK);
        c.y -= LIST_STEP;
    }

    // Footer on the final page, below the bottom margin.
    let mut footer_y = 17.6;
    for line in &doc.disclaimer {
        c.y = footer_y;
        c.text(line, left, 8.0, Font::Oblique, styles.footer_color);
        footer_y -= 4.2;
    }

    c.pages
}
