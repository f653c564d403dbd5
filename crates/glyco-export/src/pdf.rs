use std::io::BufWriter;

use printpdf::path::PaintMode;
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect};

use crate::document::ReportDocument;
use crate::error::ExportError;
use crate::layout::{layout, DrawOp, Font, Page};
use crate::styles::{PdfStyles, Rgb};

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

impl Fonts {
    fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Regular => &self.regular,
            Font::Bold => &self.bold,
            Font::Oblique => &self.oblique,
        }
    }
}

/// Render a composed report to PDF bytes.
pub fn generate_pdf(doc: &ReportDocument, styles: &PdfStyles) -> Result<Vec<u8>, ExportError> {
    let pages = layout(doc, styles);
    let width = Mm(styles.page_width);
    let height = Mm(styles.page_height);

    let (pdf, first_page, first_layer) = PdfDocument::new(&doc.title, width, height, "Layer 1");
    let fonts = Fonts {
        regular: builtin(&pdf, BuiltinFont::Helvetica)?,
        bold: builtin(&pdf, BuiltinFont::HelveticaBold)?,
        oblique: builtin(&pdf, BuiltinFont::HelveticaOblique)?,
    };

    for (i, page) in pages.iter().enumerate() {
        let layer = if i == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (p, l) = pdf.add_page(width, height, "Layer 1");
            pdf.get_page(p).get_layer(l)
        };
        draw_page(&layer, page, &fonts);
    }

    tracing::debug!(pages = pages.len(), label = ?doc.label, "rendered PDF report");

    let mut buf = BufWriter::new(Vec::new());
    pdf.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}

fn builtin(
    pdf: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
) -> Result<IndirectFontRef, ExportError> {
    pdf.add_builtin_font(font)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))
}

fn draw_page(layer: &PdfLayerReference, page: &Page, fonts: &Fonts) {
    for op in &page.ops {
        match op {
            DrawOp::Fill {
                x,
                y,
                width,
                height,
                color,
            } => {
                layer.set_fill_color(color_of(*color));
                let rect = Rect::new(Mm(*x), Mm(*y), Mm(x + width), Mm(y + height))
                    .with_mode(PaintMode::Fill);
                layer.add_rect(rect);
            }
            DrawOp::Text {
                text,
                x,
                y,
                size,
                font,
                color,
            } => {
                layer.set_fill_color(color_of(*color));
                layer.use_text(text.as_str(), *size, Mm(*x), Mm(*y), fonts.get(*font));
            }
        }
    }
}

fn color_of(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(r, g, b, None))
}
