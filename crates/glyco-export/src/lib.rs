//! glyco-export
//!
//! Report composition and export: the on-screen comparison table, the PDF
//! screening report, and a DOCX rendition via Tera templates.

pub mod comparison;
pub mod docx;
pub mod document;
pub mod error;
pub mod filename;
pub mod layout;
pub mod pdf;
pub mod render;
pub mod styles;
