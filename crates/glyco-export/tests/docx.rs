use glyco_core::label::RiskLabel;
use glyco_core::measurement::MeasurementSet;
use glyco_core::reference::ReferenceTable;
use glyco_export::docx::generate_docx;
use glyco_export::document::{compose, ReportRequest};
use glyco_export::render::render_report;
use glyco_export::styles::DocumentStyles;

fn doc(label: RiskLabel) -> glyco_export::document::ReportDocument {
    compose(&ReportRequest {
        patient_name: "Sam Lee".to_string(),
        label,
        measurements: MeasurementSet::default(),
        reference: Some(ReferenceTable::canonical()),
        date: jiff::civil::date(2026, 3, 1),
    })
}

#[test]
fn rendered_report_contains_sections() {
    let rendered = render_report(&doc(RiskLabel::Positive)).unwrap();
    assert!(rendered.starts_with("# Diabetes Risk Assessment Report"));
    assert!(rendered.contains("**Patient:** Sam Lee"));
    assert!(rendered.contains("> HIGH RISK - Likely Diabetic"));
    assert!(rendered.contains("- **Glucose:** 100.00 (Normal: 70-99 mg/dL normal) **[check]**"));
    assert!(rendered.contains("- **Age:** 30 (Normal: < 45 lower risk)\n"));
    assert!(rendered.contains("## Comparison with Reference Values"));
    assert!(rendered.contains("- Schedule regular check-ups and blood tests"));
    assert!(!rendered.contains("Continue maintaining a healthy lifestyle"));
}

#[test]
fn negative_report_renders_negative_list_only() {
    let rendered = render_report(&doc(RiskLabel::Negative)).unwrap();
    assert!(rendered.contains("**Patient:** Sam Lee"));
    assert!(rendered.contains("> LOW RISK - Not Diabetic"));
    assert!(rendered.contains("- Continue maintaining a healthy lifestyle"));
    assert!(!rendered.contains("Schedule regular check-ups and blood tests"));
}

#[test]
fn docx_is_a_zip_package() {
    let report = doc(RiskLabel::Negative);
    let rendered = render_report(&report).unwrap();
    let bytes = generate_docx(&rendered, report.label, &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[0..2], b"PK");
}
