mod common;

use std::sync::atomic::Ordering;

use common::{bundled_screening, counting_screening};
use glyco_core::label::RiskLabel;
use glyco_core::measurement::MeasurementSet;
use glyco_core::recommendations::{action_steps, recommendations};
use glyco_export::document::{compose, ReportRequest};
use glyco_export::filename::ExportFormat;
use glyco_export::render::render_report;
use glyco_server::screening::{display_name, ScreeningError, ScreeningRequest};

fn request(name: &str, measurements: MeasurementSet) -> ScreeningRequest {
    ScreeningRequest {
        patient_name: name.to_string(),
        measurements,
    }
}

#[test]
fn empty_name_never_reaches_the_evaluator() {
    let (screening, classifier) = counting_screening(RiskLabel::Positive);

    for name in ["", "   ", "\t\n", "\u{0}\u{7}"] {
        let err = screening
            .run(&request(name, MeasurementSet::default()), ExportFormat::Pdf)
            .unwrap_err();
        assert!(matches!(err, ScreeningError::EmptyPatientName));
    }
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn valid_submission_runs_evaluator_once() {
    let (screening, classifier) = counting_screening(RiskLabel::Positive);
    let outcome = screening
        .run(&request("Jane Doe", MeasurementSet::default()), ExportFormat::Pdf)
        .unwrap();

    assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.label, RiskLabel::Positive);
    assert_eq!(outcome.headline(), "Jane Doe is at HIGH RISK for Diabetes");
    assert!(outcome.warning().is_some());
    assert_eq!(outcome.action_steps(), action_steps(RiskLabel::Positive));
    assert_eq!(outcome.report.filename, "Jane_Doe_diabetes_report.pdf");
    assert_eq!(outcome.report.mime, "application/pdf");
    assert_eq!(&outcome.report.bytes[0..4], b"%PDF");
}

#[test]
fn name_is_trimmed() {
    let (screening, _) = counting_screening(RiskLabel::Negative);
    let outcome = screening
        .run(&request("  Sam  ", MeasurementSet::default()), ExportFormat::Pdf)
        .unwrap();
    assert_eq!(outcome.patient_name, "Sam");
    assert_eq!(outcome.report.filename, "Sam_diabetes_report.pdf");
    assert!(outcome.warning().is_none());
}

#[test]
fn measurements_are_clamped_before_evaluation() {
    let (screening, _) = counting_screening(RiskLabel::Negative);
    let m = MeasurementSet {
        glucose: 450.0,
        age: 0.0,
        ..MeasurementSet::default()
    };
    let outcome = screening.run(&request("Sam", m), ExportFormat::Pdf).unwrap();
    assert_eq!(outcome.measurements.glucose, 300.0);
    assert_eq!(outcome.measurements.age, 1.0);
    assert_eq!(outcome.comparison[0].your_value, 300.0);
}

#[test]
fn docx_export() {
    let (screening, _) = counting_screening(RiskLabel::Negative);
    let outcome = screening
        .run(&request("Sam Lee", MeasurementSet::default()), ExportFormat::Docx)
        .unwrap();
    assert_eq!(outcome.report.filename, "Sam_Lee_diabetes_report.docx");
    assert_eq!(&outcome.report.bytes[0..2], b"PK");
}

#[test]
fn bundled_model_is_deterministic() {
    let screening = bundled_screening();
    let high = MeasurementSet {
        pregnancies: 6.0,
        glucose: 190.0,
        bmi: 40.0,
        diabetes_pedigree: 1.2,
        age: 55.0,
        ..MeasurementSet::default()
    };
    let first = screening.run(&request("A", high), ExportFormat::Pdf).unwrap();
    assert_eq!(first.label, RiskLabel::Positive);
    for _ in 0..5 {
        let again = screening.run(&request("A", high), ExportFormat::Pdf).unwrap();
        assert_eq!(again.label, first.label);
        assert_eq!(again.probability, first.probability);
    }

    let low = screening
        .run(&request("B", MeasurementSet::default()), ExportFormat::Pdf)
        .unwrap();
    assert_eq!(low.label, RiskLabel::Negative);
}

#[test]
fn embedded_line_breaks_collapse_to_spaces() {
    let (screening, _) = counting_screening(RiskLabel::Negative);
    let outcome = screening
        .run(&request("Sam\r\n  Lee\u{0}", MeasurementSet::default()), ExportFormat::Docx)
        .unwrap();
    assert_eq!(outcome.patient_name, "Sam Lee");
    assert_eq!(outcome.report.filename, "Sam_Lee_diabetes_report.docx");
}

#[test]
fn name_cannot_add_sections_to_the_report() {
    let positive_item = recommendations(RiskLabel::Positive)[0];
    let raw = format!("Sam\n## Recommendations\n- {positive_item}");
    let name = display_name(&raw).unwrap();
    assert!(!name.contains('\n'));

    let doc = compose(&ReportRequest {
        patient_name: name,
        label: RiskLabel::Negative,
        measurements: MeasurementSet::default(),
        reference: None,
        date: jiff::civil::date(2026, 10, 17),
    });
    let rendered = render_report(&doc).unwrap();

    let headings = rendered
        .lines()
        .filter(|l| l.starts_with("## Recommendations"))
        .count();
    assert_eq!(headings, 1);
    let injected = format!("- {positive_item}");
    assert!(!rendered.lines().any(|l| l.trim() == injected));
}
