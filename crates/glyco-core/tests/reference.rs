use glyco_core::label::RiskLabel;
use glyco_core::measurement::Feature;
use glyco_core::recommendations::{action_steps, recommendations};
use glyco_core::reference::{FieldStatus, NormalBand, ReferenceEntry, ReferenceTable};

#[test]
fn canonical_reference_table() {
    let table = ReferenceTable::canonical();
    let features: Vec<_> = table.entries().iter().map(|e| e.feature).collect();
    assert_eq!(
        features,
        vec![Feature::Glucose, Feature::BloodPressure, Feature::Bmi, Feature::Insulin]
    );
    assert_eq!(table.reference(Feature::BloodPressure), Some(75.0));
    assert_eq!(table.reference(Feature::Bmi), Some(22.0));
    assert_eq!(table.reference(Feature::Age), None);
}

#[test]
fn overrides_keep_order_and_replace_values() {
    let table = ReferenceTable::canonical().with_overrides(&[ReferenceEntry {
        feature: Feature::BloodPressure,
        value: 80.0,
    }]);
    assert_eq!(table.entries().len(), 4);
    assert_eq!(table.entries()[1].feature, Feature::BloodPressure);
    assert_eq!(table.reference(Feature::BloodPressure), Some(80.0));
}

#[test]
fn glucose_band_is_half_open() {
    let band = NormalBand::for_feature(Feature::Glucose);
    assert_eq!(band.status(70.0), FieldStatus::Normal);
    assert_eq!(band.status(99.9), FieldStatus::Normal);
    assert_eq!(band.status(100.0), FieldStatus::OutOfRange);
    assert_eq!(band.status(69.0), FieldStatus::OutOfRange);
}

#[test]
fn count_bands_compare_integer_part() {
    let pregnancies = NormalBand::for_feature(Feature::Pregnancies);
    assert!(pregnancies.contains(5.0));
    assert!(!pregnancies.contains(6.0));

    let age = NormalBand::for_feature(Feature::Age);
    assert!(age.contains(44.0));
    assert!(!age.contains(45.0));
}

#[test]
fn open_ended_bands() {
    let dpf = NormalBand::for_feature(Feature::DiabetesPedigree);
    assert!(dpf.contains(0.08));
    assert!(!dpf.contains(0.5));

    let insulin = NormalBand::for_feature(Feature::Insulin);
    assert!(insulin.contains(25.0));
    assert!(!insulin.contains(80.0));
}

#[test]
fn recommendation_lists_are_disjoint() {
    let positive = recommendations(RiskLabel::Positive);
    let negative = recommendations(RiskLabel::Negative);
    assert_eq!(positive.len(), 9);
    assert_eq!(negative.len(), 8);
    assert!(positive.iter().all(|p| !negative.contains(p)));
    assert!(action_steps(RiskLabel::Positive).len() > action_steps(RiskLabel::Negative).len());
}

#[test]
fn label_from_class() {
    assert_eq!(RiskLabel::from_class(0), RiskLabel::Negative);
    assert_eq!(RiskLabel::from_class(1), RiskLabel::Positive);
    assert_eq!(RiskLabel::Positive.to_string(), "HIGH RISK - Likely Diabetic");
}
