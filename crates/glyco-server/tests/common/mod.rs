#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use glyco_core::label::RiskLabel;
use glyco_core::reference::ReferenceTable;
use glyco_model::artifacts::ArtifactLoader;
use glyco_model::classifier::Classifier;
use glyco_model::evaluator::RiskEvaluator;
use glyco_model::scaler::{NormalizedVector, Scaler};
use glyco_server::screening::Screening;

pub fn bundled_model_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models")
}

pub fn bundled_screening() -> Screening {
    let artifacts = ArtifactLoader::new(bundled_model_dir()).load().unwrap();
    Screening::new(
        RiskEvaluator::from_artifacts(artifacts),
        ReferenceTable::canonical(),
        true,
    )
}

/// Classifier that records how often it is consulted.
pub struct CountingClassifier {
    pub calls: AtomicUsize,
    pub label: RiskLabel,
}

impl Classifier for CountingClassifier {
    fn name(&self) -> &str {
        "counting"
    }

    fn positive_probability(&self, _x: &NormalizedVector) -> Option<f64> {
        None
    }

    fn predict(&self, _x: &NormalizedVector) -> RiskLabel {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.label
    }
}

pub fn counting_screening(label: RiskLabel) -> (Screening, Arc<CountingClassifier>) {
    let classifier = Arc::new(CountingClassifier {
        calls: AtomicUsize::new(0),
        label,
    });
    let screening = Screening::new(
        RiskEvaluator::new(Scaler::new([0.0; 8], [1.0; 8]), classifier.clone()),
        ReferenceTable::canonical(),
        false,
    );
    (screening, classifier)
}
