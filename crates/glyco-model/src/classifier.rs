use serde::{Deserialize, Serialize};

use glyco_core::label::RiskLabel;
use glyco_core::measurement::FEATURE_COUNT;

use crate::scaler::{fixed_width, NormalizedVector};

/// A fixed binary decision function over normalized features.
///
/// Implementations are opaque to the rest of the system; the evaluator only
/// relies on `predict` being deterministic.
pub trait Classifier: Send + Sync {
    /// Short identifier for logs (e.g. "logistic", "random_forest").
    fn name(&self) -> &str;

    /// Probability of the positive class, when the model exposes one.
    fn positive_probability(&self, x: &NormalizedVector) -> Option<f64>;

    fn predict(&self, x: &NormalizedVector) -> RiskLabel;
}

/// On-disk form of `classifier.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    Logistic {
        coefficients: Vec<f64>,
        intercept: f64,
        #[serde(default = "default_threshold")]
        threshold: f64,
    },
    RandomForest {
        trees: Vec<TreeArtifact>,
    },
}

fn default_threshold() -> f64 {
    0.5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeArtifact {
    pub nodes: Vec<TreeNode>,
}

/// A node in a fitted decision tree. Children are indices into the same
/// tree's node list and always come after their parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        /// Per-class weights `[negative, positive]`; normalized at load.
        value: Vec<f64>,
    },
}

impl ClassifierArtifact {
    /// Validate and build the runtime classifier.
    pub fn build(self) -> Result<Box<dyn Classifier>, String> {
        match self {
            ClassifierArtifact::Logistic {
                coefficients,
                intercept,
                threshold,
            } => {
                let coefficients = fixed_width("coefficients", &coefficients)?;
                if !intercept.is_finite() {
                    return Err("intercept is not finite".to_string());
                }
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(format!("threshold {threshold} outside [0, 1]"));
                }
                Ok(Box::new(LogisticClassifier {
                    coefficients,
                    intercept,
                    threshold,
                }))
            }
            ClassifierArtifact::RandomForest { trees } => {
                Ok(Box::new(ForestClassifier::from_artifacts(trees)?))
            }
        }
    }
}

/// Logistic regression: `sigmoid(w·x + b) >= threshold`.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    threshold: f64,
}

impl LogisticClassifier {
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64, threshold: f64) -> Self {
        Self {
            coefficients,
            intercept,
            threshold,
        }
    }

    fn probability(&self, x: &NormalizedVector) -> f64 {
        let z: f64 = self
            .coefficients
            .iter()
            .zip(x.as_slice())
            .map(|(w, v)| w * v)
            .sum::<f64>()
            + self.intercept;
        1.0 / (1.0 + (-z).exp())
    }
}

impl Classifier for LogisticClassifier {
    fn name(&self) -> &str {
        "logistic"
    }

    fn positive_probability(&self, x: &NormalizedVector) -> Option<f64> {
        Some(self.probability(x))
    }

    fn predict(&self, x: &NormalizedVector) -> RiskLabel {
        if self.probability(x) >= self.threshold {
            RiskLabel::Positive
        } else {
            RiskLabel::Negative
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        positive: f64,
    },
}

/// Ensemble of decision trees; averages leaf class probabilities.
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    trees: Vec<Vec<Node>>,
}

impl ForestClassifier {
    pub fn from_artifacts(trees: Vec<TreeArtifact>) -> Result<Self, String> {
        if trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        let trees = trees
            .into_iter()
            .enumerate()
            .map(|(t, tree)| validate_tree(t, tree))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { trees })
    }

    fn tree_probability(nodes: &[Node], x: &NormalizedVector) -> f64 {
        let mut i = 0;
        loop {
            match &nodes[i] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    i = if x.0[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { positive } => return *positive,
            }
        }
    }
}

fn validate_tree(t: usize, tree: TreeArtifact) -> Result<Vec<Node>, String> {
    if tree.nodes.is_empty() {
        return Err(format!("tree {t} has no nodes"));
    }
    let len = tree.nodes.len();
    tree.nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| match node {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if feature >= FEATURE_COUNT {
                    return Err(format!("tree {t} node {i}: feature {feature} out of range"));
                }
                if !threshold.is_finite() {
                    return Err(format!("tree {t} node {i}: threshold is not finite"));
                }
                for child in [left, right] {
                    if child <= i || child >= len {
                        return Err(format!("tree {t} node {i}: invalid child index {child}"));
                    }
                }
                Ok(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                })
            }
            TreeNode::Leaf { value } => {
                let [negative, positive] = value[..] else {
                    return Err(format!(
                        "tree {t} node {i}: expected 2 class weights, got {}",
                        value.len()
                    ));
                };
                let total = negative + positive;
                if !total.is_finite() || total <= 0.0 || negative < 0.0 || positive < 0.0 {
                    return Err(format!("tree {t} node {i}: invalid class weights"));
                }
                Ok(Node::Leaf {
                    positive: positive / total,
                })
            }
        })
        .collect()
}

impl Classifier for ForestClassifier {
    fn name(&self) -> &str {
        "random_forest"
    }

    fn positive_probability(&self, x: &NormalizedVector) -> Option<f64> {
        let sum: f64 = self
            .trees
            .iter()
            .map(|nodes| Self::tree_probability(nodes, x))
            .sum();
        Some(sum / self.trees.len() as f64)
    }

    fn predict(&self, x: &NormalizedVector) -> RiskLabel {
        // Ties go to the negative class.
        match self.positive_probability(x) {
            Some(p) if p > 0.5 => RiskLabel::Positive,
            _ => RiskLabel::Negative,
        }
    }
}
