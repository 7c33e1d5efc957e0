//! Risk classifier behind an opaque prediction interface
//!
//! The rest of the service depends only on the [`Classifier`] trait. The
//! concrete implementation is a multinomial softmax regression trained on
//! the synthetic dataset and persisted as a JSON artifact that is loaded
//! once at startup.

pub mod features;
pub mod softmax;
pub mod train;

pub use features::{FEATURE_WIDTH, FeatureEncoder, Features};
pub use softmax::{ModelMetadata, SoftmaxClassifier};
pub use train::{TrainOptions, accuracy, train};

/// Probabilistic risk classifier
pub trait Classifier: Send + Sync {
    /// Label vocabulary, in the order probabilities are reported
    fn classes(&self) -> &[String];

    /// Most likely label for the given features
    fn predict(&self, features: &Features) -> String;

    /// Per-class probabilities, aligned with the label vocabulary
    fn predict_proba(&self, features: &Features) -> Vec<f64>;
}
