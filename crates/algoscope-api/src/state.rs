//! Application State

use algoscope_core::Classifier;
use std::sync::Arc;

use crate::metrics::Metrics;

/// Application state shared across handlers
#[derive(Clone, Default)]
pub struct AppState {
    classifier: Classifier,
    metrics: Arc<Metrics>,
}

impl AppState {
    /// Create new application state
    pub fn new(classifier: Classifier, metrics: Arc<Metrics>) -> Self {
        Self {
            classifier,
            metrics,
        }
    }

    /// Get the classifier
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Get metrics collector (cloned Arc for sharing)
    pub fn metrics(&self) -> Arc<Metrics> {
        self.metrics.clone()
    }
}
