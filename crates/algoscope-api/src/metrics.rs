//! Classification counters

use algoscope_core::{Algorithm, ClassificationError, ClassificationResult, Language};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide request counters
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total analyze requests
    pub requests: AtomicU64,
    /// Successful classifications
    pub classified: AtomicU64,
    /// Successful classifications with no algorithm match
    pub unknown_algorithm: AtomicU64,
    pub missing_code: AtomicU64,
    pub invalid_algorithm: AtomicU64,
    pub unsupported_language: AtomicU64,
    /// Malformed request bodies
    pub bad_requests: AtomicU64,
    by_language: [AtomicU64; 6],
    by_algorithm: [AtomicU64; 3],
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an incoming analyze request
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful classification
    pub fn record_result(&self, result: &ClassificationResult) {
        self.classified.fetch_add(1, Ordering::Relaxed);
        self.by_language[language_slot(result.language)].fetch_add(1, Ordering::Relaxed);
        match result.algorithm {
            Some(algorithm) => {
                self.by_algorithm[algorithm_slot(algorithm)].fetch_add(1, Ordering::Relaxed);
            }
            None => {
                self.unknown_algorithm.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Record a rejected classification
    pub fn record_rejection(&self, error: &ClassificationError) {
        let counter = match error {
            ClassificationError::MissingCode => &self.missing_code,
            ClassificationError::InvalidAlgorithm(_) => &self.invalid_algorithm,
            ClassificationError::UnsupportedLanguage => &self.unsupported_language,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request whose body could not be decoded
    pub fn record_bad_request(&self) {
        self.bad_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            classified: self.classified.load(Ordering::Relaxed),
            unknown_algorithm: self.unknown_algorithm.load(Ordering::Relaxed),
            missing_code: self.missing_code.load(Ordering::Relaxed),
            invalid_algorithm: self.invalid_algorithm.load(Ordering::Relaxed),
            unsupported_language: self.unsupported_language.load(Ordering::Relaxed),
            bad_requests: self.bad_requests.load(Ordering::Relaxed),
            by_language: Language::ALL
                .iter()
                .map(|l| {
                    let count = self.by_language[language_slot(*l)].load(Ordering::Relaxed);
                    (l.name().to_string(), count)
                })
                .collect(),
            by_algorithm: Algorithm::ALL
                .iter()
                .map(|a| {
                    let count = self.by_algorithm[algorithm_slot(*a)].load(Ordering::Relaxed);
                    (a.name().to_string(), count)
                })
                .collect(),
        }
    }
}

fn language_slot(language: Language) -> usize {
    match language {
        Language::Cpp => 0,
        Language::Java => 1,
        Language::Python => 2,
        Language::Ruby => 3,
        Language::JavaScript => 4,
        Language::C => 5,
    }
}

fn algorithm_slot(algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::BinarySearch => 0,
        Algorithm::MergeSort => 1,
        Algorithm::QuickSort => 2,
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub classified: u64,
    pub unknown_algorithm: u64,
    pub missing_code: u64,
    pub invalid_algorithm: u64,
    pub unsupported_language: u64,
    pub bad_requests: u64,
    pub by_language: Vec<(String, u64)>,
    pub by_algorithm: Vec<(String, u64)>,
}

impl MetricsSnapshot {
    /// Export metrics in Prometheus text format
    pub fn to_prometheus(&self) -> String {
        let mut output = String::new();

        output.push_str("# HELP algoscope_requests_total Total analyze requests\n");
        output.push_str("# TYPE algoscope_requests_total counter\n");
        output.push_str(&format!("algoscope_requests_total {}\n", self.requests));

        output.push_str("# HELP algoscope_classified_total Successful classifications\n");
        output.push_str("# TYPE algoscope_classified_total counter\n");
        output.push_str(&format!("algoscope_classified_total {}\n", self.classified));

        output.push_str(
            "# HELP algoscope_unknown_algorithm_total Classifications with no algorithm match\n",
        );
        output.push_str("# TYPE algoscope_unknown_algorithm_total counter\n");
        output.push_str(&format!(
            "algoscope_unknown_algorithm_total {}\n",
            self.unknown_algorithm
        ));

        output.push_str("# HELP algoscope_rejected_total Rejected requests by reason\n");
        output.push_str("# TYPE algoscope_rejected_total counter\n");
        for (reason, count) in [
            ("missing_code", self.missing_code),
            ("invalid_algorithm", self.invalid_algorithm),
            ("unsupported_language", self.unsupported_language),
            ("bad_request", self.bad_requests),
        ] {
            output.push_str(&format!(
                "algoscope_rejected_total{{reason=\"{}\"}} {}\n",
                reason, count
            ));
        }

        output.push_str("# HELP algoscope_language_total Classifications by language\n");
        output.push_str("# TYPE algoscope_language_total counter\n");
        for (language, count) in &self.by_language {
            output.push_str(&format!(
                "algoscope_language_total{{language=\"{}\"}} {}\n",
                language, count
            ));
        }

        output.push_str("# HELP algoscope_algorithm_total Classifications by algorithm\n");
        output.push_str("# TYPE algoscope_algorithm_total counter\n");
        for (algorithm, count) in &self.by_algorithm {
            output.push_str(&format!(
                "algoscope_algorithm_total{{algorithm=\"{}\"}} {}\n",
                algorithm, count
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_core::classify;

    #[test]
    fn test_counts_results_and_rejections() {
        let metrics = Metrics::new();
        metrics.record_request();
        metrics.record_result(&classify("def foo(): pass").unwrap());
        metrics.record_request();
        metrics.record_result(&classify("#include <stdio.h>\nvoid merge();").unwrap());
        metrics.record_request();
        metrics.record_rejection(&ClassificationError::UnsupportedLanguage);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.requests, 3);
        assert_eq!(snapshot.classified, 2);
        assert_eq!(snapshot.unknown_algorithm, 1);
        assert_eq!(snapshot.unsupported_language, 1);
        assert!(snapshot.by_language.contains(&("Python".to_string(), 1)));
        assert!(snapshot.by_language.contains(&("C".to_string(), 1)));
        assert!(snapshot.by_algorithm.contains(&("Merge Sort".to_string(), 1)));
    }

    #[test]
    fn test_prometheus_export() {
        let metrics = Metrics::new();
        metrics.record_request();
        metrics.record_rejection(&ClassificationError::MissingCode);

        let text = metrics.snapshot().to_prometheus();
        assert!(text.contains("algoscope_requests_total 1"));
        assert!(text.contains("algoscope_rejected_total{reason=\"missing_code\"} 1"));
        assert!(text.contains("algoscope_language_total{language=\"C++\"} 0"));
    }
}
