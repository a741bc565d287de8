use std::fmt;
use std::path::Path;

use tracing::debug;

use super::{CertLikeCheck, ContentDetector, LabelSet, ScriptLikeCheck};

/// Ordered collection of detectors whose results are unioned
#[derive(Default)]
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn ContentDetector>>,
}

impl DetectorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the certificate and script checks
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(CertLikeCheck);
        registry.register(ScriptLikeCheck);
        registry
    }

    /// Append a detector; it runs after those already registered
    pub fn register<D: ContentDetector + 'static>(&mut self, detector: D) {
        self.detectors.push(Box::new(detector));
    }

    /// Run every detector over `path` and union their labels
    pub fn identify(&self, path: &Path) -> LabelSet {
        let mut labels = LabelSet::new();
        for detector in &self.detectors {
            let found = detector.check(path);
            if !found.is_empty() {
                debug!("{} -> {:?} for {}", detector.name(), found, path.display());
            }
            labels.extend(found);
        }
        labels
    }

    /// Detector names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl fmt::Debug for DetectorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectorRegistry")
            .field("detectors", &self.names())
            .finish()
    }
}
