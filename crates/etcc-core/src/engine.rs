//! Classification engine
//!
//! Runs path classification and content detection over every regular file
//! and groups the records by category.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::category::PathClassifier;
use crate::detector::DetectorRegistry;
use crate::error::Result;
use crate::record::{ClassificationResult, FileRecord};
use crate::walk::Walker;

#[derive(Debug)]
pub struct ClassificationEngine {
    classifier: PathClassifier,
    registry: DetectorRegistry,
}

impl ClassificationEngine {
    pub fn new(classifier: PathClassifier, registry: DetectorRegistry) -> Self {
        Self {
            classifier,
            registry,
        }
    }

    /// Builtin category table and builtin detectors
    pub fn builtin() -> Self {
        Self::new(PathClassifier::builtin(), DetectorRegistry::builtin())
    }

    pub fn classifier(&self) -> &PathClassifier {
        &self.classifier
    }

    /// Category and record for one file
    pub fn classify_file(&self, path: &Path) -> (&'static str, FileRecord) {
        let category = self.classifier.classify_path(path);
        let labels = self.registry.identify(path);
        let record = FileRecord::with_labels(path.to_string_lossy(), labels);
        (category, record)
    }

    /// Classify candidate paths, skipping anything that is not a regular file
    pub fn classify_paths<I>(&self, paths: I) -> ClassificationResult
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut result = ClassificationResult::for_classifier(&self.classifier);
        for path in paths {
            if !fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false) {
                debug!("not a regular file: {}", path.display());
                continue;
            }
            let (category, record) = self.classify_file(&path);
            result.push(category, record);
        }
        result
    }

    /// Walk `root` and classify everything under it
    pub fn run(&self, root: &Path) -> Result<ClassificationResult> {
        let walker = Walker::new(root)?;
        Ok(self.run_with(&walker))
    }

    /// Classify the files a prepared walker yields
    pub fn run_with(&self, walker: &Walker) -> ClassificationResult {
        let result = self.classify_paths(walker.files());
        info!(
            "classified {} files under {}",
            result.total_files(),
            walker.root().display()
        );
        result
    }
}
