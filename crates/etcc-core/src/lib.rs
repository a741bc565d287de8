pub mod category;
pub mod config;
pub mod detector;
pub mod engine;
pub mod error;
pub mod record;
pub mod report;
pub mod walk;

pub use category::{PathClassifier, BUILTIN_CATEGORIES, OTHERS_CATEGORY};
pub use config::Config;
pub use detector::{CertLikeCheck, ContentDetector, DetectorRegistry, LabelSet, ScriptLikeCheck};
pub use engine::ClassificationEngine;
pub use error::{EtccError, Result};
pub use record::{ClassificationResult, FileRecord};
pub use report::{read_report, write_report, DEFAULT_REPORT_FILE};
pub use walk::Walker;
