use std::path::Path;

use super::{ContentDetector, LabelSet, CERTIFICATE};

/// Extensions treated as certificate material (compared case-insensitively)
pub const CERT_EXTENSIONS: &[&str] = &[".pem", ".cer", ".crt", ".der"];

/// Flags certificate-like files by extension alone.
///
/// Emits `"certificate"`. Never opens the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertLikeCheck;

impl ContentDetector for CertLikeCheck {
    fn name(&self) -> &'static str {
        "CertLikeCheck"
    }

    fn check(&self, path: &Path) -> LabelSet {
        let mut result = LabelSet::new();
        let lower = path.to_string_lossy().to_lowercase();
        if CERT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            result.insert(CERTIFICATE.to_string());
        }
        result
    }
}
