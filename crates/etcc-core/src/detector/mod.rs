//! Content-type detection
//!
//! Detectors look at a single regular file and report zero or more content
//! labels. They never fail: a file that cannot be read yields no content
//! signal, and classification of that file carries on with the other
//! detectors.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use etcc_core::detector::DetectorRegistry;
//!
//! let registry = DetectorRegistry::builtin();
//! let labels = registry.identify(Path::new("/etc/profile.d/locale.sh"));
//! assert!(labels.contains("Shell script"));
//! ```

use std::collections::BTreeSet;
use std::path::Path;

mod cert;
pub mod content;
mod registry;
mod script;

pub use cert::{CertLikeCheck, CERT_EXTENSIONS};
pub use registry::DetectorRegistry;
pub use script::{ScriptLikeCheck, COMMON_SHELL_COMMANDS, SHEBANG_MAP, SYSTEMD_INDICATORS};

/// Deduplicated set of content labels
pub type LabelSet = BTreeSet<String>;

pub const CERTIFICATE: &str = "certificate";
pub const SYSTEMD: &str = "Systemd";
pub const SHELL_SCRIPT: &str = "Shell script";
pub const PYTHON_SCRIPT: &str = "Python script";
pub const PERL_SCRIPT: &str = "Perl script";
pub const RUBY_SCRIPT: &str = "Ruby script";
pub const PHP_SCRIPT: &str = "PHP script";

/// A stateless content-type check over one file.
pub trait ContentDetector: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &'static str;

    /// Labels for the file at `path`; empty means no opinion.
    ///
    /// Implementations must swallow read and decode failures.
    fn check(&self, path: &Path) -> LabelSet;
}
