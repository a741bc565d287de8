//! Directory traversal feeding the classification engine
//!
//! Symlinks are followed and every yielded path is the resolved real path.
//! Paths resolving outside the root are dropped, as are duplicates reached
//! through more than one link.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{EtccError, Result};

/// Canonical root plus optional exclusion globs
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    excludes: Vec<Pattern>,
}

impl Walker {
    /// Resolve `root`; it must exist and be a directory
    ///
    /// A missing root is `RootNotFound`; any other resolution failure
    /// (permission denied, a file used as a directory) is `Io`.
    pub fn new(root: &Path) -> Result<Self> {
        let resolved = match fs::canonicalize(root) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(EtccError::RootNotFound {
                    path: root.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        if !resolved.is_dir() {
            return Err(EtccError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(Self {
            root: resolved,
            excludes: Vec::new(),
        })
    }

    /// Skip resolved paths matching any of these glob patterns
    pub fn with_excludes<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            self.excludes.push(Pattern::new(pattern.as_ref())?);
        }
        Ok(self)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excludes.iter().any(|p| p.matches_path(path))
    }

    /// All non-directory entries under the root, resolved, in file-name order
    pub fn files(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("skipping walk entry: {}", e);
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }

            let resolved = match fs::canonicalize(entry.path()) {
                Ok(resolved) => resolved,
                Err(e) => {
                    debug!("could not resolve {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            if !resolved.starts_with(&self.root) {
                debug!("{} resolves outside the root", entry.path().display());
                continue;
            }
            if self.is_excluded(&resolved) {
                continue;
            }
            if seen.insert(resolved.clone()) {
                files.push(resolved);
            }
        }

        files
    }
}
