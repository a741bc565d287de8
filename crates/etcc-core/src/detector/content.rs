//! Permissive file reading shared by the content detectors.

use std::fs;
use std::path::Path;

use tracing::debug;

/// Read a file as text, dropping invalid UTF-8 sequences.
///
/// Returns `None` on any I/O failure so the calling detector can abstain.
pub fn read_text(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(decode_ignoring_invalid(&bytes)),
        Err(e) => {
            debug!("could not read {}: {}", path.display(), e);
            None
        }
    }
}

/// Decode bytes as UTF-8, silently skipping every invalid sequence.
pub fn decode_ignoring_invalid(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                // a truncated sequence at the end has no error_len
                let skip = e.error_len().unwrap_or(rest.len());
                bytes = &rest[skip..];
            }
        }
    }
}
