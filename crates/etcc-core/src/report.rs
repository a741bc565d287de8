use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::record::ClassificationResult;

/// Default report file name
pub const DEFAULT_REPORT_FILE: &str = "class.json";

const INDENT: &[u8] = b"    ";

fn write_pretty<W: Write>(result: &ClassificationResult, writer: W) -> Result<()> {
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    result.serialize(&mut serializer)?;
    Ok(())
}

/// Pretty JSON with four-space indentation
pub fn to_json_pretty(result: &ClassificationResult) -> Result<String> {
    let mut buf = Vec::new();
    write_pretty(result, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

pub fn from_json_str(json: &str) -> Result<ClassificationResult> {
    Ok(serde_json::from_str(json)?)
}

/// Write the report, replacing any existing file
pub fn write_report(result: &ClassificationResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_pretty(result, &mut writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_report(path: &Path) -> Result<ClassificationResult> {
    let content = fs::read_to_string(path)?;
    from_json_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::PathClassifier;
    use crate::detector::LabelSet;
    use crate::error::EtccError;
    use crate::record::FileRecord;
    use tempfile::TempDir;

    fn sample() -> ClassificationResult {
        let mut result = ClassificationResult::for_classifier(&PathClassifier::builtin());
        result.push(
            "Cloud",
            FileRecord::with_labels(
                "/etc/cloud/cloud.cfg",
                LabelSet::from(["Shell script".to_string()]),
            ),
        );
        result
    }

    #[test]
    fn test_pretty_output_uses_four_spaces_and_declared_order() {
        let json = to_json_pretty(&sample()).unwrap();
        assert!(json.starts_with("{\n    \"System Configuration\": []"));
        assert!(json.contains("        {\n            \"path\": \"/etc/cloud/cloud.cfg\""));
        assert!(json.trim_end().ends_with("\"Others\": []\n}"));
        let cloud = json.find("\"Cloud\"").unwrap();
        let boot = json.find("\"Bootloaders\"").unwrap();
        assert!(boot < cloud);
    }

    #[test]
    fn test_write_and_read_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out").join(DEFAULT_REPORT_FILE);
        let result = sample();

        write_report(&result, &path).unwrap();
        let parsed = read_report(&path).unwrap();
        assert_eq!(parsed, result);
        assert_eq!(
            parsed.get("Cloud").unwrap()[0].labels,
            LabelSet::from(["Shell script".to_string()])
        );
    }

    #[test]
    fn test_written_file_matches_pretty_string() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_REPORT_FILE);
        let mut result = sample();
        result.push(
            "Others",
            FileRecord::with_labels("/etc/\u{00e9}t\u{00e9}.conf", LabelSet::new()),
        );

        write_report(&result, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json_pretty(&result).unwrap());
        assert!(written.contains("/etc/\u{00e9}t\u{00e9}.conf"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, EtccError::Json(_)));
    }

    #[test]
    fn test_write_into_file_parent_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let err = write_report(&sample(), &blocker.join("class.json")).unwrap_err();
        assert!(matches!(err, EtccError::Io(_)));
    }
}
