//! Classification records and the per-category result map
//!
//! The serialized form is a JSON object keyed by category name, in
//! declaration order with "Others" last:
//!
//! ```json
//! {
//!     "System Configuration": [
//!         { "path": "/etc/hosts", "detail_types": ["Shell script"] }
//!     ],
//!     "Others": []
//! }
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::category::PathClassifier;
use crate::detector::LabelSet;

/// One classified file
///
/// Identity is the path alone: two records with the same path compare equal
/// whatever their labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    #[serde(rename = "detail_types", default)]
    pub labels: LabelSet,
}

impl FileRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_labels(path, LabelSet::new())
    }

    pub fn with_labels(path: impl Into<String>, labels: LabelSet) -> Self {
        Self {
            path: path.into(),
            labels,
        }
    }
}

impl PartialEq for FileRecord {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FileRecord {}

impl Hash for FileRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl PartialOrd for FileRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        write!(f, "{}: {}", self.path, labels.join(", "))
    }
}

/// Records grouped by category, keys kept in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassificationResult {
    buckets: Vec<(String, Vec<FileRecord>)>,
}

impl ClassificationResult {
    /// Result with an empty bucket for every category the classifier knows
    pub fn for_classifier(classifier: &PathClassifier) -> Self {
        Self::with_categories(classifier.category_names())
    }

    /// Result with one empty bucket per name, in the given order
    pub fn with_categories<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut result = Self::default();
        for name in names {
            result.ensure_category(name.into());
        }
        result
    }

    fn ensure_category(&mut self, name: String) -> &mut Vec<FileRecord> {
        let index = match self.buckets.iter().position(|(n, _)| *n == name) {
            Some(index) => index,
            None => {
                self.buckets.push((name, Vec::new()));
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[index].1
    }

    /// Append a record to a category bucket, creating the bucket if unknown
    pub fn push(&mut self, category: &str, record: FileRecord) {
        self.ensure_category(category.to_string()).push(record);
    }

    /// Records in a category
    pub fn get(&self, category: &str) -> Option<&[FileRecord]> {
        self.buckets
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, records)| records.as_slice())
    }

    /// Category names in order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(name, _)| name.as_str())
    }

    /// (category, records) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FileRecord])> {
        self.buckets
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Number of records in each category, in order
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.iter()
            .map(|(name, records)| (name, records.len()))
            .collect()
    }

    pub fn total_files(&self) -> usize {
        self.buckets.iter().map(|(_, records)| records.len()).sum()
    }

    /// Which category each path landed in
    pub fn category_of_paths(&self) -> HashMap<&str, &str> {
        self.iter()
            .flat_map(|(name, records)| records.iter().map(move |r| (r.path.as_str(), name)))
            .collect()
    }
}

impl Serialize for ClassificationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (name, records) in &self.buckets {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ClassificationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultVisitor;

        impl<'de> Visitor<'de> for ResultVisitor {
            type Value = ClassificationResult;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to file records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut result = ClassificationResult::default();
                while let Some((name, records)) =
                    access.next_entry::<String, Vec<FileRecord>>()?
                {
                    result.ensure_category(name).extend(records);
                }
                Ok(result)
            }
        }

        deserializer.deserialize_map(ResultVisitor)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::category::{BUILTIN_CATEGORIES, OTHERS_CATEGORY};

    #[test]
    fn test_record_identity_is_path_only() {
        let a = FileRecord::with_labels("/etc/hosts", LabelSet::from(["x".to_string()]));
        let b = FileRecord::new("/etc/hosts");
        assert_eq!(a, b);

        let set: HashSet<FileRecord> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_records_do_not_share_label_sets() {
        let mut a = FileRecord::new("/etc/a");
        let b = FileRecord::new("/etc/b");
        a.labels.insert("Systemd".to_string());
        assert!(b.labels.is_empty());
    }

    #[test]
    fn test_record_display() {
        let record = FileRecord::with_labels(
            "/etc/rc.local",
            LabelSet::from(["Shell script".to_string(), "Systemd".to_string()]),
        );
        assert_eq!(record.to_string(), "/etc/rc.local: Shell script, Systemd");
        assert_eq!(FileRecord::new("/etc/x").to_string(), "/etc/x: ");
    }

    #[test]
    fn test_record_serializes_detail_types() {
        let record =
            FileRecord::with_labels("/etc/ssl/a.pem", LabelSet::from(["certificate".to_string()]));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["path"], "/etc/ssl/a.pem");
        assert_eq!(json["detail_types"], serde_json::json!(["certificate"]));
    }

    #[test]
    fn test_result_has_every_category_when_empty() {
        let result = ClassificationResult::for_classifier(&PathClassifier::builtin());
        let names: Vec<&str> = result.categories().collect();
        assert_eq!(names.len(), BUILTIN_CATEGORIES.len() + 1);
        assert_eq!(names[0], BUILTIN_CATEGORIES[0].name);
        assert_eq!(names.last(), Some(&OTHERS_CATEGORY));
        assert_eq!(result.total_files(), 0);
        assert!(result.iter().all(|(_, records)| records.is_empty()));
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut result = ClassificationResult::with_categories(["A", "B"]);
        result.push("B", FileRecord::new("/2"));
        result.push("B", FileRecord::new("/1"));
        result.push("C", FileRecord::new("/3"));

        let paths: Vec<&str> = result
            .get("B")
            .unwrap()
            .iter()
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(paths, vec!["/2", "/1"]);
        assert_eq!(result.counts(), vec![("A", 0), ("B", 2), ("C", 1)]);
        assert_eq!(result.category_of_paths()["/3"], "C");
    }

    #[test]
    fn test_serialization_keeps_key_order() {
        let result = ClassificationResult::with_categories(["Zeta", "Alpha", "Others"]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"Zeta":[],"Alpha":[],"Others":[]}"#);
    }

    #[test]
    fn test_json_round_trip_preserves_membership() {
        let mut result = ClassificationResult::for_classifier(&PathClassifier::builtin());
        result.push(
            "System Configuration",
            FileRecord::with_labels(
                "/etc/rc.local",
                LabelSet::from(["Shell script".to_string(), "Systemd".to_string()]),
            ),
        );
        result.push(OTHERS_CATEGORY, FileRecord::new("/etc/odd"));

        let json = serde_json::to_string(&result).unwrap();
        let parsed: ClassificationResult = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, result);
        assert_eq!(parsed.category_of_paths(), result.category_of_paths());
        let record = &parsed.get("System Configuration").unwrap()[0];
        assert_eq!(record.labels.len(), 2);
    }
}
