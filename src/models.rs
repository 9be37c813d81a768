use std::fmt;

use serde::Deserialize;

/// One manifest entry: a package name and its exact pin, if any.
///
/// `version` is only set for `==` pins; every other operator (or none at all)
/// leaves it `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub version: Option<String>,
}

impl Requirement {
    pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

/// The subset of the PyPI JSON document this tool reads.
///
/// `info` and `info.classifiers` are required: a response without them fails
/// to deserialize and aborts the run.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryRecord {
    pub info: PackageInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageInfo {
    #[serde(default)]
    pub license: Option<String>,
    pub classifiers: Vec<String>,
}

/// One line of the license report, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub package: String,
    pub version: Option<String>,
    pub description: String,
    pub flagged: bool,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}=={}: {}",
            self.package,
            self.version.as_deref().unwrap_or("None"),
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_display_pinned() {
        let line = ReportLine {
            package: "foo".to_string(),
            version: Some("1.2.3".to_string()),
            description: "MIT".to_string(),
            flagged: false,
        };
        assert_eq!(line.to_string(), "foo==1.2.3: MIT");
    }

    #[test]
    fn test_report_line_display_unpinned() {
        let line = ReportLine {
            package: "bar".to_string(),
            version: None,
            description: "UNKNOWN".to_string(),
            flagged: false,
        };
        assert_eq!(line.to_string(), "bar==None: UNKNOWN");
    }

    #[test]
    fn test_record_requires_classifiers() {
        let json = r#"{"info": {"license": "MIT"}}"#;
        assert!(serde_json::from_str::<RegistryRecord>(json).is_err());
    }

    #[test]
    fn test_record_license_may_be_null_or_absent() {
        let null: RegistryRecord =
            serde_json::from_str(r#"{"info": {"license": null, "classifiers": []}}"#).unwrap();
        assert_eq!(null.info.license, None);

        let absent: RegistryRecord =
            serde_json::from_str(r#"{"info": {"classifiers": ["Topic :: Utilities"]}}"#).unwrap();
        assert_eq!(absent.info.license, None);
        assert_eq!(absent.info.classifiers.len(), 1);
    }
}
