use crate::models::PackageInfo;

/// Description used when the registry has neither a license field nor a
/// license classifier.
pub const UNKNOWN_LICENSE: &str = "UNKNOWN";

/// Build the license description for one package.
///
/// The first classifier starting with "license" (case-insensitive) wins and is
/// shown next to the raw `license` field. Without one, an empty or missing
/// `license` yields [`UNKNOWN_LICENSE`] and a non-empty one is used as-is.
pub fn describe_license(info: &PackageInfo) -> String {
    let license = info.license.as_deref();

    if let Some(classifier) = info
        .classifiers
        .iter()
        .find(|c| c.to_lowercase().starts_with("license"))
    {
        return format!("{}  ({})", license.unwrap_or("None"), classifier);
    }

    match license {
        Some(license) if !license.is_empty() => license.to_string(),
        _ => UNKNOWN_LICENSE.to_string(),
    }
}
