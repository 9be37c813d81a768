//! Turn registry metadata into a printable license description and flag
//! GPL-family licenses.
//!
//! - [`describe`] — picks the license classifier (or raw license field).
//! - [`is_gpl_license`] — the copyleft check applied to that description.

pub mod describe;

pub use describe::describe_license;

/// `true` when the description mentions "gpl" in any case (GPL, LGPL, AGPL, ...).
pub fn is_gpl_license(license: &str) -> bool {
    license.to_lowercase().contains("gpl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpl_any_case() {
        assert!(is_gpl_license("GPL"));
        assert!(is_gpl_license("gpl"));
        assert!(is_gpl_license("Gpl"));
        assert!(is_gpl_license("LGPLv3+  (License :: OSI Approved :: GNU Lesser General Public License v3 or later (LGPLv3+))"));
    }

    #[test]
    fn test_not_gpl() {
        assert!(!is_gpl_license("MIT"));
        assert!(!is_gpl_license("UNKNOWN"));
        assert!(!is_gpl_license("MIT  (License :: OSI Approved :: MIT License)"));
    }
}
