//! Version information for the application, populated at build time.

/// Get the build date in RFC3339 format
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Get the git commit hash (short)
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Get the package version
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Display string for the UI: `v{version}+{commit}`.
pub fn format_build_info() -> String {
    format!("v{}+{}", build_version(), build_commit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_date_not_empty() {
        assert!(!build_date().is_empty());
    }

    #[test]
    fn test_build_commit_not_empty() {
        assert!(!build_commit().is_empty());
    }

    #[test]
    fn test_build_version_not_empty() {
        assert!(!build_version().is_empty());
    }

    #[test]
    fn test_format_build_info() {
        let formatted = format_build_info();
        assert!(formatted.starts_with('v'), "expected v-prefixed version");
        assert!(formatted.contains('+'), "expected version+commit format");
    }
}
