use crate::error::{ReleaseScoutError, Result};

/// Placeholder token that marks where the version goes in a tag format.
pub const VERSION_TOKEN: &str = "{version}";

/// Tag naming pattern split around the version placeholder.
///
/// A format string such as "v{version}" or "release-{version}-final"
/// decomposes into the fixed text before and after the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub prefix: String,
    pub suffix: String,
}

impl TagPattern {
    /// Parse a tag format string into its (prefix, suffix) pair.
    ///
    /// The first occurrence of `{version}` is the split point. A format
    /// without the placeholder is a configuration defect and fails.
    ///
    /// # Example
    /// ```
    /// use release_scout::domain::TagPattern;
    ///
    /// let pattern = TagPattern::parse("v{version}").unwrap();
    /// assert_eq!(pattern.prefix, "v");
    /// assert_eq!(pattern.suffix, "");
    /// ```
    pub fn parse(pattern: &str) -> Result<Self> {
        let index = pattern.find(VERSION_TOKEN).ok_or_else(|| {
            ReleaseScoutError::pattern(format!(
                "Tag format '{}' does not contain {}",
                pattern, VERSION_TOKEN
            ))
        })?;

        Ok(TagPattern {
            prefix: pattern[..index].to_string(),
            suffix: pattern[index + VERSION_TOKEN.len()..].to_string(),
        })
    }

    /// Check whether a tag name matches this pattern's fixed parts.
    ///
    /// A name matches when it starts with the prefix and ends with the
    /// suffix. The middle is not inspected here.
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.prefix) && name.ends_with(&self.suffix)
    }

    /// Slice the version part out of a matching tag name.
    ///
    /// Returns `None` when the name does not match the pattern, or is too
    /// short to contain both fixed parts without overlap.
    pub fn version_part<'a>(&self, name: &'a str) -> Option<&'a str> {
        if !self.matches(name) {
            return None;
        }
        if name.len() < self.prefix.len() + self.suffix.len() {
            return None;
        }
        Some(&name[self.prefix.len()..name.len() - self.suffix.len()])
    }

    /// Format a version according to the pattern.
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn render(&self, version: &str) -> String {
        format!("{}{}{}", self.prefix, version, self.suffix)
    }

    /// Strict check that a name is this pattern with an X.Y.Z version in
    /// the placeholder position.
    ///
    /// Tag selection itself never inspects the middle; this is for the
    /// advisory path that warns about tags whose version part is not a
    /// plain semantic version.
    pub fn matches_version(&self, name: &str) -> bool {
        let regex_pattern = format!(
            "^{}{}{}$",
            regex::escape(&self.prefix),
            r"\d+\.\d+\.\d+",
            regex::escape(&self.suffix)
        );

        match regex::Regex::new(&regex_pattern) {
            Ok(re) => re.is_match(name),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let pattern = TagPattern::parse("v{version}").unwrap();
        assert_eq!(pattern.prefix, "v");
        assert_eq!(pattern.suffix, "");
    }

    #[test]
    fn test_parse_prefix_and_suffix() {
        let pattern = TagPattern::parse("release-{version}-final").unwrap();
        assert_eq!(pattern.prefix, "release-");
        assert_eq!(pattern.suffix, "-final");
    }

    #[test]
    fn test_parse_bare_token() {
        let pattern = TagPattern::parse("{version}").unwrap();
        assert_eq!(pattern.prefix, "");
        assert_eq!(pattern.suffix, "");
    }

    #[test]
    fn test_parse_missing_token_fails() {
        let result = TagPattern::parse("release-tag");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("does not contain {version}"));
    }

    #[test]
    fn test_parse_uses_first_token() {
        let pattern = TagPattern::parse("v{version}-{version}").unwrap();
        assert_eq!(pattern.prefix, "v");
        assert_eq!(pattern.suffix, "-{version}");
    }

    #[test]
    fn test_parse_round_trip() {
        let pattern = TagPattern::parse("app-{version}-rc").unwrap();
        assert_eq!(pattern.render("1.2.3"), "app-1.2.3-rc");
    }

    #[test]
    fn test_matches_prefix_only_pattern() {
        let pattern = TagPattern::parse("v{version}").unwrap();
        assert!(pattern.matches("v1.0.0"));
        assert!(pattern.matches("v2.0.0"));
        assert!(!pattern.matches("rel-1.0.0"));
    }

    #[test]
    fn test_matches_requires_both_ends() {
        let pattern = TagPattern::parse("release-{version}-final").unwrap();
        assert!(pattern.matches("release-1.0.0-final"));
        assert!(!pattern.matches("release-1.0.0"));
        assert!(!pattern.matches("1.0.0-final"));
    }

    #[test]
    fn test_version_part() {
        let pattern = TagPattern::parse("v{version}").unwrap();
        assert_eq!(pattern.version_part("v1.2.3"), Some("1.2.3"));
        assert_eq!(pattern.version_part("rel-1.2.3"), None);
    }

    #[test]
    fn test_version_part_with_suffix() {
        let pattern = TagPattern::parse("release-{version}-final").unwrap();
        assert_eq!(pattern.version_part("release-2.0.0-final"), Some("2.0.0"));
    }

    #[test]
    fn test_version_part_overlapping_fixed_parts() {
        // "v" both starts and ends with "v", but there is no room for a
        // version between the two fixed parts
        let pattern = TagPattern::parse("v{version}v").unwrap();
        assert!(pattern.matches("v"));
        assert_eq!(pattern.version_part("v"), None);
        assert_eq!(pattern.version_part("v1.0.0v"), Some("1.0.0"));
    }

    #[test]
    fn test_render() {
        let pattern = TagPattern::parse("v{version}").unwrap();
        assert_eq!(pattern.render("1.2.3"), "v1.2.3");
    }

    #[test]
    fn test_matches_version() {
        let pattern = TagPattern::parse("v{version}").unwrap();
        assert!(pattern.matches_version("v1.2.3"));
        assert!(!pattern.matches_version("v1.2.3-rc.1"));
        assert!(!pattern.matches_version("vabc"));
        assert!(!pattern.matches_version("rel-1.2.3"));
    }

    #[test]
    fn test_matches_version_escapes_fixed_parts() {
        // The dot in the prefix must match literally, not as a wildcard
        let pattern = TagPattern::parse("app.{version}").unwrap();
        assert!(pattern.matches_version("app.1.0.0"));
        assert!(!pattern.matches_version("appx1.0.0"));
    }
}
