use std::fmt;

/// Warnings that occur while scanning a repository for release state.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// A tag matched but no new commits exist since it
    NoNewCommits { last_tag: String, head: String },
    /// The matched tag's version part is not a semantic version
    UnparsableVersion { tag: String, reason: String },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::NoNewCommits { last_tag, head } => {
                let short_hash = if head.len() > 7 { &head[..7] } else { head.as_str() };
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    last_tag, short_hash
                )
            }
            ScanWarning::UnparsableVersion { tag, reason } => {
                write!(f, "Cannot parse version from tag '{}': {}", tag, reason)
            }
        }
    }
}
