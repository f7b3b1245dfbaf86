use crate::domain::TagPattern;
use crate::error::Result;
use crate::git::{CommitInfo, Repository, TagRef};

/// Version label reported when no prior release tag exists
pub const DEFAULT_VERSION: &str = "0.0.0";

/// A tag chosen by the selector, together with the commit its target
/// resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTag {
    pub tag: TagRef,
    pub commit: CommitInfo,
}

/// Output of one analysis call
///
/// `commits` is newest-first and excludes everything already reachable from
/// the selected tag. `last_tag` is the tag's display name, or
/// [DEFAULT_VERSION] when no tag matched. The `tag` field carries the full
/// selection for display purposes; downstream release logic only needs the
/// first two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub commits: Vec<CommitInfo>,
    pub last_tag: String,
    pub tag: Option<SelectedTag>,
}

/// Finds the most recent release tag matching a format pattern and collects
/// the commits made since it
pub struct ReleaseAnalyzer {
    pattern: TagPattern,
}

impl ReleaseAnalyzer {
    /// Create an analyzer for a tag format string such as "v{version}"
    ///
    /// The pattern is parsed eagerly so a format without the `{version}`
    /// placeholder fails here, before any repository access.
    pub fn new(tag_format: &str) -> Result<Self> {
        Ok(ReleaseAnalyzer {
            pattern: TagPattern::parse(tag_format)?,
        })
    }

    /// The parsed tag pattern this analyzer filters with
    pub fn pattern(&self) -> &TagPattern {
        &self.pattern
    }

    /// Select the matching tag whose commit has the latest committer
    /// timestamp
    ///
    /// Tags are filtered by the pattern's fixed prefix and suffix, then
    /// resolved to commits. Tags whose target does not resolve to a commit
    /// (dangling, or pointing at a tree or blob) are skipped without error.
    /// Equal timestamps are broken by lexicographically greatest tag name,
    /// so the result is deterministic regardless of store iteration order.
    ///
    /// # Returns
    /// * `Ok(Some(SelectedTag))` - The latest matching tag and its commit
    /// * `Ok(None)` - No tag matched the pattern
    /// * `Err` - Tag refs or the object store could not be read
    pub fn select_latest_tag<R: Repository + ?Sized>(
        &self,
        repo: &R,
    ) -> Result<Option<SelectedTag>> {
        let mut best: Option<SelectedTag> = None;

        for tag in repo.list_tags()? {
            if !self.pattern.matches(&tag.name) {
                continue;
            }

            let commit = match repo.lookup_commit(tag.target)? {
                Some(commit) => commit,
                None => continue,
            };

            let is_better = match &best {
                Some(current) => {
                    (commit.time, tag.name.as_str()) > (current.commit.time, current.tag.name.as_str())
                }
                None => true,
            };
            if is_better {
                best = Some(SelectedTag { tag, commit });
            }
        }

        Ok(best)
    }

    /// Collect every commit reachable from HEAD that is not reachable from
    /// the selected tag's commit, newest first
    ///
    /// With no tag the full history of HEAD is returned. An unborn branch
    /// (zero-commit repository) yields an empty range. An unreadable commit
    /// object mid-walk fails the whole call; a silently short list would
    /// feed a wrong release decision downstream.
    pub fn commits_since<R: Repository + ?Sized>(
        &self,
        repo: &R,
        last_tag: Option<&SelectedTag>,
    ) -> Result<Vec<CommitInfo>> {
        let head = match repo.head_oid()? {
            Some(head) => head,
            None => return Ok(Vec::new()),
        };

        let boundary = last_tag.map(|selected| selected.commit.id);
        repo.walk_commits(head, boundary)?.collect()
    }

    /// Run the full analysis: tag selection, then commit collection
    pub fn analyze<R: Repository + ?Sized>(&self, repo: &R) -> Result<AnalysisResult> {
        let selected = self.select_latest_tag(repo)?;
        let commits = self.commits_since(repo, selected.as_ref())?;

        let last_tag = selected
            .as_ref()
            .map(|selected| selected.tag.name.clone())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());

        Ok(AnalysisResult {
            commits,
            last_tag,
            tag: selected,
        })
    }
}
