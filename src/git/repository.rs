use crate::error::{ReleaseScoutError, Result};
use crate::git::{CommitInfo, CommitWalk, Repository, TagRef};
use git2::{ErrorCode, ObjectType, Oid, Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    ///
    /// Discovers the repository at the given path or any of its parent
    /// directories, mirroring what the git CLI does.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn commit_info(&self, commit: &git2::Commit) -> CommitInfo {
        CommitInfo {
            id: commit.id(),
            parents: commit.parent_ids().collect(),
            time: commit.committer().when().seconds(),
            author: commit.author().name().unwrap_or("unknown").to_string(),
            message: commit.message().unwrap_or("").to_string(),
        }
    }
}

impl Repository for Git2Repository {
    fn head_oid(&self) -> Result<Option<Oid>> {
        match self.repo.head() {
            Ok(head) => {
                let oid = head.target().ok_or_else(|| {
                    ReleaseScoutError::repository("HEAD reference has no target")
                })?;
                Ok(Some(oid))
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list_tags(&self) -> Result<Vec<TagRef>> {
        let names = self.repo.tag_names(None)?;

        let mut tags = Vec::new();
        for name in names.iter().flatten() {
            let reference = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
                Ok(reference) => reference,
                // A tag deleted between tag_names and find_reference is a
                // non-match, not a failure
                Err(e) if e.code() == ErrorCode::NotFound => continue,
                Err(e) => return Err(e.into()),
            };

            let target = reference.target().ok_or_else(|| {
                ReleaseScoutError::repository(format!("Tag '{}' has no target", name))
            })?;

            tags.push(TagRef {
                name: name.to_string(),
                target,
            });
        }

        Ok(tags)
    }

    fn lookup_commit(&self, oid: Oid) -> Result<Option<CommitInfo>> {
        let object = match self.repo.find_object(oid, None) {
            Ok(object) => object,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Peel through annotated-tag objects; anything that does not end in
        // a commit (blob or tree target) is a non-match
        match object.peel(ObjectType::Commit) {
            Ok(peeled) => match peeled.into_commit() {
                Ok(commit) => Ok(Some(self.commit_info(&commit))),
                Err(_) => Ok(None),
            },
            Err(_) => Ok(None),
        }
    }

    fn walk_commits(&self, tip: Oid, boundary: Option<Oid>) -> Result<CommitWalk<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(tip)?;

        if let Some(boundary) = boundary {
            revwalk.hide(boundary)?;
        }

        let walk = revwalk.map(move |oid| {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            Ok(self.commit_info(&commit))
        });

        Ok(Box::new(walk))
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe
// design, and this wrapper only ever reads.
unsafe impl Sync for Git2Repository {}
