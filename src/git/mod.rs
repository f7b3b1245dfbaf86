//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only Git
//! operations the release analysis needs, allowing for multiple
//! implementations including real Git repositories and mock implementations
//! for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait, which exposes exactly
//! the surface the analyzer consumes: HEAD resolution, tag enumeration,
//! object-to-commit resolution, and an ancestor walk. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! # use release_scout::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! if let Some(head) = repo.head_oid()? {
//!     for item in repo.walk_commits(head, None)? {
//!         let commit = item?;
//!         println!("{} {}", commit.short_id(), commit.summary());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Commit record handed to downstream release logic.
///
/// Author and message pass through unmodified; the analysis itself only
/// reads `id`, `parents` and `time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Full commit id
    pub id: Oid,
    /// Parent commit ids (one or more, empty for a root commit)
    pub parents: Vec<Oid>,
    /// Committer timestamp, seconds since the Unix epoch
    pub time: i64,
    /// The commit author
    pub author: String,
    /// The full commit message
    pub message: String,
}

impl CommitInfo {
    /// Shortened (7 character) form of the commit id for display
    pub fn short_id(&self) -> String {
        self.id.to_string()[..7].to_string()
    }

    /// First line of the commit message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// A tag reference: display name plus the raw object id it points at.
///
/// The target may be an annotated-tag object rather than a commit;
/// [Repository::lookup_commit] peels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// Tag display name (without the refs/tags/ prefix)
    pub name: String,
    /// Object id the tag reference points at
    pub target: Oid,
}

/// Lazy stream of commits produced by [Repository::walk_commits].
pub type CommitWalk<'a> = Box<dyn Iterator<Item = Result<CommitInfo>> + 'a>;

/// Common read-only git operation trait for abstraction
///
/// This trait abstracts the repository access the release analysis performs,
/// allowing real Git repositories and mock implementations for testing to be
/// used interchangeably.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` so a caller may move the analysis
/// onto a worker thread. The trait itself never mutates the repository.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::ReleaseScoutError] variants. Lookups that merely find
/// nothing (no HEAD yet, an object that is not a commit) report `Ok(None)`
/// rather than an error.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation for mocking Git operations
pub trait Repository: Send + Sync {
    /// Get the commit id of the current branch tip (HEAD)
    ///
    /// # Returns
    /// * `Ok(Some(Oid))` - Commit id HEAD resolves to
    /// * `Ok(None)` - Repository has no commits yet (unborn branch)
    /// * `Err` - If HEAD cannot be read
    ///
    /// # Example
    /// ```rust
    /// # use release_scout::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.head_oid()? {
    ///     Some(oid) => println!("HEAD is at {}", oid),
    ///     None => println!("Repository has no commits"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn head_oid(&self) -> Result<Option<Oid>>;

    /// Enumerate all tag references in the repository
    ///
    /// Targets are the raw ref targets; annotated tags point at their tag
    /// object, not the tagged commit.
    ///
    /// # Returns
    /// * `Ok(Vec<TagRef>)` - All tags with their targets
    /// * `Err` - If the refs cannot be read
    fn list_tags(&self) -> Result<Vec<TagRef>>;

    /// Resolve an object id to a commit
    ///
    /// Peels annotated-tag objects down to the commit they annotate.
    ///
    /// # Arguments
    /// * `oid` - Object id to resolve (commit or annotated-tag object)
    ///
    /// # Returns
    /// * `Ok(Some(CommitInfo))` - The commit the object resolves to
    /// * `Ok(None)` - The object is missing or does not peel to a commit
    /// * `Err` - If the object store cannot be read
    ///
    /// # Example
    /// ```rust
    /// # use release_scout::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// for tag in repo.list_tags()? {
    ///     match repo.lookup_commit(tag.target)? {
    ///         Some(commit) => println!("{} -> {}", tag.name, commit.short_id()),
    ///         None => println!("{} does not point at a commit", tag.name),
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn lookup_commit(&self, oid: Oid) -> Result<Option<CommitInfo>>;

    /// Walk the ancestors of `tip`, excluding everything reachable from
    /// `boundary`
    ///
    /// Commits are yielded newest first, in topological order with committer
    /// time as the secondary key, so that among commits with no ancestor
    /// relationship the newer one comes first. When `boundary` is set,
    /// neither it nor any of its ancestors is yielded. The stream is lazy;
    /// callers that only need a prefix never pay for the full history.
    ///
    /// # Arguments
    /// * `tip` - Commit id to start walking from
    /// * `boundary` - Optional commit id whose ancestor closure is excluded
    ///
    /// # Returns
    /// * `Ok(CommitWalk)` - Lazy iterator over the selected commits
    /// * `Err` - If the walk cannot be set up
    fn walk_commits(&self, tip: Oid, boundary: Option<Oid>) -> Result<CommitWalk<'_>>;
}
