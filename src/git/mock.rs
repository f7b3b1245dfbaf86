use crate::error::{ReleaseScoutError, Result};
use crate::git::{CommitInfo, CommitWalk, Repository, TagRef};
use git2::Oid;
use std::collections::{HashMap, HashSet};

/// Mock repository for testing without actual git operations
///
/// Holds an in-memory commit DAG plus tags and a head pointer, and
/// implements the same walk ordering contract as the real adapter:
/// topological, with committer time deciding between unrelated commits
/// (newer first) and the commit id as the final tie-break.
pub struct MockRepository {
    commits: HashMap<Oid, CommitInfo>,
    tags: HashMap<String, Oid>,
    head: Option<Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: HashMap::new(),
            tags: HashMap::new(),
            head: None,
        }
    }

    /// Add a commit to the mock repository
    pub fn add_commit(&mut self, info: CommitInfo) {
        self.commits.insert(info.id, info);
    }

    /// Add a tag pointing to an OID
    ///
    /// The target does not have to exist in the commit map; a tag whose
    /// target is unknown behaves like a tag on a non-commit object.
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    /// Set the current branch tip
    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }

    /// Everything reachable from `start` by following parent links,
    /// including `start` itself. Parents absent from the commit map are
    /// ignored.
    fn ancestor_closure(&self, start: Oid) -> HashSet<Oid> {
        let mut seen = HashSet::new();
        let mut stack = vec![start];

        while let Some(oid) = stack.pop() {
            if !seen.insert(oid) {
                continue;
            }
            if let Some(commit) = self.commits.get(&oid) {
                stack.extend(&commit.parents);
            }
        }

        seen
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Option<Oid>> {
        Ok(self.head)
    }

    fn list_tags(&self) -> Result<Vec<TagRef>> {
        let mut tags: Vec<TagRef> = self
            .tags
            .iter()
            .map(|(name, &target)| TagRef {
                name: name.clone(),
                target,
            })
            .collect();
        // HashMap iteration order is arbitrary; callers get a stable view
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    fn lookup_commit(&self, oid: Oid) -> Result<Option<CommitInfo>> {
        Ok(self.commits.get(&oid).cloned())
    }

    fn walk_commits(&self, tip: Oid, boundary: Option<Oid>) -> Result<CommitWalk<'_>> {
        if !self.commits.contains_key(&tip) {
            return Err(ReleaseScoutError::repository(format!(
                "Commit {} not found",
                tip
            )));
        }

        let mut included = self.ancestor_closure(tip);
        if let Some(boundary) = boundary {
            for oid in self.ancestor_closure(boundary) {
                included.remove(&oid);
            }
        }
        // The closure may contain parent ids with no commit in the map;
        // those behave like history beyond a shallow boundary and are not
        // walked
        included.retain(|oid| self.commits.contains_key(oid));

        // Kahn toposort emitting children before parents. A commit becomes
        // ready once every included commit that lists it as a parent has
        // been emitted; among ready commits the newest committer time wins,
        // id as the final tie-break.
        let mut pending_children: HashMap<Oid, usize> = HashMap::new();
        for oid in &included {
            for parent in &self.commits[oid].parents {
                if included.contains(parent) {
                    *pending_children.entry(*parent).or_insert(0) += 1;
                }
            }
        }

        let mut ready: Vec<Oid> = included
            .iter()
            .copied()
            .filter(|oid| !pending_children.contains_key(oid))
            .collect();

        let mut ordered = Vec::with_capacity(included.len());
        while !ready.is_empty() {
            let mut index = 0;
            for i in 1..ready.len() {
                let best = &self.commits[&ready[index]];
                let candidate = &self.commits[&ready[i]];
                if (candidate.time, candidate.id) > (best.time, best.id) {
                    index = i;
                }
            }
            let oid = ready.swap_remove(index);
            let commit = &self.commits[&oid];
            ordered.push(commit.clone());

            for parent in &commit.parents {
                if let Some(count) = pending_children.get_mut(parent) {
                    *count -= 1;
                    if *count == 0 {
                        pending_children.remove(parent);
                        ready.push(*parent);
                    }
                }
            }
        }

        Ok(Box::new(ordered.into_iter().map(Ok)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(byte: u8) -> Oid {
        Oid::from_bytes(&[byte; 20]).unwrap()
    }

    fn commit(id: u8, parents: &[u8], time: i64, message: &str) -> CommitInfo {
        CommitInfo {
            id: oid(id),
            parents: parents.iter().map(|&b| oid(b)).collect(),
            time,
            author: "Test <test@example.com>".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_mock_repository_head() {
        let mut repo = MockRepository::new();
        assert_eq!(repo.head_oid().unwrap(), None);

        repo.add_commit(commit(1, &[], 100, "initial"));
        repo.set_head(oid(1));
        assert_eq!(repo.head_oid().unwrap(), Some(oid(1)));
    }

    #[test]
    fn test_mock_repository_tags_sorted_by_name() {
        let mut repo = MockRepository::new();
        repo.add_tag("v2.0.0", oid(2));
        repo.add_tag("v1.0.0", oid(1));

        let tags = repo.list_tags().unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "v1.0.0");
        assert_eq!(tags[1].name, "v2.0.0");
    }

    #[test]
    fn test_mock_repository_lookup_unknown_target() {
        let repo = MockRepository::new();
        assert_eq!(repo.lookup_commit(oid(9)).unwrap(), None);
    }

    #[test]
    fn test_walk_linear_history_newest_first() {
        let mut repo = MockRepository::new();
        repo.add_commit(commit(1, &[], 100, "c1"));
        repo.add_commit(commit(2, &[1], 200, "c2"));
        repo.add_commit(commit(3, &[2], 300, "c3"));

        let ids: Vec<Oid> = repo
            .walk_commits(oid(3), None)
            .unwrap()
            .map(|c| c.unwrap().id)
            .collect();
        assert_eq!(ids, vec![oid(3), oid(2), oid(1)]);
    }

    #[test]
    fn test_walk_hides_boundary_closure() {
        let mut repo = MockRepository::new();
        repo.add_commit(commit(1, &[], 100, "c1"));
        repo.add_commit(commit(2, &[1], 200, "c2"));
        repo.add_commit(commit(3, &[2], 300, "c3"));
        repo.add_commit(commit(4, &[3], 400, "c4"));

        let ids: Vec<Oid> = repo
            .walk_commits(oid(4), Some(oid(2)))
            .unwrap()
            .map(|c| c.unwrap().id)
            .collect();
        assert_eq!(ids, vec![oid(4), oid(3)]);
    }

    #[test]
    fn test_walk_merge_history_orders_unrelated_by_time() {
        // 1 <- 2 (t=200) and 1 <- 3 (t=250), merged in 4
        let mut repo = MockRepository::new();
        repo.add_commit(commit(1, &[], 100, "c1"));
        repo.add_commit(commit(2, &[1], 200, "c2"));
        repo.add_commit(commit(3, &[1], 250, "c3"));
        repo.add_commit(commit(4, &[2, 3], 300, "merge"));

        let ids: Vec<Oid> = repo
            .walk_commits(oid(4), None)
            .unwrap()
            .map(|c| c.unwrap().id)
            .collect();
        assert_eq!(ids, vec![oid(4), oid(3), oid(2), oid(1)]);
    }

    #[test]
    fn test_walk_unknown_tip_is_an_error() {
        let repo = MockRepository::new();
        assert!(repo.walk_commits(oid(7), None).is_err());
    }

    #[test]
    fn test_walk_ignores_parents_absent_from_the_map() {
        // Commit 2 lists parent 9 which was never added; the walk stops
        // at the known history instead of panicking
        let mut repo = MockRepository::new();
        repo.add_commit(commit(2, &[9], 200, "c2"));
        repo.add_commit(commit(3, &[2], 300, "c3"));

        let ids: Vec<Oid> = repo
            .walk_commits(oid(3), None)
            .unwrap()
            .map(|c| c.unwrap().id)
            .collect();
        assert_eq!(ids, vec![oid(3), oid(2)]);
    }
}
