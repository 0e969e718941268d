use std::collections::BTreeMap;

use crate::{candidate::Candidate, domain::TargetName};

/// Candidates of one test class bucketed by their target tag.
///
/// Buckets are never empty; each keeps declaration order.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CandidateGroup(BTreeMap<TargetName, Vec<Candidate>>);

impl CandidateGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Append a candidate to the bucket of its target.
    pub fn push(&mut self, candidate: Candidate) -> &mut Self {
        self.0.entry(candidate.target).or_default().push(candidate);
        self
    }

    /// Returns the bucket for `target`, if any candidate was declared for it.
    pub fn get(&self, target: TargetName) -> Option<&[Candidate]> {
        self.0.get(&target).map(Vec::as_slice)
    }

    /// Returns `true` if no candidate was declared at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of candidates across all buckets.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Targets that have at least one candidate.
    pub fn targets(&self) -> impl Iterator<Item = TargetName> + '_ {
        self.0.keys().copied()
    }

    /// Iterate over `(target, bucket)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TargetName, &[Candidate])> {
        self.0.iter().map(|(t, v)| (*t, v.as_slice()))
    }
}

impl FromIterator<Candidate> for CandidateGroup {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut group = CandidateGroup::new();
        for candidate in iter {
            group.push(candidate);
        }
        group
    }
}
