mod group;
pub use group::CandidateGroup;

use serde::{Deserialize, Serialize};

use crate::domain::{MethodName, TargetName};

/// One deployment-producing operation declared on a test class.
///
/// `target` is the tag attached to the operation, or [`TargetName::None`] when
/// the operation is untagged and therefore a default deployment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Operation name, unique within the declaring class.
    pub method: MethodName,
    /// Target the operation is tagged for.
    #[serde(default)]
    pub target: TargetName,
}

impl Candidate {
    /// Untagged candidate.
    pub fn untagged(method: impl Into<MethodName>) -> Self {
        Self {
            method: method.into(),
            target: TargetName::None,
        }
    }

    /// Candidate tagged for a concrete target.
    pub fn tagged(method: impl Into<MethodName>, target: TargetName) -> Self {
        Self {
            method: method.into(),
            target,
        }
    }

    /// Returns `true` if the candidate carries no target tag.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.target.is_none()
    }
}
