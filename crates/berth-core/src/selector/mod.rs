//! Deployment selection rule.
//!
//! Given the candidates of one test class bucketed by target and the active target,
//! pick exactly one candidate:
//! - a candidate tagged for the active target wins;
//! - otherwise the single untagged (default) candidate is used;
//! - every ambiguity or absence is reported as an error.
use berth_model::{Candidate, CandidateGroup, TargetName};
use tracing::trace;

use crate::error::{CoreError, CoreResult};

/// Bucket the enumerated candidates by their target tag.
pub fn group_candidates<I>(candidates: I) -> CandidateGroup
where
    I: IntoIterator<Item = Candidate>,
{
    candidates.into_iter().collect()
}

/// Pick the candidate to deploy for `active`.
///
/// Pure: the same group and target always give the same candidate or the same error.
/// `class` only feeds error messages.
pub fn select<'g>(
    class: &str,
    group: &'g CandidateGroup,
    active: TargetName,
) -> CoreResult<&'g Candidate> {
    if group.is_empty() {
        return Err(CoreError::NoDeploymentFound {
            class: class.to_string(),
        });
    }

    if let Some(bucket) = group.get(active).filter(|_| !active.is_none()) {
        trace!(%active, count = bucket.len(), "target-specific bucket found");
        return match bucket {
            [only] => Ok(only),
            _ => Err(CoreError::AmbiguousTargetedDeployment {
                class: class.to_string(),
                target: active,
                count: bucket.len(),
            }),
        };
    }

    if let Some(bucket) = group.get(TargetName::None) {
        trace!(%active, count = bucket.len(), "falling back to default bucket");
        return match bucket {
            [only] => Ok(only),
            _ => Err(CoreError::AmbiguousDefaultDeployment {
                class: class.to_string(),
                count: bucket.len(),
            }),
        };
    }

    Err(CoreError::NoMatchingDeployment {
        class: class.to_string(),
        target: active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(cs: &[(&str, TargetName)]) -> CandidateGroup {
        group_candidates(cs.iter().map(|(m, t)| Candidate::tagged(*m, *t)))
    }

    #[test]
    fn empty_group_is_no_deployment_found() {
        let g = CandidateGroup::new();
        match select("NoDeployment", &g, TargetName::Glassfish) {
            Err(CoreError::NoDeploymentFound { class }) => assert_eq!(class, "NoDeployment"),
            other => panic!("expected NoDeploymentFound, got {other:?}"),
        }
    }

    #[test]
    fn single_default_is_selected_for_any_target() {
        let g = group(&[("deploy", TargetName::None)]);

        for active in TargetName::KNOWN.into_iter().chain([TargetName::None]) {
            let picked = select("SinglePlainDeployment", &g, active).unwrap();
            assert_eq!(picked.method, "deploy", "active target {active}");
        }
    }

    #[test]
    fn tagged_candidate_wins_over_default() {
        let g = group(&[
            ("plain", TargetName::None),
            ("as7", TargetName::JbossAs7),
        ]);

        let picked = select("Mixed", &g, TargetName::JbossAs7).unwrap();
        assert_eq!(picked.method, "as7");

        let picked = select("Mixed", &g, TargetName::Glassfish).unwrap();
        assert_eq!(picked.method, "plain");
    }

    #[test]
    fn single_tagged_candidate_only_matches_its_target() {
        let g = group(&[("deploy", TargetName::Glassfish)]);

        assert_eq!(
            select("SingleConcreteDeployment", &g, TargetName::Glassfish)
                .unwrap()
                .method,
            "deploy"
        );

        for active in [TargetName::JbossAs7, TargetName::Tomcat, TargetName::None] {
            match select("SingleConcreteDeployment", &g, active) {
                Err(CoreError::NoMatchingDeployment { class, target }) => {
                    assert_eq!(class, "SingleConcreteDeployment");
                    assert_eq!(target, active);
                }
                other => panic!("expected NoMatchingDeployment for {active}, got {other:?}"),
            }
        }
    }

    #[test]
    fn duplicated_tag_for_active_target_is_ambiguous() {
        let g = group(&[
            ("deploy", TargetName::Glassfish),
            ("deploy2", TargetName::Glassfish),
        ]);

        match select("MultipleDuplicatedConcreteDeployment", &g, TargetName::Glassfish) {
            Err(CoreError::AmbiguousTargetedDeployment { target, count, .. }) => {
                assert_eq!(target, TargetName::Glassfish);
                assert_eq!(count, 2);
            }
            other => panic!("expected AmbiguousTargetedDeployment, got {other:?}"),
        }
    }

    #[test]
    fn duplicated_tag_for_other_target_does_not_matter() {
        let g = group(&[
            ("gf1", TargetName::Glassfish),
            ("gf2", TargetName::Glassfish),
            ("as7", TargetName::JbossAs7),
        ]);

        assert_eq!(select("C", &g, TargetName::JbossAs7).unwrap().method, "as7");
    }

    #[test]
    fn several_defaults_without_specific_match_are_ambiguous() {
        let g = group(&[("deploy", TargetName::None), ("deploy2", TargetName::None)]);

        match select("MultiplePlainDeployment", &g, TargetName::Tomcat) {
            Err(CoreError::AmbiguousDefaultDeployment { class, count }) => {
                assert_eq!(class, "MultiplePlainDeployment");
                assert_eq!(count, 2);
            }
            other => panic!("expected AmbiguousDefaultDeployment, got {other:?}"),
        }
    }

    #[test]
    fn several_defaults_with_unresolved_target_are_ambiguous_defaults() {
        let g = group(&[("deploy", TargetName::None), ("deploy2", TargetName::None)]);

        assert!(matches!(
            select("MultiplePlainDeployment", &g, TargetName::None),
            Err(CoreError::AmbiguousDefaultDeployment { count: 2, .. })
        ));
    }

    #[test]
    fn several_defaults_are_fine_when_a_specific_one_matches() {
        let g = group(&[
            ("deploy", TargetName::None),
            ("deploy2", TargetName::None),
            ("gf", TargetName::Glassfish),
        ]);

        assert_eq!(select("C", &g, TargetName::Glassfish).unwrap().method, "gf");
    }

    #[test]
    fn only_foreign_buckets_is_no_matching_deployment() {
        let g = group(&[
            ("gf", TargetName::Glassfish),
            ("tomcat", TargetName::Tomcat),
            ("jetty", TargetName::Jetty),
        ]);

        match select("ForeignOnly", &g, TargetName::JbossAs7) {
            Err(CoreError::NoMatchingDeployment { class, target }) => {
                assert_eq!(class, "ForeignOnly");
                assert_eq!(target, TargetName::JbossAs7);
            }
            other => panic!("expected NoMatchingDeployment, got {other:?}"),
        }
    }

    #[test]
    fn selection_is_deterministic() {
        let g = group(&[
            ("gf", TargetName::Glassfish),
            ("as7", TargetName::JbossAs7),
            ("plain", TargetName::None),
        ]);

        for active in TargetName::KNOWN {
            let first = select("C", &g, active).unwrap().clone();
            for _ in 0..5 {
                assert_eq!(select("C", &g, active).unwrap(), &first);
            }
        }
    }
}
