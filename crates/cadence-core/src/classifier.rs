//! Commit classification.

use std::collections::BTreeMap;

use cadence_commit::{ChangeImpact, CommitType, ParsedCommit};
use tracing::debug;

/// Maps commit types to the impact they have on the next version.
///
/// Defaults:
/// - `feat` → Minor
/// - `fix`, `perf` → Patch
/// - Other → None
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeImpactPolicy {
    impacts: BTreeMap<String, ChangeImpact>,
}

impl TypeImpactPolicy {
    /// Creates a policy where every type has no impact.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            impacts: BTreeMap::new(),
        }
    }

    /// Sets the impact for a type name.
    #[must_use]
    pub fn with(mut self, commit_type: impl Into<String>, impact: ChangeImpact) -> Self {
        self.impacts.insert(commit_type.into(), impact);
        self
    }

    /// Returns the impact configured for a type, `None` if absent.
    #[must_use]
    pub fn impact_of(&self, commit_type: &CommitType) -> ChangeImpact {
        self.impacts
            .get(commit_type.as_str())
            .copied()
            .unwrap_or_default()
    }

    /// Classifies a commit under this policy. See [`classify`].
    #[must_use]
    pub fn classify(&self, commit: &ParsedCommit) -> ChangeImpact {
        classify(commit, self)
    }
}

impl Default for TypeImpactPolicy {
    fn default() -> Self {
        Self::empty()
            .with("feat", ChangeImpact::Minor)
            .with("fix", ChangeImpact::Patch)
            .with("perf", ChangeImpact::Patch)
    }
}

/// Returns the change impact of a commit.
///
/// Breaking changes are always major, whatever their type. Otherwise the
/// impact is looked up in `policy`.
#[must_use]
pub fn classify(commit: &ParsedCommit, policy: &TypeImpactPolicy) -> ChangeImpact {
    let impact = if commit.is_breaking() {
        ChangeImpact::Major
    } else {
        policy.impact_of(commit.commit_type())
    };

    debug!(
        commit_type = %commit.commit_type(),
        breaking = commit.is_breaking(),
        %impact,
        "classified commit"
    );

    impact
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_commit::{CommitParser, TypeSet};

    fn make_commit(message: &str) -> ParsedCommit {
        CommitParser::new(TypeSet::builtin().with("security"))
            .parse(message)
            .unwrap()
    }

    #[test]
    fn test_feature() {
        let policy = TypeImpactPolicy::default();
        assert_eq!(
            classify(&make_commit("feat: add login"), &policy),
            ChangeImpact::Minor
        );
    }

    #[test]
    fn test_fix() {
        let policy = TypeImpactPolicy::default();
        assert_eq!(
            classify(&make_commit("fix: off by one"), &policy),
            ChangeImpact::Patch
        );
    }

    #[test]
    fn test_fix_with_breaking_footer() {
        let policy = TypeImpactPolicy::default();
        let commit = make_commit("fix: off by one\n\nBREAKING CHANGE: indexes start at 1");
        assert_eq!(classify(&commit, &policy), ChangeImpact::Major);
    }

    #[test]
    fn test_perf_triggers_patch() {
        let policy = TypeImpactPolicy::default();
        assert_eq!(
            classify(&make_commit("perf: cache lookups"), &policy),
            ChangeImpact::Patch
        );
    }

    #[test]
    fn test_chore_only() {
        let policy = TypeImpactPolicy::default();
        for message in ["chore: tidy", "docs: readme", "ci: cache", "style: fmt"] {
            assert_eq!(classify(&make_commit(message), &policy), ChangeImpact::None);
        }
    }

    #[test]
    fn test_breaking_wins_even_with_empty_policy() {
        let policy = TypeImpactPolicy::empty();
        assert_eq!(
            classify(&make_commit("docs!: move site"), &policy),
            ChangeImpact::Major
        );
    }

    #[test]
    fn test_custom_type_absent_from_policy() {
        let policy = TypeImpactPolicy::default();
        assert_eq!(
            classify(&make_commit("security: rotate keys"), &policy),
            ChangeImpact::None
        );
    }

    #[test]
    fn test_override() {
        let policy = TypeImpactPolicy::default()
            .with("docs", ChangeImpact::Patch)
            .with("feat", ChangeImpact::Patch);
        assert_eq!(policy.classify(&make_commit("docs: x")), ChangeImpact::Patch);
        assert_eq!(policy.classify(&make_commit("feat: x")), ChangeImpact::Patch);
    }

    #[test]
    fn test_impact_of() {
        let policy = TypeImpactPolicy::default();
        assert_eq!(policy.impact_of(&CommitType::Feat), ChangeImpact::Minor);
        assert_eq!(policy.impact_of(&CommitType::Revert), ChangeImpact::None);
    }
}
