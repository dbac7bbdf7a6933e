//! Changelog aggregation.
//!
//! Builds the structured changelog model. Rendering it to Markdown or any
//! other format is left to the caller.

use std::collections::{BTreeMap, HashMap};

use cadence_commit::{ChangeImpact, CommitType, ParsedCommit};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::TypeImpactPolicy;

/// Title of the group collecting every breaking commit.
pub const BREAKING_CHANGES_TITLE: &str = "Breaking Changes";

/// Returns the default group title for a commit type.
#[must_use]
pub fn default_title(commit_type: &CommitType) -> &str {
    match commit_type {
        CommitType::Feat => "Features",
        CommitType::Fix => "Bug Fixes",
        CommitType::Docs => "Documentation",
        CommitType::Style => "Styles",
        CommitType::Refactor => "Code Refactoring",
        CommitType::Perf => "Performance Improvements",
        CommitType::Test => "Tests",
        CommitType::Chore => "Chores",
        CommitType::Ci => "Continuous Integration",
        CommitType::Build => "Build System",
        CommitType::Revert => "Reverts",
        CommitType::Custom(name) => name,
    }
}

/// Options controlling how commits are grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogOptions {
    /// Also list breaking commits under their own type's group.
    pub include_breaking_in_type_group: bool,

    /// Keep commits with no impact instead of dropping them.
    pub include_non_impacting: bool,

    /// Title overrides keyed by type name, or `breaking`.
    pub titles: BTreeMap<String, String>,
}

impl Default for ChangelogOptions {
    fn default() -> Self {
        Self {
            include_breaking_in_type_group: true,
            include_non_impacting: false,
            titles: BTreeMap::new(),
        }
    }
}

impl ChangelogOptions {
    /// Returns the title for a group key, honoring overrides.
    #[must_use]
    pub fn title(&self, key: &SectionKey) -> String {
        let (name, fallback) = match key {
            SectionKey::Breaking => ("breaking", BREAKING_CHANGES_TITLE),
            SectionKey::Type(commit_type) => (commit_type.as_str(), default_title(commit_type)),
        };
        self.titles
            .get(name)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// What a changelog group collects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKey {
    /// Every breaking commit, whatever its type.
    Breaking,
    /// Commits of one type.
    Type(CommitType),
}

impl Serialize for SectionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Breaking => serializer.serialize_str("breaking"),
            Self::Type(commit_type) => serializer.serialize_str(commit_type.as_str()),
        }
    }
}

/// One titled group of commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogSection {
    key: SectionKey,
    title: String,
    commits: Vec<ParsedCommit>,
}

impl ChangelogSection {
    #[must_use]
    pub fn key(&self) -> &SectionKey {
        &self.key
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The commits in input order.
    #[must_use]
    pub fn commits(&self) -> &[ParsedCommit] {
        &self.commits
    }
}

/// Commits grouped for a changelog.
///
/// The breaking group comes first when present, followed by one group per
/// type in the order each type first appears in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangelogModel {
    sections: Vec<ChangelogSection>,
}

impl ChangelogModel {
    #[must_use]
    pub fn sections(&self) -> &[ChangelogSection] {
        &self.sections
    }

    /// Returns the group with the given key.
    #[must_use]
    pub fn section(&self, key: &SectionKey) -> Option<&ChangelogSection> {
        self.sections.iter().find(|s| &s.key == key)
    }

    /// Returns the group with the given title.
    #[must_use]
    pub fn section_titled(&self, title: &str) -> Option<&ChangelogSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Returns the breaking changes group.
    #[must_use]
    pub fn breaking(&self) -> Option<&ChangelogSection> {
        self.section(&SectionKey::Breaking)
    }

    /// Iterates over groups in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChangelogSection> {
        self.sections.iter()
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if no commit made it into the changelog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a ChangelogModel {
    type Item = &'a ChangelogSection;
    type IntoIter = std::slice::Iter<'a, ChangelogSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Groups commits into a changelog model.
///
/// Commits with no impact are dropped unless they are breaking or
/// `options.include_non_impacting` is set. Breaking commits always land in the
/// breaking group, and also in their type group unless
/// `options.include_breaking_in_type_group` is false. The input order is kept
/// within each group.
#[must_use]
pub fn aggregate(
    commits: &[ParsedCommit],
    policy: &TypeImpactPolicy,
    options: &ChangelogOptions,
) -> ChangelogModel {
    let mut breaking = Vec::new();
    let mut type_groups: Vec<(CommitType, Vec<ParsedCommit>)> = Vec::new();
    let mut group_index: HashMap<CommitType, usize> = HashMap::new();

    for commit in commits {
        let impact = policy.classify(commit);

        if commit.is_breaking() {
            breaking.push(commit.clone());
            if !options.include_breaking_in_type_group {
                continue;
            }
        } else if impact == ChangeImpact::None && !options.include_non_impacting {
            debug!(header = %commit.header(), "leaving commit out of changelog");
            continue;
        }

        let commit_type = commit.commit_type();
        let index = *group_index.entry(commit_type.clone()).or_insert_with(|| {
            type_groups.push((commit_type.clone(), Vec::new()));
            type_groups.len() - 1
        });
        type_groups[index].1.push(commit.clone());
    }

    let mut sections = Vec::with_capacity(type_groups.len() + 1);
    if !breaking.is_empty() {
        sections.push(ChangelogSection {
            title: options.title(&SectionKey::Breaking),
            key: SectionKey::Breaking,
            commits: breaking,
        });
    }
    sections.extend(type_groups.into_iter().map(|(commit_type, commits)| {
        let key = SectionKey::Type(commit_type);
        ChangelogSection {
            title: options.title(&key),
            key,
            commits,
        }
    }));

    ChangelogModel { sections }
}
