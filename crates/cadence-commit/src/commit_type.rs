//! Commit types and the set of types a parser accepts.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// A recognized commit type.
///
/// Types added through configuration are carried as [`CommitType::Custom`].
/// That variant is only produced by a [`TypeSet`] that lists the name, never
/// as a catch-all for unrecognized input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommitType {
    /// A new feature.
    Feat,
    /// A bug fix.
    Fix,
    /// Documentation only.
    Docs,
    /// Formatting, whitespace and other non-semantic changes.
    Style,
    /// A change that neither fixes a bug nor adds a feature.
    Refactor,
    /// A performance improvement.
    Perf,
    /// Adding or correcting tests.
    Test,
    /// Maintenance that touches neither source nor tests.
    Chore,
    /// Continuous integration configuration.
    Ci,
    /// Build system or external dependencies.
    Build,
    /// Reverts a previous commit.
    Revert,
    /// A type enabled through configuration.
    Custom(String),
}

impl CommitType {
    /// The built-in types, in their conventional order.
    pub const BUILTIN: [Self; 11] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Perf,
        Self::Test,
        Self::Chore,
        Self::Ci,
        Self::Build,
        Self::Revert,
    ];

    /// Returns the built-in type with the given name, if any.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        Self::BUILTIN.into_iter().find(|t| t.as_str() == name)
    }

    /// Returns the type name as it appears in a commit header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Ci => "ci",
            Self::Build => "build",
            Self::Revert => "revert",
            Self::Custom(name) => name,
        }
    }

    /// Returns true if `name` can appear as a type token in a header.
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && !name
                .chars()
                .any(|c| matches!(c, '(' | ')' | '!' | ':') || c.is_whitespace())
    }

    fn from_name(name: &str) -> Self {
        Self::builtin(name).unwrap_or_else(|| Self::Custom(name.to_string()))
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CommitType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The closed set of commit types a parser accepts.
///
/// Matching is case-sensitive: `Feat` is not `feat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSet {
    enabled: BTreeMap<String, CommitType>,
}

impl TypeSet {
    /// Creates a set containing every built-in type.
    #[must_use]
    pub fn builtin() -> Self {
        CommitType::BUILTIN.into_iter().collect()
    }

    /// Creates an empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            enabled: BTreeMap::new(),
        }
    }

    /// Starts from the built-in set and applies enable/disable toggles.
    ///
    /// A toggle naming an unknown type with `true` adds it as a custom type.
    #[must_use]
    pub fn from_toggles<I, S>(toggles: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        toggles
            .into_iter()
            .fold(Self::builtin(), |set, (name, enabled)| {
                if enabled {
                    set.with(name.as_ref())
                } else {
                    set.without(name.as_ref())
                }
            })
    }

    /// Adds a type by name.
    #[must_use]
    pub fn with(mut self, name: &str) -> Self {
        self.enabled
            .insert(name.to_string(), CommitType::from_name(name));
        self
    }

    /// Removes a type by name.
    #[must_use]
    pub fn without(mut self, name: &str) -> Self {
        self.enabled.remove(name);
        self
    }

    /// Returns the enabled type with the given name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<CommitType> {
        self.enabled.get(name).cloned()
    }

    /// Returns true if the named type is enabled.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.enabled.contains_key(name)
    }

    /// Iterates over enabled types in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CommitType> {
        self.enabled.values()
    }

    /// Returns the number of enabled types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    /// Returns true if no type is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}

impl Default for TypeSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FromIterator<CommitType> for TypeSet {
    fn from_iter<T: IntoIterator<Item = CommitType>>(iter: T) -> Self {
        Self {
            enabled: iter
                .into_iter()
                .map(|t| (t.as_str().to_string(), t))
                .collect(),
        }
    }
}
