//! Branch name validation.
//!
//! Branch names follow `category/slug`, e.g. `feature/add-login`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("invalid regex"));

/// Returns true if `slug` is lowercase alphanumerics separated by single hyphens.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// A branch category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BranchCategory {
    /// `feature/`: new functionality.
    Feature,
    /// `bugfix/`: a fix on the development line.
    Bugfix,
    /// `hotfix/`: an urgent fix against a release.
    Hotfix,
    /// `release/`: release preparation.
    Release,
    /// `docs/`: documentation only.
    Docs,
    /// `refactor/`: restructuring without behavior change.
    Refactor,
    /// `test/`: tests only.
    Test,
    /// `chore/`: maintenance.
    Chore,
    /// A category enabled through configuration.
    Custom(String),
}

impl BranchCategory {
    /// The built-in categories.
    pub const BUILTIN: [Self; 8] = [
        Self::Feature,
        Self::Bugfix,
        Self::Hotfix,
        Self::Release,
        Self::Docs,
        Self::Refactor,
        Self::Test,
        Self::Chore,
    ];

    /// Returns the built-in category with the given name, if any.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        Self::BUILTIN.into_iter().find(|c| c.as_str() == name)
    }

    /// Returns the category name as written in a branch name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Feature => "feature",
            Self::Bugfix => "bugfix",
            Self::Hotfix => "hotfix",
            Self::Release => "release",
            Self::Docs => "docs",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for BranchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BranchCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The closed set of accepted branch categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    allowed: BTreeMap<String, BranchCategory>,
}

impl CategorySet {
    /// Creates a set containing every built-in category.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_names(BranchCategory::BUILTIN.iter().map(BranchCategory::as_str))
    }

    /// Creates a set from category names; unknown names become custom categories.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                let category = BranchCategory::builtin(name)
                    .unwrap_or_else(|| BranchCategory::Custom(name.to_string()));
                (name.to_string(), category)
            })
            .collect();
        Self { allowed }
    }

    /// Returns the category with the given name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<BranchCategory> {
        self.allowed.get(name).cloned()
    }

    /// Iterates over categories in name order.
    pub fn iter(&self) -> impl Iterator<Item = &BranchCategory> {
        self.allowed.values()
    }

    /// Returns the number of accepted categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    /// Returns true if no category is accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A validated branch name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BranchDescriptor {
    category: BranchCategory,
    slug: String,
}

impl BranchDescriptor {
    /// The part before the first `/`.
    #[must_use]
    pub fn category(&self) -> &BranchCategory {
        &self.category
    }

    /// The part after the first `/`.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl fmt::Display for BranchDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.slug)
    }
}

/// A branch name that does not follow `category/slug`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The part before `/` is not an accepted category.
    #[error("unknown branch category `{category}` in `{name}`")]
    UnknownCategory {
        /// The full branch name.
        name: String,
        /// The unrecognized category.
        category: String,
    },

    /// The part after `/` is not a valid slug.
    #[error("invalid branch slug `{slug}` in `{name}`")]
    InvalidSlug {
        /// The full branch name.
        name: String,
        /// The rejected slug.
        slug: String,
    },

    /// The name has no `/`.
    #[error("branch name `{name}` has no `/` between category and slug")]
    MissingSeparator {
        /// The full branch name.
        name: String,
    },
}

/// The category of a [`ValidationError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    /// See [`ValidationError::UnknownCategory`].
    UnknownCategory,
    /// See [`ValidationError::InvalidSlug`].
    InvalidSlug,
    /// See [`ValidationError::MissingSeparator`].
    MissingSeparator,
}

impl ValidationError {
    /// Returns the kind of failure.
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::UnknownCategory { .. } => ValidationErrorKind::UnknownCategory,
            Self::InvalidSlug { .. } => ValidationErrorKind::InvalidSlug,
            Self::MissingSeparator { .. } => ValidationErrorKind::MissingSeparator,
        }
    }

    /// The branch name that failed validation.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::UnknownCategory { name, .. }
            | Self::InvalidSlug { name, .. }
            | Self::MissingSeparator { name } => name,
        }
    }

    /// A human-readable reason.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::UnknownCategory { category, .. } => {
                format!("`{category}` is not an accepted branch category")
            }
            Self::InvalidSlug { slug, .. } if slug.is_empty() => "slug is empty".to_string(),
            Self::InvalidSlug { slug, .. } => format!(
                "`{slug}` must be lowercase letters and digits separated by single hyphens"
            ),
            Self::MissingSeparator { .. } => "expected `category/slug`".to_string(),
        }
    }
}

/// Validates branch names against a [`CategorySet`].
#[derive(Debug, Clone, Default)]
pub struct BranchValidator {
    categories: CategorySet,
}

impl BranchValidator {
    /// Creates a validator accepting the given categories.
    #[must_use]
    pub fn new(categories: CategorySet) -> Self {
        Self { categories }
    }

    /// Returns the accepted categories.
    #[must_use]
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Validates a branch name.
    ///
    /// The name is split on the first `/`, so `feature/a/b` has the slug
    /// `a/b` and is rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first problem found.
    pub fn validate(&self, name: &str) -> Result<BranchDescriptor, ValidationError> {
        let Some((category, slug)) = name.split_once('/') else {
            return Err(ValidationError::MissingSeparator {
                name: name.to_string(),
            });
        };

        let Some(category) = self.categories.resolve(category) else {
            return Err(ValidationError::UnknownCategory {
                name: name.to_string(),
                category: category.to_string(),
            });
        };

        if !is_valid_slug(slug) {
            return Err(ValidationError::InvalidSlug {
                name: name.to_string(),
                slug: slug.to_string(),
            });
        }

        Ok(BranchDescriptor {
            category,
            slug: slug.to_string(),
        })
    }
}
