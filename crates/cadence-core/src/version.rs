//! Version calculation.

use std::fmt;
use std::str::FromStr;

use cadence_commit::ChangeImpact;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::{CoreError, CoreResult};

/// A released `MAJOR.MINOR.PATCH` version.
///
/// Ordering is lexicographic over `(major, minor, patch)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
}

impl SemanticVersion {
    /// Creates a version from its components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The major component.
    #[must_use]
    pub const fn major(self) -> u64 {
        self.major
    }

    /// The minor component.
    #[must_use]
    pub const fn minor(self) -> u64 {
        self.minor
    }

    /// The patch component.
    #[must_use]
    pub const fn patch(self) -> u64 {
        self.patch
    }

    /// Parses a version from a tag, stripping `prefix` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the remainder is not a plain `MAJOR.MINOR.PATCH`.
    pub fn from_tag(tag: &str, prefix: &str) -> CoreResult<Self> {
        tag.strip_prefix(prefix).unwrap_or(tag).parse()
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let version = semver::Version::parse(s.trim())?;
        if !version.pre.is_empty() || !version.build.is_empty() {
            return Err(CoreError::UnsupportedVersion(s.to_string()));
        }
        Ok(Self::new(version.major, version.minor, version.patch))
    }
}

impl From<SemanticVersion> for semver::Version {
    fn from(version: SemanticVersion) -> Self {
        Self::new(version.major, version.minor, version.patch)
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Version bump rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPolicy {
    /// While `major == 0`, a major impact bumps the minor version instead.
    pub pre_one_zero_major_bumps_minor: bool,
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self {
            pre_one_zero_major_bumps_minor: true,
        }
    }
}

/// Returns the highest impact in the sequence, `None` when empty.
pub fn max_impact<I>(impacts: I) -> ChangeImpact
where
    I: IntoIterator<Item = ChangeImpact>,
{
    impacts.into_iter().max().unwrap_or_default()
}

/// Computes next versions under a [`VersionPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionCalculator {
    policy: VersionPolicy,
}

impl VersionCalculator {
    /// Creates a calculator with the given policy.
    #[must_use]
    pub fn new(policy: VersionPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy in use.
    #[must_use]
    pub fn policy(&self) -> VersionPolicy {
        self.policy
    }

    /// Applies a single bump.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InternalConsistency`] if a component would overflow.
    pub fn bump(
        &self,
        current: SemanticVersion,
        impact: ChangeImpact,
    ) -> CoreResult<SemanticVersion> {
        let impact = if impact == ChangeImpact::Major
            && current.major == 0
            && self.policy.pre_one_zero_major_bumps_minor
        {
            ChangeImpact::Minor
        } else {
            impact
        };

        let next = match impact {
            ChangeImpact::Major => SemanticVersion::new(increment(current.major, current)?, 0, 0),
            ChangeImpact::Minor => {
                SemanticVersion::new(current.major, increment(current.minor, current)?, 0)
            }
            ChangeImpact::Patch => SemanticVersion::new(
                current.major,
                current.minor,
                increment(current.patch, current)?,
            ),
            ChangeImpact::None => current,
        };

        Ok(next)
    }

    /// Folds a sequence of impacts into the next version.
    ///
    /// Only the highest impact matters, so the order of `impacts` does not
    /// affect the result.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InternalConsistency`] if a component would overflow.
    pub fn next_version<I>(
        &self,
        current: SemanticVersion,
        impacts: I,
    ) -> CoreResult<SemanticVersion>
    where
        I: IntoIterator<Item = ChangeImpact>,
    {
        let impact = max_impact(impacts);
        let next = self.bump(current, impact)?;
        debug!(%current, %impact, %next, "computed next version");
        Ok(next)
    }
}

fn increment(component: u64, current: SemanticVersion) -> CoreResult<u64> {
    component.checked_add(1).ok_or_else(|| {
        CoreError::InternalConsistency(format!("version component overflow bumping {current}"))
    })
}
