//! Change impact of a single commit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The effect a commit has on the next version.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Major > Minor > Patch > None`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ChangeImpact {
    /// No version bump needed.
    #[default]
    None,
    /// Patch version bump (bug fixes).
    Patch,
    /// Minor version bump (new features).
    Minor,
    /// Major version bump (breaking changes).
    Major,
}

impl fmt::Display for ChangeImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Patch => write!(f, "patch"),
            Self::Minor => write!(f, "minor"),
            Self::Major => write!(f, "major"),
        }
    }
}
