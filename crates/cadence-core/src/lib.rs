//! Core library for Cadence.
//!
//! This crate turns parsed commits into release decisions:
//! - [`classify`]: The change impact of one commit
//! - [`VersionCalculator`]: The next semantic version for a set of impacts
//! - [`BranchValidator`]: Branch name checks (`category/slug`)
//! - [`aggregate`]: The grouped changelog model
//! - [`ReleasePlanner`]: All of the above in a single pass over raw messages

mod branch;
mod changelog;
mod classifier;
mod error;
mod pipeline;
mod settings;
mod version;

pub use branch::{
    BranchCategory, BranchDescriptor, BranchValidator, CategorySet, ValidationError,
    ValidationErrorKind, is_valid_slug,
};
pub use changelog::{
    BREAKING_CHANGES_TITLE, ChangelogModel, ChangelogOptions, ChangelogSection, SectionKey,
    aggregate, default_title,
};
pub use classifier::{TypeImpactPolicy, classify};
pub use error::{CoreError, CoreResult};
pub use pipeline::{CommitFailure, ReleasePlan, ReleasePlanner};
pub use settings::Settings;
pub use version::{SemanticVersion, VersionCalculator, VersionPolicy, max_impact};
