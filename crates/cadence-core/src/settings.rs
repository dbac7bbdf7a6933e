//! Immutable policy snapshot built from configuration.

use cadence_commit::{CommitParser, CommitType, TypeSet};
use cadence_config::{Config, ConfigError};
use tracing::warn;

use crate::{
    BranchValidator, CategorySet, ChangelogOptions, CoreResult, TypeImpactPolicy,
    VersionCalculator, VersionPolicy, is_valid_slug,
};

/// Everything a batch computation needs, resolved once from [`Config`].
///
/// Pass it by reference; nothing in the core mutates it.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Parser accepting the enabled commit types.
    pub parser: CommitParser,
    /// Type to impact mapping.
    pub impacts: TypeImpactPolicy,
    /// Version bump rules.
    pub calculator: VersionCalculator,
    /// Changelog grouping options.
    pub changelog: ChangelogOptions,
    /// Branch name rules.
    pub branches: BranchValidator,
    /// Prefix stripped from version tags.
    pub tag_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parser: CommitParser::default(),
            impacts: TypeImpactPolicy::default(),
            calculator: VersionCalculator::default(),
            changelog: ChangelogOptions::default(),
            branches: BranchValidator::default(),
            tag_prefix: "v".to_string(),
        }
    }
}

impl Settings {
    /// Resolves a configuration into settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a type or category name is invalid, no type is
    /// enabled, or no branch category is configured.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        if let Some(name) = config
            .types
            .keys()
            .find(|name| !CommitType::is_valid_name(name))
        {
            return Err(invalid(format!("`{name}` is not a valid commit type name")));
        }

        let types = TypeSet::from_toggles(config.types.iter().map(|(name, on)| (name, *on)));
        if types.is_empty() {
            return Err(invalid("no commit types are enabled".to_string()));
        }

        let mut impacts = TypeImpactPolicy::default();
        for (name, impact) in &config.type_impact {
            if types.contains(name) {
                impacts = impacts.with(name.as_str(), *impact);
            } else {
                warn!(commit_type = %name, "impact configured for a type that is not enabled; ignoring");
            }
        }

        if config.branch.categories.is_empty() {
            return Err(invalid("branch categories must not be empty".to_string()));
        }
        if let Some(name) = config
            .branch
            .categories
            .iter()
            .find(|name| !is_valid_slug(name))
        {
            return Err(invalid(format!(
                "`{name}` is not a valid branch category name"
            )));
        }

        Ok(Self {
            parser: CommitParser::new(types),
            impacts,
            calculator: VersionCalculator::new(VersionPolicy {
                pre_one_zero_major_bumps_minor: config.version.pre_one_zero_major_bumps_minor,
            }),
            changelog: ChangelogOptions {
                include_breaking_in_type_group: config.changelog.include_breaking_in_type_group,
                include_non_impacting: config.changelog.include_non_impacting,
                titles: config.changelog.titles.clone(),
            },
            branches: BranchValidator::new(CategorySet::from_names(&config.branch.categories)),
            tag_prefix: config.version.tag_prefix.clone(),
        })
    }
}

fn invalid(message: String) -> crate::CoreError {
    ConfigError::Invalid(message).into()
}
