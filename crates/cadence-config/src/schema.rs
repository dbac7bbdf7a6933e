//! Configuration schema.

use std::collections::BTreeMap;

use cadence_commit::ChangeImpact;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Enables (`true`) or disables (`false`) commit types on top of the
    /// built-in set.
    #[serde(default)]
    pub types: BTreeMap<String, bool>,

    /// Per-type impact overrides on top of the defaults.
    #[serde(default, alias = "typeImpact")]
    pub type_impact: BTreeMap<String, ChangeImpact>,

    /// Version configuration.
    #[serde(default)]
    pub version: VersionConfig,

    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Branch naming configuration.
    #[serde(default)]
    pub branch: BranchConfig,
}

/// Version configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    /// While the major version is 0, a breaking change bumps the minor version.
    #[serde(default = "default_true", alias = "preOneZeroMajorBumpsMinor")]
    pub pre_one_zero_major_bumps_minor: bool,

    /// Tag prefix (e.g., "v").
    #[serde(default = "default_tag_prefix", alias = "tagPrefix")]
    pub tag_prefix: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            pre_one_zero_major_bumps_minor: true,
            tag_prefix: default_tag_prefix(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Changelog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// List breaking commits under their type as well as under "Breaking Changes".
    #[serde(default = "default_true", alias = "includeBreakingInTypeGroup")]
    pub include_breaking_in_type_group: bool,

    /// Keep commits whose impact is none.
    #[serde(default, alias = "includeNonImpacting")]
    pub include_non_impacting: bool,

    /// Custom group titles (e.g., "feat" -> "New Features").
    #[serde(default)]
    pub titles: BTreeMap<String, String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            include_breaking_in_type_group: true,
            include_non_impacting: false,
            titles: BTreeMap::new(),
        }
    }
}

/// Branch naming configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchConfig {
    /// Allowed branch categories (the part before `/`).
    #[serde(default = "default_categories", alias = "branchCategories")]
    pub categories: Vec<String>,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

fn default_categories() -> Vec<String> {
    [
        "feature", "bugfix", "hotfix", "release", "docs", "refactor", "test", "chore",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.types.is_empty());
        assert!(config.type_impact.is_empty());
        assert!(config.version.pre_one_zero_major_bumps_minor);
        assert_eq!(config.version.tag_prefix, "v");
        assert!(config.changelog.include_breaking_in_type_group);
        assert!(!config.changelog.include_non_impacting);
        assert_eq!(config.branch.categories.len(), 8);
    }

    #[test]
    fn test_deserialize_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_deserialize_partial_section_uses_defaults() {
        let toml = r#"
            [version]
            tag_prefix = "release-"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.version.tag_prefix, "release-");
        assert!(config.version.pre_one_zero_major_bumps_minor);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            [types]
            security = true
            style = false

            [type_impact]
            docs = "patch"
            security = "minor"

            [version]
            pre_one_zero_major_bumps_minor = false
            tag_prefix = ""

            [changelog]
            include_breaking_in_type_group = false
            include_non_impacting = true

            [changelog.titles]
            feat = "New Features"

            [branch]
            categories = ["feature", "experiment"]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.types.get("security"), Some(&true));
        assert_eq!(config.types.get("style"), Some(&false));
        assert_eq!(config.type_impact.get("docs"), Some(&ChangeImpact::Patch));
        assert_eq!(
            config.type_impact.get("security"),
            Some(&ChangeImpact::Minor)
        );
        assert!(!config.version.pre_one_zero_major_bumps_minor);
        assert_eq!(config.version.tag_prefix, "");
        assert!(!config.changelog.include_breaking_in_type_group);
        assert!(config.changelog.include_non_impacting);
        assert_eq!(
            config.changelog.titles.get("feat").map(String::as_str),
            Some("New Features")
        );
        assert_eq!(config.branch.categories, vec!["feature", "experiment"]);
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let toml = r#"
            [typeImpact]
            perf = "minor"

            [version]
            preOneZeroMajorBumpsMinor = false

            [changelog]
            includeBreakingInTypeGroup = false

            [branch]
            branchCategories = ["feature"]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.type_impact.get("perf"), Some(&ChangeImpact::Minor));
        assert!(!config.version.pre_one_zero_major_bumps_minor);
        assert!(!config.changelog.include_breaking_in_type_group);
        assert_eq!(config.branch.categories, vec!["feature"]);
    }

    #[test]
    fn test_deserialize_invalid_impact() {
        let toml = r#"
            [type_impact]
            docs = "huge"
        "#;

        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config::default();
        let rendered = toml::to_string(&config).unwrap();
        assert!(rendered.contains("[version]"));
        assert!(rendered.contains("tag_prefix = \"v\""));

        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
