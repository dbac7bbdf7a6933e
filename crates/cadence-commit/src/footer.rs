//! Commit message footers.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// The footer token that marks a breaking change.
pub const BREAKING_CHANGE: &str = "BREAKING CHANGE";

/// Hyphenated synonym of [`BREAKING_CHANGE`].
pub const BREAKING_CHANGE_ALIAS: &str = "BREAKING-CHANGE";

static FOOTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<token>BREAKING CHANGE|[A-Z-]+)(?P<separator>: | #)(?P<value>\S.*)$")
        .expect("invalid regex")
});

/// How a footer token is joined to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterSeparator {
    /// `TOKEN: value`
    Colon,
    /// `TOKEN #value`
    Hash,
}

impl FooterSeparator {
    /// Returns the separator text as written in a message.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Colon => ": ",
            Self::Hash => " #",
        }
    }
}

/// A trailing `TOKEN: value` or `TOKEN #value` line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Footer {
    token: String,
    separator: FooterSeparator,
    value: String,
}

impl Footer {
    /// Parses a single line as a footer, returning `None` if it is not
    /// footer-shaped.
    pub(crate) fn parse_line(line: &str) -> Option<Self> {
        let captures = FOOTER_RE.captures(line)?;
        let separator = match &captures["separator"] {
            ": " => FooterSeparator::Colon,
            _ => FooterSeparator::Hash,
        };

        Some(Self {
            token: captures["token"].to_string(),
            separator,
            value: captures["value"].trim_end().to_string(),
        })
    }

    /// Returns true if the line is footer-shaped.
    pub(crate) fn matches(line: &str) -> bool {
        FOOTER_RE.is_match(line)
    }

    /// The footer token (e.g. `Refs`, `BREAKING CHANGE`).
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The separator used between token and value.
    #[must_use]
    pub fn separator(&self) -> FooterSeparator {
        self.separator
    }

    /// The footer value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if this footer announces a breaking change.
    #[must_use]
    pub fn is_breaking_change(&self) -> bool {
        self.token == BREAKING_CHANGE || self.token == BREAKING_CHANGE_ALIAS
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.token, self.separator.as_str(), self.value)
    }
}
