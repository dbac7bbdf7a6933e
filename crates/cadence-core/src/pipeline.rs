//! Single-pass release planning.

use cadence_commit::{ChangeImpact, ParseError, ParsedCommit};
use serde::Serialize;
use tracing::{info, warn};

use crate::{ChangelogModel, CoreResult, SemanticVersion, Settings, aggregate};

/// A message that could not be parsed, with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFailure {
    index: usize,
    error: ParseError,
}

impl CommitFailure {
    /// Zero-based position of the message in the input.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn error(&self) -> &ParseError {
        &self.error
    }
}

impl Serialize for CommitFailure {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CommitFailure", 4)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("kind", &self.error.kind())?;
        state.serialize_field("subject", self.error.subject())?;
        state.serialize_field("reason", &self.error.reason())?;
        state.end()
    }
}

/// The outcome of planning a release from a batch of messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleasePlan {
    current: SemanticVersion,
    next: SemanticVersion,
    impact: ChangeImpact,
    changelog: ChangelogModel,
    parsed: usize,
    failures: Vec<CommitFailure>,
}

impl ReleasePlan {
    #[must_use]
    pub fn current(&self) -> SemanticVersion {
        self.current
    }

    #[must_use]
    pub fn next(&self) -> SemanticVersion {
        self.next
    }

    /// The highest impact among the parsed commits.
    #[must_use]
    pub fn impact(&self) -> ChangeImpact {
        self.impact
    }

    #[must_use]
    pub fn changelog(&self) -> &ChangelogModel {
        &self.changelog
    }

    /// Number of messages that parsed successfully.
    #[must_use]
    pub fn parsed(&self) -> usize {
        self.parsed
    }

    /// Messages that were skipped, in input order.
    #[must_use]
    pub fn failures(&self) -> &[CommitFailure] {
        &self.failures
    }

    /// Returns true if every message parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns true if the next version differs from the current one.
    #[must_use]
    pub fn is_release(&self) -> bool {
        self.next != self.current
    }
}

/// Runs parsing, classification, version calculation and changelog
/// aggregation over a batch of raw messages.
#[derive(Debug, Clone, Copy)]
pub struct ReleasePlanner<'a> {
    settings: &'a Settings,
}

impl<'a> ReleasePlanner<'a> {
    #[must_use]
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Parses every message, keeping failures alongside the parsed commits.
    pub fn parse_all<I, S>(&self, messages: I) -> (Vec<ParsedCommit>, Vec<CommitFailure>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut commits = Vec::new();
        let mut failures = Vec::new();

        for (index, message) in messages.into_iter().enumerate() {
            match self.settings.parser.parse(message.as_ref()) {
                Ok(commit) => commits.push(commit),
                Err(error) => {
                    warn!(
                        index,
                        subject = %error.subject(),
                        reason = %error.reason(),
                        "skipping unparseable commit"
                    );
                    failures.push(CommitFailure { index, error });
                }
            }
        }

        (commits, failures)
    }

    /// Plans the next release from `current` and a batch of messages.
    ///
    /// Unparseable messages do not abort planning; they are reported in
    /// [`ReleasePlan::failures`].
    ///
    /// # Errors
    ///
    /// Returns an error if the next version cannot be represented.
    pub fn plan<I, S>(&self, current: SemanticVersion, messages: I) -> CoreResult<ReleasePlan>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (commits, failures) = self.parse_all(messages);

        let impact = commits
            .iter()
            .map(|commit| self.settings.impacts.classify(commit))
            .max()
            .unwrap_or_default();
        let next = self.settings.calculator.bump(current, impact)?;
        let changelog = aggregate(&commits, &self.settings.impacts, &self.settings.changelog);

        info!(
            parsed = commits.len(),
            failed = failures.len(),
            %impact,
            %current,
            %next,
            "planned release"
        );

        Ok(ReleasePlan {
            current,
            next,
            impact,
            changelog,
            parsed: commits.len(),
            failures,
        })
    }
}
