//! Parsed commit type produced by the grammar parser.

use serde::Serialize;

use crate::{CommitType, Footer};

/// A commit message after parsing.
///
/// Only [`CommitParser`](crate::CommitParser) builds values of this type, so
/// a `ParsedCommit` always comes from a well-formed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommit {
    #[serde(rename = "type")]
    commit_type: CommitType,
    scope: Option<String>,
    description: String,
    body: Option<String>,
    footers: Vec<Footer>,
    exclamation_mark: bool,
    breaking: bool,
    #[serde(skip)]
    raw: String,
}

impl ParsedCommit {
    pub(crate) fn new(
        commit_type: CommitType,
        scope: Option<String>,
        description: String,
        body: Option<String>,
        footers: Vec<Footer>,
        exclamation_mark: bool,
        raw: String,
    ) -> Self {
        let breaking = exclamation_mark || footers.iter().any(Footer::is_breaking_change);
        Self {
            commit_type,
            scope,
            description,
            body,
            footers,
            exclamation_mark,
            breaking,
            raw,
        }
    }

    /// The commit type.
    #[must_use]
    pub fn commit_type(&self) -> &CommitType {
        &self.commit_type
    }

    /// The optional scope.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// The subject text after `: `.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The body, with its line order preserved.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The footers, in message order.
    #[must_use]
    pub fn footers(&self) -> &[Footer] {
        &self.footers
    }

    /// Returns the first footer with the given token.
    #[must_use]
    pub fn footer(&self, token: &str) -> Option<&Footer> {
        self.footers.iter().find(|f| f.token() == token)
    }

    /// Returns true if the header carries `!` before the `:`.
    #[must_use]
    pub fn has_exclamation_mark(&self) -> bool {
        self.exclamation_mark
    }

    /// Returns true if the header has `!` or a footer announces a breaking change.
    #[must_use]
    pub fn is_breaking(&self) -> bool {
        self.breaking
    }

    /// Returns the text of the first breaking-change footer, if any.
    #[must_use]
    pub fn breaking_description(&self) -> Option<&str> {
        self.footers
            .iter()
            .find(|f| f.is_breaking_change())
            .map(Footer::value)
    }

    /// The original message this commit was parsed from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Renders the header line: `type(scope)!: description`.
    #[must_use]
    pub fn header(&self) -> String {
        let mut header = self.commit_type.to_string();
        if let Some(scope) = &self.scope {
            header.push('(');
            header.push_str(scope);
            header.push(')');
        }
        if self.exclamation_mark {
            header.push('!');
        }
        header.push_str(": ");
        header.push_str(&self.description);
        header
    }

    /// Renders the commit back into message form.
    ///
    /// Parsing the result yields a commit equal to this one apart from
    /// [`raw`](Self::raw).
    #[must_use]
    pub fn to_message(&self) -> String {
        let mut message = self.header();
        if let Some(body) = &self.body {
            message.push_str("\n\n");
            message.push_str(body);
        }
        if !self.footers.is_empty() {
            message.push_str("\n\n");
            let footers: Vec<String> = self.footers.iter().map(ToString::to_string).collect();
            message.push_str(&footers.join("\n"));
        }
        message
    }

    /// Compares every parsed field, ignoring the retained raw message.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.commit_type == other.commit_type
            && self.scope == other.scope
            && self.description == other.description
            && self.body == other.body
            && self.footers == other.footers
            && self.exclamation_mark == other.exclamation_mark
    }
}
