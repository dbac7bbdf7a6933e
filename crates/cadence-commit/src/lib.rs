//! Commit types for Cadence.
//!
//! This crate provides the commit message grammar and the values it produces:
//! - [`CommitParser`]: Turns a raw message into a [`ParsedCommit`] or a [`ParseError`]
//! - [`ParsedCommit`]: A commit message after parsing
//! - [`CommitType`] / [`TypeSet`]: The recognized commit types
//! - [`ChangeImpact`]: The effect of a commit on the next version

mod commit_type;
mod error;
mod footer;
mod impact;
mod parsed;
mod parser;

pub use commit_type::{CommitType, TypeSet};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use footer::{BREAKING_CHANGE, BREAKING_CHANGE_ALIAS, Footer, FooterSeparator};
pub use impact::ChangeImpact;
pub use parsed::ParsedCommit;
pub use parser::CommitParser;
