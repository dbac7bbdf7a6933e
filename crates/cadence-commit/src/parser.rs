//! Conventional commit grammar parser.
//!
//! ```text
//! <message> ::= <header> [ <blank> <body> ] [ <blank> <footers> ]
//! <header>  ::= <type> [ "(" <scope> ")" ] [ "!" ] ": " <description>
//! <footer>  ::= <token> ( ": " | " #" ) <value>
//! <token>   ::= "BREAKING CHANGE" | [A-Z-]+
//! ```
//!
//! The footer block is the maximal trailing run of footer-shaped lines. It
//! must form a whole paragraph: a footer-shaped line glued to body text, or a
//! footer paragraph interrupted by ordinary text, is a `MalformedFooter`.

use crate::{Footer, ParseError, ParseResult, ParsedCommit, TypeSet};

/// Parses commit messages against a set of enabled types.
#[derive(Debug, Clone, Default)]
pub struct CommitParser {
    types: TypeSet,
}

/// Header fields borrowed from the first line.
struct Header<'a> {
    type_name: &'a str,
    scope: Option<&'a str>,
    exclamation_mark: bool,
    description: &'a str,
}

/// A footer block problem: 1-based line number and reason.
type FooterProblem = (usize, String);

impl CommitParser {
    /// Creates a parser accepting the given types.
    #[must_use]
    pub fn new(types: TypeSet) -> Self {
        Self { types }
    }

    /// Returns the enabled types.
    #[must_use]
    pub fn types(&self) -> &TypeSet {
        &self.types
    }

    /// Parses one raw commit message.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedHeader`] if the first line does not follow
    /// the header grammar or is not followed by a blank line,
    /// [`ParseError::UnknownType`] if the type is not enabled, and
    /// [`ParseError::MalformedFooter`] if the footer block is invalid.
    pub fn parse(&self, raw: &str) -> ParseResult<ParsedCommit> {
        let lines: Vec<&str> = raw.lines().collect();
        let header_line = lines.first().copied().unwrap_or_default();

        let header =
            parse_header(header_line).map_err(|reason| ParseError::malformed_header(raw, reason))?;

        let commit_type = self
            .types
            .resolve(header.type_name)
            .ok_or_else(|| ParseError::unknown_type(raw, header.type_name))?;

        let rest = lines.get(1..).unwrap_or_default();
        if rest.first().is_some_and(|line| !is_blank(line)) {
            return Err(ParseError::malformed_header(
                raw,
                "missing blank line after header",
            ));
        }

        let (body, footers) = split_body_and_footers(rest, 2)
            .map_err(|(line, reason)| ParseError::malformed_footer(raw, line, reason))?;

        Ok(ParsedCommit::new(
            commit_type,
            header.scope.map(str::to_string),
            header.description.to_string(),
            body,
            footers,
            header.exclamation_mark,
            raw.to_string(),
        ))
    }

    /// Returns true if the message parses.
    #[must_use]
    pub fn can_parse(&self, raw: &str) -> bool {
        self.parse(raw).is_ok()
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn parse_header(line: &str) -> Result<Header<'_>, String> {
    let type_end = line
        .find(|c: char| matches!(c, '(' | ')' | '!' | ':') || c.is_whitespace())
        .unwrap_or(line.len());
    let type_name = &line[..type_end];
    if type_name.is_empty() {
        return Err("missing commit type".to_string());
    }

    let mut rest = &line[type_end..];

    let mut scope = None;
    if let Some(after_open) = rest.strip_prefix('(') {
        let Some(close) = after_open.find(')') else {
            return Err("unclosed scope parenthesis".to_string());
        };
        let candidate = &after_open[..close];
        if candidate.is_empty() {
            return Err("empty scope".to_string());
        }
        if candidate.contains(|c: char| c == '(' || c.is_whitespace()) {
            return Err(format!(
                "scope `{candidate}` must not contain whitespace or parentheses"
            ));
        }
        scope = Some(candidate);
        rest = &after_open[close + 1..];
    }

    let exclamation_mark = match rest.strip_prefix('!') {
        Some(after) => {
            rest = after;
            true
        }
        None => false,
    };

    let Some(after_colon) = rest.strip_prefix(':') else {
        return Err("missing `:` separator after type".to_string());
    };
    let Some(description) = after_colon.strip_prefix(' ') else {
        return Err("missing space after `:`".to_string());
    };
    let description = description.trim();
    if description.is_empty() {
        return Err("empty description".to_string());
    }

    Ok(Header {
        type_name,
        scope,
        exclamation_mark,
        description,
    })
}

/// Splits the lines after the header into body and footers.
///
/// `first_line` is the 1-based line number of `lines[0]` in the raw message.
fn split_body_and_footers(
    lines: &[&str],
    first_line: usize,
) -> Result<(Option<String>, Vec<Footer>), FooterProblem> {
    let Some(start) = lines.iter().position(|line| !is_blank(line)) else {
        return Ok((None, Vec::new()));
    };
    let end = lines
        .iter()
        .rposition(|line| !is_blank(line))
        .map_or(start, |i| i + 1);
    let content = &lines[start..end];
    let line_number = |index: usize| first_line + start + index;

    let run_start = content
        .iter()
        .rposition(|line| !Footer::matches(line))
        .map_or(0, |i| i + 1);
    let paragraph_start = content
        .iter()
        .rposition(|line| is_blank(line))
        .map_or(0, |i| i + 1);

    let offending = Footer::matches(content[paragraph_start])
        .then(|| (paragraph_start..content.len()).find(|&i| !Footer::matches(content[i])))
        .flatten();
    if let Some(offending) = offending {
        return Err((
            line_number(offending),
            format!(
                "`{}` is not a valid footer line",
                content[offending].trim()
            ),
        ));
    }

    if run_start == content.len() {
        return Ok((Some(content.join("\n")), Vec::new()));
    }

    if run_start > paragraph_start {
        return Err((
            line_number(run_start),
            "footer block must be separated from the body by a blank line".to_string(),
        ));
    }

    let footers = content[run_start..]
        .iter()
        .filter_map(|line| Footer::parse_line(line))
        .collect();

    let body_lines = &content[..paragraph_start];
    let body_end = body_lines
        .iter()
        .rposition(|line| !is_blank(line))
        .map_or(0, |i| i + 1);
    let body = (body_end > 0).then(|| body_lines[..body_end].join("\n"));

    Ok((body, footers))
}
