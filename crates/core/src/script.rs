//! SQL script decomposition.
//!
//! A script is turned into executable units in two passes: [`strip`] removes
//! `--` line comments and `/* ... */` block comments, then [`split`] cuts the
//! remaining text on every `;`. Neither pass knows about string literals, so
//! a `;`, `--` or `/*` inside a quoted value is treated like any other.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Character that ends a statement.
pub const TERMINATOR: char = ';';

// Anchored to the start of a line; indented markers are left alone.
// CRLF mode keeps `\r` out of the match so Windows line endings survive.
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^--.*$").expect("valid regex"));

// Non-greedy: the first `*/` after an opening `/*` closes the comment.
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));

// ── Statement ────────────────────────────────────────────────────

/// One executable unit of SQL: trimmed, non-empty, free of the terminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement(String);

impl Statement {
    /// Build a statement from raw text.
    ///
    /// Returns `None` when the text is blank after trimming or still contains
    /// the terminator.
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.contains(TERMINATOR) {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The statement cut to at most `max_chars` characters, with `...`
    /// appended when anything was cut.
    pub fn preview(&self, max_chars: usize) -> String {
        match self.0.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => format!("{}...", &self.0[..byte_idx]),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Statement {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Statement {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Statement {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ── Decomposition ────────────────────────────────────────────────

/// Remove every line comment and block comment from `text`.
///
/// Line comments are removed first. Everything outside the removed ranges,
/// newlines included, is kept in place.
pub fn strip(text: &str) -> String {
    let without_lines = LINE_COMMENT.replace_all(text, "");
    BLOCK_COMMENT.replace_all(&without_lines, "").into_owned()
}

/// Partition comment-free text into statements, in source order.
///
/// Pieces between terminators are trimmed and blank pieces are dropped. A
/// non-blank piece after the last terminator is a statement too, so text
/// with no terminator at all yields one statement. The text is expected to
/// have gone through [`strip`] already.
pub fn split(text: &str) -> Vec<Statement> {
    text.split(TERMINATOR).filter_map(Statement::new).collect()
}

/// Strip comments from a whole script and split it into statements.
pub fn parse_script(content: &str) -> Vec<Statement> {
    let statements = split(&strip(content));
    debug!(
        statements = statements.len(),
        bytes = content.len(),
        "Parsed SQL script"
    );
    statements
}

// ── Tests ────────────────────────────────────────────────────────
