//! Chain-of-responsibility position update engine
//!
//! One engine invocation is a pure function `(text, identity, position) ->
//! text'`: walk the document's lines in order, probe each line with the
//! chained matchers, and rewrite the first line any matcher claims. Every
//! other line, including its terminator, comes back byte-identical. A missing
//! match is a no-op, not an error; whether to synthesize a new line is the
//! caller's policy.

use crate::editing::matchers::{
    ExistingCoordsMatcher, LineMatcher, LineNumberMatcher, MatchResult, NotDefinedCoordsMatcher,
    SingletonMatcher,
};
use crate::elements::ElementIdentity;
use crate::geometry::{format_coord, LogicalPosition};

/// What an update did to the document.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// The full reconstructed text. Equal to the input when nothing matched.
    pub text: String,
    /// The rewritten line, or `None` for a no-op.
    pub changed: Option<Change>,
}

/// Details of the single rewritten line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change {
    /// Zero-based index of the rewritten line
    pub line: usize,
    /// The coordinates the tuple held before the rewrite; `None` when a
    /// tuple was inserted into a bare declaration
    pub previous: Option<LogicalPosition>,
}

/// Ordered list of matching strategies with first-match-wins semantics.
pub struct PositionUpdateEngine {
    matchers: Vec<Box<dyn LineMatcher>>,
}

impl PositionUpdateEngine {
    /// Engine with the standard chain: existing coordinates, bare
    /// declaration, kind singleton, line number.
    pub fn new() -> Self {
        Self::with_matchers(vec![
            Box::new(ExistingCoordsMatcher),
            Box::new(NotDefinedCoordsMatcher),
            Box::new(SingletonMatcher),
            Box::new(LineNumberMatcher),
        ])
    }

    /// Engine with a custom chain, evaluated in the given order.
    pub fn with_matchers(matchers: Vec<Box<dyn LineMatcher>>) -> Self {
        Self { matchers }
    }

    /// Move an element to `position`, rewriting occurrence 0 of its tuple.
    pub fn update(
        &self,
        text: &str,
        identity: &ElementIdentity,
        position: LogicalPosition,
    ) -> UpdateOutcome {
        self.update_occurrence(text, identity, 0, position)
    }

    /// Move occurrence `occurrence` of an element's coordinate list.
    ///
    /// For single-tuple lines only occurrence 0 exists. An out-of-range
    /// occurrence on a matched line is a no-op.
    pub fn update_occurrence(
        &self,
        text: &str,
        identity: &ElementIdentity,
        occurrence: usize,
        position: LogicalPosition,
    ) -> UpdateOutcome {
        let mut out = String::with_capacity(text.len() + 16);
        let mut changed = None;
        let mut lines = split_lines(text);

        for (index, (content, terminator)) in lines.by_ref().enumerate() {
            match self.probe_chain(content, identity, index) {
                MatchResult::NoMatch => {
                    out.push_str(content);
                    out.push_str(terminator);
                }
                MatchResult::Existing { coords, current } => {
                    match coords.occurrence(occurrence) {
                        Some(pair) => {
                            out.push_str(&content[..pair.span.start]);
                            out.push_str(&serialize_position(position));
                            out.push_str(&content[pair.span.end..]);
                            changed = Some(Change {
                                line: index,
                                previous: Some(current),
                            });
                        }
                        None => out.push_str(content),
                    }
                    out.push_str(terminator);
                    break;
                }
                MatchResult::Bare { insert_at } => {
                    out.push_str(&content[..insert_at]);
                    out.push(' ');
                    out.push_str(&serialize_position(position));
                    out.push_str(&content[insert_at..]);
                    out.push_str(terminator);
                    changed = Some(Change {
                        line: index,
                        previous: None,
                    });
                    break;
                }
            }
        }

        // First match wins: later structurally matchable lines stay untouched.
        for (content, terminator) in lines {
            out.push_str(content);
            out.push_str(terminator);
        }

        UpdateOutcome { text: out, changed }
    }

    fn probe_chain(&self, line: &str, identity: &ElementIdentity, index: usize) -> MatchResult {
        for matcher in &self.matchers {
            let result = matcher.probe(line, identity, index);
            if result.is_match() {
                return result;
            }
        }
        MatchResult::NoMatch
    }
}

impl Default for PositionUpdateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a position as DSL tuple text: `[visibility, maturity]`, both
/// fixed to 2 decimals.
pub fn serialize_position(position: LogicalPosition) -> String {
    format!(
        "[{}, {}]",
        format_coord(position.visibility),
        format_coord(position.maturity)
    )
}

/// Split into `(content, terminator)` pairs, preserving `\n` / `\r\n` and
/// the absence of a final newline.
fn split_lines(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.split_inclusive('\n').map(|raw| {
        if let Some(content) = raw.strip_suffix("\r\n") {
            (content, "\r\n")
        } else if let Some(content) = raw.strip_suffix('\n') {
            (content, "\n")
        } else {
            (raw, "")
        }
    })
}
