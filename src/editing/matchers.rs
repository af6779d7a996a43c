//! Line matching strategies
//!
//! Each strategy probes one candidate line against an element identity and
//! reports whether that line is "the" line carrying the element's
//! coordinates, and if so how its text must change. Probes are tri-state
//! values, never errors: malformed text simply fails to match.

use crate::editing::scan::{scan_coords, scan_coords_from, Coords};
use crate::elements::ElementIdentity;
use crate::geometry::LogicalPosition;

/// Outcome of probing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    NoMatch,
    /// The line carries a coordinate group for this identity; rewrite in
    /// place. `current` is the position of the first tuple in the group.
    Existing {
        coords: Coords,
        current: LogicalPosition,
    },
    /// The line declares the element but has no coordinates; a serialized
    /// tuple must be inserted at byte offset `insert_at`.
    Bare { insert_at: usize },
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        !matches!(self, MatchResult::NoMatch)
    }
}

/// A single strategy in the position update chain.
pub trait LineMatcher {
    fn probe(&self, line: &str, identity: &ElementIdentity, line_index: usize) -> MatchResult;
}

/// Matches a named declaration that already carries coordinates.
pub struct ExistingCoordsMatcher;

impl LineMatcher for ExistingCoordsMatcher {
    fn probe(&self, line: &str, identity: &ElementIdentity, _line_index: usize) -> MatchResult {
        let ElementIdentity::Named { kind, name } = identity else {
            return MatchResult::NoMatch;
        };
        let Some(after_name) = declaration_prefix(line, kind.keyword(), name) else {
            return MatchResult::NoMatch;
        };
        match scan_coords_from(line, after_name) {
            Some(coords) => existing(coords),
            None => MatchResult::NoMatch,
        }
    }
}

/// Matches a named declaration with no coordinate tuple at all; the engine
/// appends one immediately after the name token.
pub struct NotDefinedCoordsMatcher;

impl LineMatcher for NotDefinedCoordsMatcher {
    fn probe(&self, line: &str, identity: &ElementIdentity, _line_index: usize) -> MatchResult {
        let ElementIdentity::Named { kind, name } = identity else {
            return MatchResult::NoMatch;
        };
        let Some(after_name) = declaration_prefix(line, kind.keyword(), name) else {
            return MatchResult::NoMatch;
        };
        match scan_coords_from(line, after_name) {
            Some(_) => MatchResult::NoMatch,
            None => MatchResult::Bare {
                insert_at: after_name,
            },
        }
    }
}

/// Matches the first line of a kind regardless of name, for at-most-one
/// elements such as the annotations box. Never synthesizes a line when none
/// matches; chaining to a fallback is the caller's business.
pub struct SingletonMatcher;

impl LineMatcher for SingletonMatcher {
    fn probe(&self, line: &str, identity: &ElementIdentity, _line_index: usize) -> MatchResult {
        let ElementIdentity::Singleton { kind } = identity else {
            return MatchResult::NoMatch;
        };
        let Some(after_keyword) = keyword_prefix(line, kind.keyword()) else {
            return MatchResult::NoMatch;
        };
        match scan_coords_from(line, after_keyword) {
            Some(coords) => existing(coords),
            None => MatchResult::Bare {
                insert_at: after_keyword,
            },
        }
    }
}

/// Matches by exact originating line index, for elements whose names are not
/// unique keys (notes). The index is captured at element creation and passed
/// through unchanged.
pub struct LineNumberMatcher;

impl LineMatcher for LineNumberMatcher {
    fn probe(&self, line: &str, identity: &ElementIdentity, line_index: usize) -> MatchResult {
        let ElementIdentity::Line { line: wanted } = identity else {
            return MatchResult::NoMatch;
        };
        if line_index != *wanted {
            return MatchResult::NoMatch;
        }
        match scan_coords(line) {
            Some(coords) => existing(coords),
            // No name token to anchor on; append at end of content.
            None => MatchResult::Bare {
                insert_at: line.trim_end().len(),
            },
        }
    }
}

fn existing(coords: Coords) -> MatchResult {
    // The first tuple stands for the element's current position; occurrence
    // selection happens in the engine. Scanned groups always hold at least
    // one pair.
    let current = match coords.occurrence(0) {
        Some(first) => LogicalPosition::new(first.maturity, first.visibility),
        None => return MatchResult::NoMatch,
    };
    MatchResult::Existing { coords, current }
}

/// Byte offset just past `<keyword> <name>` if the line (modulo leading
/// whitespace) starts with it at a token boundary.
fn declaration_prefix(line: &str, keyword: &str, name: &str) -> Option<usize> {
    let after_keyword = keyword_prefix(line, keyword)?;
    let rest = &line[after_keyword..];
    let ws = rest.len() - rest.trim_start().len();
    if ws == 0 {
        return None;
    }
    let name_start = after_keyword + ws;
    let rest = &line[name_start..];
    if !rest.starts_with(name) {
        return None;
    }
    let after_name = name_start + name.len();
    at_token_boundary(line, after_name).then_some(after_name)
}

/// Byte offset just past `<keyword>` if the line starts with it at a token
/// boundary (leading whitespace ignored).
fn keyword_prefix(line: &str, keyword: &str) -> Option<usize> {
    let start = line.len() - line.trim_start().len();
    let rest = &line[start..];
    if !rest.starts_with(keyword) {
        return None;
    }
    let end = start + keyword.len();
    at_token_boundary(line, end).then_some(end)
}

/// True when the byte offset ends a token: end of line, whitespace, or an
/// opening bracket.
fn at_token_boundary(line: &str, offset: usize) -> bool {
    match line[offset..].chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || c == '[',
    }
}
