//! Span-precise scanner for coordinate tuples in statement lines
//!
//! Statements carry their coordinates in the first bracket group of the
//! line, either a single pair (`component Kettle [0.43, 0.35]`) or, for
//! repeated annotation occurrences, a bracketed list
//! (`annotation 1 [[0.38, 0.30], [0.41, 0.50]] text`). The scanner returns
//! byte spans so a rewrite can touch the matched tuple and nothing else;
//! trailing decorators such as `label [36, 6]` sit after the first group
//! and are never part of it.

use logos::Logos;

/// Byte range in a single line
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum Token {
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(",")]
    Comma,

    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Any other run of non-delimiter characters (keywords, names,
    // decorators) - lower priority so numeric slices lex as Number
    #[regex(r"[^\[\],\t\r\n ]+", priority = 1)]
    Word,
}

/// One `[visibility, maturity]` tuple with the byte span of its brackets.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordPair {
    /// Span of the bracket group, opening `[` through closing `]` inclusive
    pub span: Span,
    pub visibility: f64,
    pub maturity: f64,
}

/// The coordinate text found on a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Coords {
    /// A single `[v, m]` tuple
    Single(CoordPair),
    /// A `[[v,m],[v,m],...]` occurrence list; `span` covers the outer brackets
    List { span: Span, pairs: Vec<CoordPair> },
}

impl Coords {
    /// The tuple at the given occurrence index, if present.
    pub fn occurrence(&self, index: usize) -> Option<&CoordPair> {
        match self {
            Coords::Single(pair) => (index == 0).then_some(pair),
            Coords::List { pairs, .. } => pairs.get(index),
        }
    }

    /// Span of the whole coordinate group.
    pub fn span(&self) -> Span {
        match self {
            Coords::Single(pair) => pair.span.clone(),
            Coords::List { span, .. } => span.clone(),
        }
    }
}

/// Scan a line for its coordinate group.
///
/// Only the first bracket group is considered; if its contents are not a
/// well-formed tuple or tuple list, the line is treated as carrying no
/// coordinates.
pub fn scan_coords(line: &str) -> Option<Coords> {
    scan_coords_from(line, 0)
}

/// Scan starting at byte offset `from`; returned spans are offsets into the
/// full line.
pub fn scan_coords_from(line: &str, from: usize) -> Option<Coords> {
    let mut tokens = Token::lexer(&line[from..])
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, from + span.start..from + span.end)));

    // Advance to the first opening bracket.
    let open = loop {
        match tokens.next()? {
            (Token::BracketOpen, span) => break span,
            _ => continue,
        }
    };

    match tokens.next()? {
        // [v, m]
        (Token::Number(visibility), _) => {
            let (maturity, close) = finish_pair(&mut tokens)?;
            Some(Coords::Single(CoordPair {
                span: open.start..close.end,
                visibility,
                maturity,
            }))
        }
        // [[v,m],[v,m],...]
        (Token::BracketOpen, first_inner) => {
            let mut pairs = Vec::new();
            let mut inner_open = first_inner;
            loop {
                let (Token::Number(visibility), _) = tokens.next()? else {
                    return None;
                };
                let (maturity, inner_close) = finish_pair(&mut tokens)?;
                pairs.push(CoordPair {
                    span: inner_open.start..inner_close.end,
                    visibility,
                    maturity,
                });
                match tokens.next()? {
                    (Token::Comma, _) => match tokens.next()? {
                        (Token::BracketOpen, span) => inner_open = span,
                        _ => return None,
                    },
                    (Token::BracketClose, outer_close) => {
                        return Some(Coords::List {
                            span: open.start..outer_close.end,
                            pairs,
                        });
                    }
                    _ => return None,
                }
            }
        }
        _ => None,
    }
}

/// Consume `, <number> ]` and return the maturity with the closing span.
fn finish_pair(tokens: &mut impl Iterator<Item = (Token, Span)>) -> Option<(f64, Span)> {
    let (Token::Comma, _) = tokens.next()? else {
        return None;
    };
    let (Token::Number(maturity), _) = tokens.next()? else {
        return None;
    };
    let (Token::BracketClose, close) = tokens.next()? else {
        return None;
    };
    Some((maturity, close))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair() {
        let line = "component Kettle [0.43, 0.35]";
        let coords = scan_coords(line).unwrap();
        let Coords::Single(pair) = coords else {
            panic!("expected single pair");
        };
        assert_eq!(&line[pair.span.clone()], "[0.43, 0.35]");
        assert_eq!(pair.visibility, 0.43);
        assert_eq!(pair.maturity, 0.35);
    }

    #[test]
    fn test_no_coords() {
        assert_eq!(scan_coords("component Kettle"), None);
    }

    #[test]
    fn test_tight_spacing() {
        let line = "component Kettle [0.43,0.35]";
        let coords = scan_coords(line).unwrap();
        assert_eq!(&line[coords.span()], "[0.43,0.35]");
    }

    #[test]
    fn test_trailing_decorator_not_included() {
        let line = "component Kettle [0.43, 0.35] label [36, 6]";
        let coords = scan_coords(line).unwrap();
        assert_eq!(&line[coords.span()], "[0.43, 0.35]");
    }

    #[test]
    fn test_occurrence_list() {
        let line = "annotation 1 [[0.38, 0.30], [0.41, 0.50]] Standardising power";
        let coords = scan_coords(line).unwrap();
        let Coords::List { span, pairs } = &coords else {
            panic!("expected list");
        };
        assert_eq!(&line[span.clone()], "[[0.38, 0.30], [0.41, 0.50]]");
        assert_eq!(pairs.len(), 2);
        assert_eq!(&line[pairs[0].span.clone()], "[0.38, 0.30]");
        assert_eq!(&line[pairs[1].span.clone()], "[0.41, 0.50]");
        assert_eq!(pairs[1].visibility, 0.41);
        assert_eq!(pairs[1].maturity, 0.50);
    }

    #[test]
    fn test_occurrence_lookup() {
        let line = "annotation 2 [[0.1, 0.2], [0.3, 0.4]]";
        let coords = scan_coords(line).unwrap();
        assert!(coords.occurrence(0).is_some());
        assert!(coords.occurrence(1).is_some());
        assert!(coords.occurrence(2).is_none());
    }

    #[test]
    fn test_single_pair_occurrence_zero_only() {
        let coords = scan_coords("component a [0.1, 0.2]").unwrap();
        assert!(coords.occurrence(0).is_some());
        assert!(coords.occurrence(1).is_none());
    }

    #[test]
    fn test_malformed_group_is_no_coords() {
        assert_eq!(scan_coords("component Kettle [label: big]"), None);
        assert_eq!(scan_coords("component Kettle []"), None);
        assert_eq!(scan_coords("component Kettle [0.43]"), None);
        assert_eq!(scan_coords("component Kettle [0.43, 0.35"), None);
    }

    #[test]
    fn test_scan_from_offset() {
        let line = "component [odd name] [0.43, 0.35]";
        // Scanning past the name region finds the real tuple.
        let coords = scan_coords_from(line, 20).unwrap();
        assert_eq!(&line[coords.span()], "[0.43, 0.35]");
    }

    #[test]
    fn test_negative_coords() {
        let line = "note off-chart [-0.05, 1.10]";
        let coords = scan_coords(line).unwrap();
        let Coords::Single(pair) = coords else {
            panic!("expected single pair");
        };
        assert_eq!(pair.visibility, -0.05);
        assert_eq!(pair.maturity, 1.10);
    }
}
