//! Element kinds and the identity keys used to locate them in map text

use std::fmt;

/// The DSL keyword space of map elements whose positions can be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Component,
    Anchor,
    Market,
    Ecosystem,
    Submap,
    Note,
    Annotation,
    /// The shared annotations box; at most one exists per map.
    Annotations,
    Pipeline,
    Accelerator,
    Deaccelerator,
}

impl ElementKind {
    /// The statement keyword that introduces this kind in map text.
    pub fn keyword(&self) -> &'static str {
        match self {
            ElementKind::Component => "component",
            ElementKind::Anchor => "anchor",
            ElementKind::Market => "market",
            ElementKind::Ecosystem => "ecosystem",
            ElementKind::Submap => "submap",
            ElementKind::Note => "note",
            ElementKind::Annotation => "annotation",
            ElementKind::Annotations => "annotations",
            ElementKind::Pipeline => "pipeline",
            ElementKind::Accelerator => "accelerator",
            ElementKind::Deaccelerator => "deaccelerator",
        }
    }

    /// Parse a statement keyword back to a kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "component" => Some(ElementKind::Component),
            "anchor" => Some(ElementKind::Anchor),
            "market" => Some(ElementKind::Market),
            "ecosystem" => Some(ElementKind::Ecosystem),
            "submap" => Some(ElementKind::Submap),
            "note" => Some(ElementKind::Note),
            "annotation" => Some(ElementKind::Annotation),
            "annotations" => Some(ElementKind::Annotations),
            "pipeline" => Some(ElementKind::Pipeline),
            "accelerator" => Some(ElementKind::Accelerator),
            "deaccelerator" => Some(ElementKind::Deaccelerator),
            _ => None,
        }
    }

    /// Kinds that ride a fixed evolution band: their visibility axis is
    /// locked during drags and only maturity is editable.
    pub fn visibility_locked(&self) -> bool {
        matches!(self, ElementKind::Accelerator | ElementKind::Deaccelerator)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The key used to locate an element's statement line in map text.
///
/// Most elements are addressed by kind plus name. Kinds of which at most one
/// instance exists (the annotations box) need no name. Elements whose names
/// are not unique keys (notes) are addressed by the source line index
/// captured when the element was created, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementIdentity {
    Named { kind: ElementKind, name: String },
    Singleton { kind: ElementKind },
    Line { line: usize },
}

impl ElementIdentity {
    pub fn named(kind: ElementKind, name: impl Into<String>) -> Self {
        ElementIdentity::Named {
            kind,
            name: name.into(),
        }
    }

    pub fn singleton(kind: ElementKind) -> Self {
        ElementIdentity::Singleton { kind }
    }

    pub fn line(line: usize) -> Self {
        ElementIdentity::Line { line }
    }
}

impl fmt::Display for ElementIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementIdentity::Named { kind, name } => write!(f, "{} '{}'", kind, name),
            ElementIdentity::Singleton { kind } => write!(f, "{} (singleton)", kind),
            ElementIdentity::Line { line } => write!(f, "line {}", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        let kinds = [
            ElementKind::Component,
            ElementKind::Anchor,
            ElementKind::Market,
            ElementKind::Ecosystem,
            ElementKind::Submap,
            ElementKind::Note,
            ElementKind::Annotation,
            ElementKind::Annotations,
            ElementKind::Pipeline,
            ElementKind::Accelerator,
            ElementKind::Deaccelerator,
        ];
        for kind in kinds {
            assert_eq!(ElementKind::from_keyword(kind.keyword()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_keyword() {
        assert_eq!(ElementKind::from_keyword("evolve"), None);
    }

    #[test]
    fn test_visibility_locked_kinds() {
        assert!(ElementKind::Accelerator.visibility_locked());
        assert!(ElementKind::Deaccelerator.visibility_locked());
        assert!(!ElementKind::Component.visibility_locked());
    }

    #[test]
    fn test_identity_display() {
        let id = ElementIdentity::named(ElementKind::Component, "Kettle");
        assert_eq!(id.to_string(), "component 'Kettle'");
        assert_eq!(
            ElementIdentity::singleton(ElementKind::Annotations).to_string(),
            "annotations (singleton)"
        );
        assert_eq!(ElementIdentity::line(7).to_string(), "line 7");
    }
}
