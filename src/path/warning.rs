use std::fmt;

use indexmap::IndexSet;

/// A non-fatal condition noticed while clipping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Warning {
    /// A curve was replaced by a straight segment to its end point.
    CurveApproximated,
    /// A drawing command the segmenter does not understand; the pen stays put.
    UnsupportedCommand(char),
    /// A subject lies entirely outside the boundary and was left unchanged.
    EmptyResult,
    /// A group was selected; its children are not inspected.
    SkippedGroup,
    /// A selected shape is not a path.
    SkippedNonPath { kind: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurveApproximated => write!(f, "curve approximated as straight segment"),
            Self::UnsupportedCommand(kind) => write!(f, "unsupported command kind: {kind}"),
            Self::EmptyResult => write!(f, "clipped to nothing, will not be updated"),
            Self::SkippedGroup => write!(f, "group will be ignored, ungroup before clipping"),
            Self::SkippedNonPath { kind } => {
                write!(f, "object of type {kind:?} is not a path and will be ignored")
            }
        }
    }
}

/// Deduplicating collection of warnings that remembers first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningSet {
    warnings: IndexSet<Warning>,
}

impl WarningSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning. Returns `false` if an equal warning was already present.
    pub fn insert(&mut self, warning: Warning) -> bool {
        self.warnings.insert(warning)
    }

    #[must_use]
    pub fn contains(&self, warning: &Warning) -> bool {
        self.warnings.contains(warning)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Iterates in first-occurrence order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, Warning> {
        self.warnings.iter()
    }
}

impl<'a> IntoIterator for &'a WarningSet {
    type Item = &'a Warning;
    type IntoIter = indexmap::set::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.iter()
    }
}
