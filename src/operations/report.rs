use std::fmt;

use indexmap::IndexSet;

use crate::error::ClipError;
use crate::path::Warning;

/// A warning attributed to the shape that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeNotice {
    pub label: String,
    pub warning: Warning,
}

impl fmt::Display for ShapeNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.warning)
    }
}

/// What happened to one subject of a batch.
#[derive(Debug)]
pub enum SubjectOutcome {
    /// The subject was rewritten from `segments` clipped segments.
    Clipped { segments: usize },
    /// Nothing of the subject lies inside the boundary; the shape is unchanged.
    Empty,
    /// Clipping this subject failed; the shape is unchanged.
    Failed(ClipError),
}

/// Outcome of one subject, keyed by its label.
#[derive(Debug)]
pub struct SubjectReport {
    pub label: String,
    pub outcome: SubjectOutcome,
}

/// Everything a host needs to display after a batch finishes.
#[derive(Debug, Default)]
pub struct BatchReport {
    boundary: Option<String>,
    subjects: Vec<SubjectReport>,
    notices: IndexSet<ShapeNotice>,
}

impl BatchReport {
    pub(crate) fn set_boundary(&mut self, label: &str) {
        self.boundary = Some(label.to_owned());
    }

    pub(crate) fn notice(&mut self, label: &str, warning: Warning) {
        self.notices.insert(ShapeNotice {
            label: label.to_owned(),
            warning,
        });
    }

    pub(crate) fn record(&mut self, label: &str, outcome: SubjectOutcome) {
        self.subjects.push(SubjectReport {
            label: label.to_owned(),
            outcome,
        });
    }

    /// Label of the shape used as the boundary, if a path was found.
    #[must_use]
    pub fn boundary(&self) -> Option<&str> {
        self.boundary.as_deref()
    }

    /// Per-subject outcomes in selection order.
    #[must_use]
    pub fn subjects(&self) -> &[SubjectReport] {
        &self.subjects
    }

    /// Deduplicated warnings in first-occurrence order.
    pub fn notices(&self) -> impl Iterator<Item = &ShapeNotice> {
        self.notices.iter()
    }

    /// Subjects that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ClipError)> {
        self.subjects.iter().filter_map(|s| match &s.outcome {
            SubjectOutcome::Failed(err) => Some((s.label.as_str(), err)),
            SubjectOutcome::Clipped { .. } | SubjectOutcome::Empty => None,
        })
    }

    /// Number of subjects whose commands were rewritten.
    #[must_use]
    pub fn clipped_count(&self) -> usize {
        self.subjects
            .iter()
            .filter(|s| matches!(s.outcome, SubjectOutcome::Clipped { .. }))
            .count()
    }
}
