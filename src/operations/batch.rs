use tracing::{debug, info, warn};

use crate::document::{Drawing, ShapeId, ShapeKind};
use crate::error::{BatchError, GeometryError, Result};
use crate::math::SegmentSet;
use crate::path::{build_commands, segment_commands, Warning};

use super::{BatchReport, Clip, ClipOptions, SubjectOutcome};

/// Clips every path of a selection against the topmost one.
///
/// The selection is ordered top to bottom. Groups and other non-path shapes
/// are reported and skipped. The first path becomes the boundary; each later
/// path is rewritten in place with the part of it lying inside the
/// boundary, as open polylines. Subjects that clip to nothing or fail keep
/// their original commands.
pub struct ClipBatch {
    selection: Vec<ShapeId>,
    options: ClipOptions,
}

impl ClipBatch {
    /// Creates a new `ClipBatch` over `selection`, topmost shape first.
    #[must_use]
    pub fn new(selection: Vec<ShapeId>, options: ClipOptions) -> Self {
        Self { selection, options }
    }

    /// Executes the batch, rewriting subjects in `drawing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection holds no path or if the boundary
    /// path is malformed. Missing shapes and failures of individual subjects
    /// are recorded in the report instead.
    pub fn execute(&self, drawing: &mut Drawing) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        let mut boundary: Option<SegmentSet> = None;

        for &id in &self.selection {
            let shape = match drawing.shape(id) {
                Ok(shape) => shape,
                Err(err) => {
                    let label = format!("{id:?}");
                    warn!(shape = %label, error = %err, "selected shape is missing");
                    report.record(&label, SubjectOutcome::Failed(err.into()));
                    continue;
                }
            };
            let label = shape.label.clone();
            let commands = match &shape.kind {
                ShapeKind::Path(commands) => commands,
                ShapeKind::Group => {
                    warn!(shape = %label, "skipping group");
                    report.notice(&label, Warning::SkippedGroup);
                    continue;
                }
                ShapeKind::Other(kind) => {
                    warn!(shape = %label, kind = %kind, "skipping non-path shape");
                    report.notice(&label, Warning::SkippedNonPath { kind: kind.clone() });
                    continue;
                }
            };

            let (segments, warnings) = segment_commands(commands);
            for warning in &warnings {
                report.notice(&label, warning.clone());
            }

            let Some(boundary) = &boundary else {
                if let Some(bad) = segments.first_malformed() {
                    return Err(BatchError::BoundaryMalformed {
                        label,
                        source: GeometryError::MalformedSegment {
                            from: bad.from,
                            to: bad.to,
                        },
                    }
                    .into());
                }
                debug!(shape = %label, segments = segments.len(), "boundary");
                report.set_boundary(&label);
                boundary = Some(segments);
                continue;
            };

            let outcome = match Clip::new(boundary, &self.options).execute(&segments) {
                Ok(clipped) if clipped.is_empty() => {
                    warn!(shape = %label, "clipped to nothing, leaving unchanged");
                    report.notice(&label, Warning::EmptyResult);
                    SubjectOutcome::Empty
                }
                Ok(clipped) => {
                    debug!(
                        shape = %label,
                        before = segments.len(),
                        after = clipped.len(),
                        "clipped"
                    );
                    let rebuilt = build_commands(&clipped, self.options.tolerance());
                    match drawing.set_commands(id, rebuilt) {
                        Ok(()) => SubjectOutcome::Clipped {
                            segments: clipped.len(),
                        },
                        Err(err) => SubjectOutcome::Failed(err.into()),
                    }
                }
                Err(err) => {
                    warn!(shape = %label, error = %err, "clipping failed");
                    SubjectOutcome::Failed(err)
                }
            };
            report.record(&label, outcome);
        }

        if report.boundary().is_none() {
            return Err(BatchError::NoBoundary.into());
        }

        info!(
            subjects = report.subjects().len(),
            clipped = report.clipped_count(),
            notices = report.notices().count(),
            "clip batch finished"
        );
        Ok(report)
    }
}
