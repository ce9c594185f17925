pub mod shape;

pub use shape::{Shape, ShapeId, ShapeKind};

use crate::error::DocumentError;
use crate::path::PathCommand;
use slotmap::SlotMap;

/// Arena owning the shapes a host hands to a clipping batch.
///
/// Shapes are referenced by typed IDs (generational indices), so a
/// selection stays valid while paths are rewritten.
#[derive(Debug, Default)]
pub struct Drawing {
    shapes: SlotMap<ShapeId, Shape>,
}

impl Drawing {
    /// Creates a new, empty drawing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shape and returns its ID.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        self.shapes.insert(shape)
    }

    /// Returns a reference to the shape, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the drawing.
    pub fn shape(&self, id: ShapeId) -> Result<&Shape, DocumentError> {
        self.shapes
            .get(id)
            .ok_or_else(|| DocumentError::ShapeNotFound(format!("{id:?}")))
    }

    /// Replaces the drawing commands of a path shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not in the drawing or is not a path.
    pub fn set_commands(
        &mut self,
        id: ShapeId,
        commands: Vec<PathCommand>,
    ) -> Result<(), DocumentError> {
        let shape = self
            .shapes
            .get_mut(id)
            .ok_or_else(|| DocumentError::ShapeNotFound(format!("{id:?}")))?;
        match &mut shape.kind {
            ShapeKind::Path(existing) => {
                *existing = commands;
                Ok(())
            }
            ShapeKind::Group | ShapeKind::Other(_) => {
                Err(DocumentError::NotAPath(shape.label.clone()))
            }
        }
    }
}
