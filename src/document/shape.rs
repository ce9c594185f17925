use crate::path::PathCommand;

slotmap::new_key_type! {
    /// Unique identifier for a shape in the drawing.
    pub struct ShapeId;
}

/// What a selected shape is, as far as clipping cares.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// An outline made of drawing commands.
    Path(Vec<PathCommand>),
    /// A container of other shapes. Its children are never clipped.
    Group,
    /// Any other object, named by its type.
    Other(String),
}

/// Data associated with a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Host-facing identifier used when reporting warnings and errors.
    pub label: String,
    pub kind: ShapeKind,
}

impl Shape {
    /// Creates a path shape.
    #[must_use]
    pub fn path(label: impl Into<String>, commands: Vec<PathCommand>) -> Self {
        Self {
            label: label.into(),
            kind: ShapeKind::Path(commands),
        }
    }

    /// Creates a group shape.
    #[must_use]
    pub fn group(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ShapeKind::Group,
        }
    }

    /// Creates a non-path shape of the named type.
    #[must_use]
    pub fn other(label: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ShapeKind::Other(kind.into()),
        }
    }

    /// Returns the drawing commands if this shape is a path.
    #[must_use]
    pub fn commands(&self) -> Option<&[PathCommand]> {
        match &self.kind {
            ShapeKind::Path(commands) => Some(commands),
            ShapeKind::Group | ShapeKind::Other(_) => None,
        }
    }
}
