//! State of the map drawing surface.
//!
//! The drawing surface builds and edits field boundaries vertex by vertex. Nothing in the layout engine looks at a
//! path while it is being drawn: a boundary reaches the engine only when [`DrawState::finish`] hands it over.

use std::mem;

use vinerow_types::GeoPoint2d;

use crate::field::{Field, FieldPolygon};

/// What the drawing surface is doing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DrawState {
    /// Nothing is being drawn or edited.
    #[default]
    Idle,
    /// A new field boundary is being drawn.
    Drawing {
        /// Vertices placed so far.
        path: Vec<GeoPoint2d>,
    },
    /// The boundary of an existing field is being edited.
    Editing {
        /// Identifier of the edited field.
        field_id: String,
        /// Working copy of the boundary.
        path: Vec<GeoPoint2d>,
    },
}

/// Boundary produced by finishing a drawing or an edit.
#[derive(Debug, Clone, PartialEq)]
pub enum FinishedShape {
    /// Boundary of a new field.
    NewField(FieldPolygon),
    /// New boundary of an existing field.
    EditedField {
        /// Identifier of the edited field.
        field_id: String,
        /// The edited boundary.
        polygon: FieldPolygon,
    },
}

impl DrawState {
    /// Starts drawing a new field, discarding any unfinished drawing or edit.
    pub fn start_drawing(&mut self) {
        *self = Self::Drawing { path: vec![] };
    }

    /// Starts editing the boundary of the `field`, discarding any unfinished drawing or edit.
    pub fn begin_edit(&mut self, field: &Field) {
        *self = Self::Editing {
            field_id: field.id.clone(),
            path: field.polygon.points.clone(),
        };
    }

    /// Vertices of the path being drawn or edited. Empty when idle.
    pub fn path(&self) -> &[GeoPoint2d] {
        match self {
            Self::Idle => &[],
            Self::Drawing { path } | Self::Editing { path, .. } => path,
        }
    }

    fn path_mut(&mut self) -> Option<&mut Vec<GeoPoint2d>> {
        match self {
            Self::Idle => None,
            Self::Drawing { path } | Self::Editing { path, .. } => Some(path),
        }
    }

    /// Appends a vertex to the path. Returns false when idle.
    pub fn add_vertex(&mut self, point: GeoPoint2d) -> bool {
        match self.path_mut() {
            Some(path) => {
                path.push(point);
                true
            }
            None => false,
        }
    }

    /// Moves the vertex at `index` to `point`. Returns false if there is no such vertex.
    pub fn move_vertex(&mut self, index: usize, point: GeoPoint2d) -> bool {
        match self.path_mut().and_then(|path| path.get_mut(index)) {
            Some(vertex) => {
                *vertex = point;
                true
            }
            None => false,
        }
    }

    /// Inserts `point` on the edge that starts at vertex `after`. Returns false if there is no such vertex.
    pub fn insert_vertex(&mut self, after: usize, point: GeoPoint2d) -> bool {
        match self.path_mut() {
            Some(path) if after < path.len() => {
                path.insert(after + 1, point);
                true
            }
            _ => false,
        }
    }

    /// Removes the vertex at `index`. Returns false if there is no such vertex.
    pub fn remove_vertex(&mut self, index: usize) -> bool {
        match self.path_mut() {
            Some(path) if index < path.len() => {
                path.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Finishes the drawing or the edit and returns to [`DrawState::Idle`].
    ///
    /// Returns `None` and keeps the current state if the path has less than 3 vertices, so the user can keep
    /// adding them.
    pub fn finish(&mut self) -> Option<FinishedShape> {
        if self.path().len() < 3 {
            return None;
        }

        match mem::take(self) {
            Self::Idle => None,
            Self::Drawing { path } => Some(FinishedShape::NewField(FieldPolygon::new(path))),
            Self::Editing { field_id, path } => Some(FinishedShape::EditedField {
                field_id,
                polygon: FieldPolygon::new(path),
            }),
        }
    }

    /// Drops the unfinished drawing or edit.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
