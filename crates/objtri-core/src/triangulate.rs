//! Triangle and quad handling
//!
//! Only two face shapes are supported. Triangles pass through untouched and
//! quads are split along the diagonal from their first vertex:
//!
//! ```text
//! (v1, v2, v3, v4) -> (v1, v2, v3) + (v1, v3, v4)
//! ```
//!
//! The split assumes a convex, planar quad. No geometric check is made, so a
//! concave or twisted quad yields overlapping triangles.

use std::fmt;

use crate::parser::Face;

/// A triangle referencing three vertex indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triangle(pub [String; 3]);

impl Triangle {
    /// Build a triangle from three index tokens.
    #[must_use]
    pub fn new(a: &str, b: &str, c: &str) -> Self {
        Self([a.to_string(), b.to_string(), c.to_string()])
    }

    /// The three vertex indices in winding order.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[String; 3] {
        &self.0
    }
}

/// Formats as an OBJ face line: `f i j k`
impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.0;
        write!(f, "f {a} {b} {c}")
    }
}

/// What a source face becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Triangulation {
    /// Source face was already a triangle
    Triangle(Triangle),
    /// Source face was a quad, split into two triangles in fan order
    Quad(Triangle, Triangle),
    /// Any other vertex count; the face is dropped
    Unsupported {
        /// Number of vertex references on the face
        vertex_count: usize,
    },
}

impl Triangulation {
    /// Number of triangles this outcome contributes to the output.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        match self {
            Self::Triangle(_) => 1,
            Self::Quad(..) => 2,
            Self::Unsupported { .. } => 0,
        }
    }
}

/// Triangulate a list of vertex indices.
#[must_use]
pub fn triangulate_indices<S: AsRef<str>>(indices: &[S]) -> Triangulation {
    match indices {
        [a, b, c] => Triangulation::Triangle(Triangle::new(a.as_ref(), b.as_ref(), c.as_ref())),
        [a, b, c, d] => {
            let (a, b, c, d) = (a.as_ref(), b.as_ref(), c.as_ref(), d.as_ref());
            Triangulation::Quad(Triangle::new(a, b, c), Triangle::new(a, c, d))
        }
        other => Triangulation::Unsupported {
            vertex_count: other.len(),
        },
    }
}

/// Triangulate a parsed face.
#[inline]
#[must_use]
pub fn triangulate(face: &Face) -> Triangulation {
    triangulate_indices(&face.indices)
}
