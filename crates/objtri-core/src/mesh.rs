//! Triangle-only mesh built from a parsed OBJ source.

use tracing::warn;

use crate::parser::ObjSource;
use crate::triangulate::{triangulate, Triangle, Triangulation};
use crate::DIAGNOSTICS_TARGET;

/// A face dropped because it is neither a triangle nor a quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedFace {
    /// 1-based line number in the source file
    pub line: usize,
    /// Number of vertex references the face had
    pub vertex_count: usize,
}

/// Vertices and triangles ready to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriangleMesh {
    /// Vertex lines, verbatim and in source order
    pub vertices: Vec<String>,
    /// Output triangles in source face order
    pub triangles: Vec<Triangle>,
    /// Source faces that were already triangles
    pub triangle_faces: usize,
    /// Source faces that were split from quads
    pub quad_faces: usize,
    /// Source faces that were dropped
    pub skipped: Vec<SkippedFace>,
}

impl TriangleMesh {
    /// Triangulate every face of `source`.
    ///
    /// Faces with an unsupported vertex count are logged and recorded in
    /// [`TriangleMesh::skipped`]; the rest of the source is still processed.
    #[must_use]
    pub fn from_source(source: ObjSource) -> Self {
        let outcomes: Vec<(usize, Triangulation)> = source
            .faces
            .iter()
            .map(|face| (face.line, triangulate(face)))
            .collect();

        let emitted = outcomes.iter().map(|(_, t)| t.triangle_count()).sum();

        let mut mesh = Self {
            vertices: source.vertices,
            triangles: Vec::with_capacity(emitted),
            ..Self::default()
        };

        for (line, outcome) in outcomes {
            match outcome {
                Triangulation::Triangle(tri) => {
                    mesh.triangle_faces += 1;
                    mesh.triangles.push(tri);
                }
                Triangulation::Quad(first, second) => {
                    mesh.quad_faces += 1;
                    mesh.triangles.push(first);
                    mesh.triangles.push(second);
                }
                Triangulation::Unsupported { vertex_count } => {
                    warn!(
                        target: DIAGNOSTICS_TARGET,
                        line,
                        "Skipping face with {vertex_count} vertices"
                    );
                    mesh.skipped.push(SkippedFace { line, vertex_count });
                }
            }
        }

        mesh
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.triangles.len()
    }
}
