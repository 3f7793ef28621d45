//! Single-file conversion: read, triangulate, write.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::mesh::{SkippedFace, TriangleMesh};
use crate::parser::ObjSource;
use crate::writer::{write_obj_file, DEFAULT_HEADER};

/// Knobs for a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Text of the leading comment line, without the `# ` prefix
    pub header: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

/// Summary of one converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionStats {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Vertex lines written (always equal to vertex lines read)
    pub vertex_count: usize,
    /// Triangle lines written
    pub face_count: usize,
    /// Source triangles passed through
    pub triangle_faces: usize,
    /// Source quads split in two
    pub quad_faces: usize,
    /// Source faces dropped for an unsupported vertex count
    pub skipped_faces: Vec<SkippedFace>,
}

/// Convert `input` into a triangle-only OBJ at `output` with default options.
///
/// The caller is expected to check that `input` exists.
///
/// # Errors
///
/// Returns [`ObjTriError::Read`](crate::ObjTriError::Read) if `input` cannot
/// be read and [`ObjTriError::Write`](crate::ObjTriError::Write) if `output`
/// cannot be written.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConversionStats> {
    convert_with(input, output, &ConvertOptions::default())
}

/// Like [`convert`], with explicit options.
///
/// # Errors
///
/// See [`convert`].
pub fn convert_with<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<ConversionStats> {
    let input = input.as_ref();
    let output = output.as_ref();

    let mesh = TriangleMesh::from_source(ObjSource::parse_file(input)?);
    write_obj_file(&mesh, &options.header, output)?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "converted"
    );

    Ok(ConversionStats {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        triangle_faces: mesh.triangle_faces,
        quad_faces: mesh.quad_faces,
        skipped_faces: mesh.skipped,
    })
}
