//! OBJ write pass
//!
//! Output layout: one `#` comment line, then every vertex line verbatim, then
//! one `f i j k` line per triangle.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{ObjTriError, Result};
use crate::mesh::TriangleMesh;

/// Comment written on the first line of every converted file.
pub const DEFAULT_HEADER: &str = "Converted to triangle mesh (no texture/normals)";

/// Write `mesh` as OBJ text to `out`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_obj<W: Write>(mesh: &TriangleMesh, header: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "# {header}")?;
    for vertex in &mesh.vertices {
        writeln!(out, "{vertex}")?;
    }
    for triangle in &mesh.triangles {
        writeln!(out, "{triangle}")?;
    }
    Ok(())
}

/// Render `mesh` to a string.
#[must_use = "rendering returns the OBJ text"]
pub fn to_obj_string(mesh: &TriangleMesh, header: &str) -> String {
    let mut text = format!("# {header}\n");
    for vertex in &mesh.vertices {
        text.push_str(vertex);
        text.push('\n');
    }
    for triangle in &mesh.triangles {
        text.push_str(&triangle.to_string());
        text.push('\n');
    }
    text
}

/// Create (or truncate) `path` and write `mesh` into it.
///
/// The file is flushed before returning so late write failures are reported.
///
/// # Errors
///
/// Returns [`ObjTriError::Write`] if the file cannot be created or written.
pub fn write_obj_file<P: AsRef<Path>>(mesh: &TriangleMesh, header: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ObjTriError::write(path, e))?;
    let mut out = BufWriter::new(file);

    write_obj(mesh, header, &mut out)
        .and_then(|()| out.flush())
        .map_err(|e| ObjTriError::write(path, e))
}
