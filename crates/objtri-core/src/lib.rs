//! objtri-core - OBJ fixture preparation
//!
//! Rewrites Wavefront OBJ files into a minimal triangle-only form:
//! - keeps `v x y z` lines verbatim and in order
//! - drops texture-coordinate and normal references from faces
//! - splits quads into two triangles along the first-to-third diagonal
//! - drops faces with any other vertex count, with a warning
//!
//! ## Examples
//!
//! ```rust,no_run
//! use objtri_core::convert;
//!
//! let stats = convert("p2.obj", "p2_tri.obj")?;
//! println!("Vertices: {}", stats.vertex_count);
//! println!("Faces: {}", stats.face_count);
//! # Ok::<(), objtri_core::ObjTriError>(())
//! ```
//!
//! Converting in memory:
//!
//! ```rust
//! use objtri_core::{to_obj_string, ObjSource, TriangleMesh};
//!
//! let source = ObjSource::parse_str("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1/1 2/2 3/3 4/4\n");
//! let mesh = TriangleMesh::from_source(source);
//! let text = to_obj_string(&mesh, "quad");
//! assert!(text.ends_with("f 1 2 3\nf 1 3 4\n"));
//! ```

/// Tracing target of the per-face and missing-file warnings.
///
/// Binaries should keep this target enabled at `warn` whatever the global
/// filter says, since these warnings are the only report of dropped input.
pub const DIAGNOSTICS_TARGET: &str = "objtri::diagnostics";

pub mod batch;
pub mod config;
pub mod convert;
pub mod error;
pub mod mesh;
pub mod parser;
pub mod triangulate;
pub mod writer;

pub use batch::{program_dir, run_batch, BatchJob, BatchPlan, BatchReport};
pub use config::{load_config, Config, DEFAULT_BASES, DEFAULT_OUTPUT_SUFFIX};
pub use convert::{convert, convert_with, ConversionStats, ConvertOptions};
pub use error::{ObjTriError, Result};
pub use mesh::{SkippedFace, TriangleMesh};
pub use parser::{classify_line, Face, ObjLine, ObjSource};
pub use triangulate::{triangulate, triangulate_indices, Triangle, Triangulation};
pub use writer::{to_obj_string, write_obj, write_obj_file, DEFAULT_HEADER};
