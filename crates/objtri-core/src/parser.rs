//! OBJ read pass
//!
//! Classifies each physical line of an OBJ file. Vertex position lines are
//! kept verbatim, face lines are reduced to their vertex indices, and every
//! other record (comments, groups, materials, `vn`, `vt`, blank lines) is
//! skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{ObjTriError, Result};

/// A face as read from the source, before triangulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// 1-based line number in the source file
    pub line: usize,
    /// Vertex indices with any `/vt/vn` suffix removed, kept as text
    pub indices: Vec<String>,
}

/// Everything the read pass keeps from an OBJ file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjSource {
    /// Vertex lines (`v x y z`), trimmed, in input order
    pub vertices: Vec<String>,
    /// Faces in input order
    pub faces: Vec<Face>,
}

/// Classification of a single trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjLine<'a> {
    /// `v x y z` with exactly three components
    Vertex(&'a str),
    /// `f ...` with the extracted vertex indices
    Face(Vec<&'a str>),
    /// Anything else
    Ignored,
}

/// Returns the remainder of `line` if it starts with the keyword `tag`
/// followed by whitespace.
fn keyword_body<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    line.strip_prefix(tag)
        .filter(|rest| rest.starts_with(char::is_whitespace))
}

/// Vertex index of a face reference: `v`, `v/vt`, `v/vt/vn` or `v//vn`.
#[inline]
#[must_use]
pub fn vertex_index(reference: &str) -> &str {
    match reference.find('/') {
        Some(slash) => &reference[..slash],
        None => reference,
    }
}

/// Classify one line of OBJ text. Leading and trailing whitespace is ignored.
#[must_use]
pub fn classify_line(raw: &str) -> ObjLine<'_> {
    let line = raw.trim();

    if let Some(body) = keyword_body(line, "v") {
        if body.split_whitespace().count() == 3 {
            return ObjLine::Vertex(line);
        }
        debug!(line, "dropping vertex line without exactly three components");
        return ObjLine::Ignored;
    }

    if let Some(body) = keyword_body(line, "f") {
        return ObjLine::Face(body.split_whitespace().map(vertex_index).collect());
    }

    ObjLine::Ignored
}

impl ObjSource {
    fn push_line(&mut self, line_no: usize, line: &str) {
        match classify_line(line) {
            ObjLine::Vertex(v) => self.vertices.push(v.to_string()),
            ObjLine::Face(indices) => self.faces.push(Face {
                line: line_no,
                indices: indices.into_iter().map(str::to_string).collect(),
            }),
            ObjLine::Ignored => {}
        }
    }

    /// Parse OBJ text from any buffered reader.
    ///
    /// `origin` is only used to label read errors.
    ///
    /// # Errors
    ///
    /// Returns [`ObjTriError::Read`] if a line cannot be read, including when
    /// the content is not valid UTF-8.
    pub fn parse_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut source = Self::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| ObjTriError::read(origin, e))?;
            source.push_line(idx + 1, &line);
        }

        Ok(source)
    }

    /// Parse OBJ text held in memory.
    #[must_use]
    pub fn parse_str(text: &str) -> Self {
        let mut source = Self::default();

        for (idx, line) in text.lines().enumerate() {
            source.push_line(idx + 1, line);
        }

        source
    }

    /// Open and parse an OBJ file.
    ///
    /// The file handle is dropped before this returns, on success or error.
    ///
    /// # Errors
    ///
    /// Returns [`ObjTriError::Read`] if the file cannot be opened or read.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ObjTriError::read(path, e))?;
        Self::parse_reader(BufReader::new(file), path)
    }
}
