//! End-to-end conversion of fixture-style OBJ files on disk.

use std::fs;

use objtri_core::{convert, run_batch, BatchPlan, ConvertOptions, SkippedFace};
use tempfile::TempDir;

/// Cube exported with UVs and normals, six quad faces.
const CUBE_QUADS: &str = r"# Blender export
mtllib cube.mtl
o Cube
v 1.000000 1.000000 -1.000000
v 1.000000 -1.000000 -1.000000
v 1.000000 1.000000 1.000000
v 1.000000 -1.000000 1.000000
v -1.000000 1.000000 -1.000000
v -1.000000 -1.000000 -1.000000
v -1.000000 1.000000 1.000000
v -1.000000 -1.000000 1.000000
vt 0.625000 0.500000
vt 0.875000 0.500000
vt 0.875000 0.750000
vt 0.625000 0.750000
vn 0.0000 1.0000 0.0000
vn 0.0000 0.0000 1.0000
usemtl Material
s off
f 1/1/1 5/2/1 7/3/1 3/4/1
f 4/4/2 3/1/2 7/2/2 8/3/2
f 8/1/3 7/2/3 5/3/3 6/4/3
f 6/1/4 2/2/4 4/3/4 8/4/4
f 2/1/5 1/2/5 3/3/5 4/4/5
f 6/1/6 5/2/6 1/3/6 2/4/6
";

fn write_input(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).expect("Failed to write test OBJ");
}

#[test]
fn test_cube_quads_become_twelve_triangles() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "cube.obj", CUBE_QUADS);

    let stats = convert(dir.path().join("cube.obj"), dir.path().join("cube_tri.obj")).unwrap();
    assert_eq!(stats.vertex_count, 8);
    assert_eq!(stats.face_count, 12);
    assert_eq!(stats.quad_faces, 6);
    assert!(stats.skipped_faces.is_empty());

    let out = fs::read_to_string(dir.path().join("cube_tri.obj")).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "# Converted to triangle mesh (no texture/normals)");
    assert_eq!(lines[1], "v 1.000000 1.000000 -1.000000");
    assert_eq!(lines[9], "f 1 5 7");
    assert_eq!(lines[10], "f 1 7 3");
    assert_eq!(lines.len(), 1 + 8 + 12);
    // the header mentions texture/normals, so only the body is checked
    let body = &lines[1..];
    assert!(body.iter().all(|l| !l.contains('/')));
    assert!(body.iter().all(|l| l.starts_with("v ") || l.starts_with("f ")));
    assert!(!body.iter().any(|l| l.starts_with("vt") || l.starts_with("vn")));
    assert!(!body.iter().any(|l| l.starts_with("usemtl")));
}

#[test]
fn test_mixed_arity_file() {
    let dir = TempDir::new().unwrap();
    write_input(
        &dir,
        "mixed.obj",
        "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nv 0.5 1.5 0\n\
         f 1 2 3\n\
         f 1 2 3 4 5\n\
         f 2//1 3//1 4//1 1//1\n",
    );

    let stats = convert(dir.path().join("mixed.obj"), dir.path().join("mixed_tri.obj")).unwrap();
    assert_eq!(stats.face_count, 3);
    assert_eq!(stats.triangle_faces, 1);
    assert_eq!(stats.quad_faces, 1);
    assert_eq!(
        stats.skipped_faces,
        vec![SkippedFace {
            line: 7,
            vertex_count: 5
        }]
    );

    let out = fs::read_to_string(dir.path().join("mixed_tri.obj")).unwrap();
    let faces: Vec<&str> = out.lines().filter(|l| l.starts_with("f ")).collect();
    assert_eq!(faces, vec!["f 1 2 3", "f 2 3 4", "f 2 4 1"]);
}

#[test]
fn test_crlf_input() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "crlf.obj", "v 0 0 0\r\nv 1 0 0\r\nv 0 1 0\r\nf 1/1 2/2 3/3\r\n");

    convert(dir.path().join("crlf.obj"), dir.path().join("crlf_tri.obj")).unwrap();
    let out = fs::read_to_string(dir.path().join("crlf_tri.obj")).unwrap();
    assert_eq!(
        out,
        "# Converted to triangle mesh (no texture/normals)\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n"
    );
}

#[test]
fn test_default_batch_with_missing_p5() {
    let dir = TempDir::new().unwrap();
    for base in ["p2", "p3", "p4"] {
        write_input(&dir, &format!("{base}.obj"), CUBE_QUADS);
    }

    let plan = BatchPlan::new(dir.path()).with_bases(
        ["p2", "p3", "p4", "p5"]
            .iter()
            .map(ToString::to_string)
            .collect(),
    );
    let report = run_batch(&plan, &ConvertOptions::default(), |_| {}).unwrap();

    assert_eq!(report.converted.len(), 3);
    assert_eq!(report.missing, vec![dir.path().join("p5.obj")]);
    for base in ["p2", "p3", "p4"] {
        assert!(dir.path().join(format!("{base}_tri.obj")).exists());
    }
    assert!(!dir.path().join("p5_tri.obj").exists());
}
