//! Integration tests for shape requests and TOML manifests
//!
//! Exercises the public surface only: manifest parsing, dispatch to the
//! generators and the per-shape upload hints.

use geometry_gen::{BufferUsage, BuiltinMesh, ConeNormals, ConeOptions, MeshError, Shape, ShapeSet};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const MANIFEST: &str = r#"
[[mesh]]
id = "skydome"
shape = { kind = "sphere", radius = 1.0, rings = 24, slices = 32, lod_levels = 3 }

[[mesh]]
id = "terrain"
shape = { kind = "grid", width = 10.0, depth = 10.0, rows = 64, columns = 64 }

[[mesh]]
id = "crate"
shape = { kind = "cube" }

[[mesh]]
id = "post"
shape = { kind = "full_screen_quad" }

[[mesh]]
id = "pillar"
shape = { kind = "cylinder", height = 4.0, top_radius = 0.4, bottom_radius = 0.5, slices = 24, stacks = 6, lod_levels = 2 }

[[mesh]]
id = "marker"
shape = { kind = "cone", height = 1.0, radius = 0.25, slices = 16, options = { double_sided_base = false, normals = "legacy_dot" } }
"#;

#[test]
fn test_manifest_parses_in_order() {
    let set = ShapeSet::from_toml_str(MANIFEST).unwrap();

    let ids: Vec<&str> = set.meshes.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(
        ids,
        ["skydome", "terrain", "crate", "post", "pillar", "marker"]
    );

    assert_eq!(
        set.meshes[0].shape,
        Shape::Sphere {
            radius: 1.0,
            rings: 24,
            slices: 32,
            lod_levels: 3
        }
    );
    // Omitted fields fall back to their defaults
    assert_eq!(set.meshes[2].shape, Shape::Cube { scale: 1.0 });
    match &set.meshes[1].shape {
        Shape::Grid { lod_levels, .. } => assert_eq!(*lod_levels, 1),
        other => panic!("expected grid, got {other:?}"),
    }
    match &set.meshes[5].shape {
        Shape::Cone { options, .. } => {
            assert!(!options.double_sided_base);
            assert_eq!(options.normals, ConeNormals::LegacyDot);
        }
        other => panic!("expected cone, got {other:?}"),
    }
}

#[test]
fn test_manifest_generates_every_mesh() {
    init_logging();

    let set = ShapeSet::from_toml_str(MANIFEST).unwrap();
    let meshes = set.generate_all().unwrap();
    assert_eq!(meshes.len(), 6);

    let (id, skydome) = &meshes[0];
    assert_eq!(id, "skydome");
    assert_eq!(skydome.name(), "BuiltinSphere");
    assert_eq!(skydome.lod_count(), 3);

    let (_, post) = &meshes[3];
    assert!(matches!(post, BuiltinMesh::Screen(_)));
    assert!(post.as_lit().is_none());

    let (_, pillar) = &meshes[4];
    assert_eq!(pillar.name(), "BuiltinCylinder");
    assert_eq!(pillar.lod_count(), 2);
}

#[test]
fn test_empty_manifest() {
    let set = ShapeSet::from_toml_str("").unwrap();
    assert!(set.meshes.is_empty());
    assert!(set.generate_all().unwrap().is_empty());
}

#[test]
fn test_unknown_kind_is_a_manifest_error() {
    let text = r#"
[[mesh]]
id = "blob"
shape = { kind = "torus", radius = 1.0 }
"#;
    assert!(matches!(
        ShapeSet::from_toml_str(text),
        Err(MeshError::Manifest(_))
    ));
}

#[test]
fn test_missing_field_is_a_manifest_error() {
    let text = r#"
[[mesh]]
id = "ball"
shape = { kind = "sphere", radius = 1.0, rings = 8 }
"#;
    assert!(matches!(
        ShapeSet::from_toml_str(text),
        Err(MeshError::Manifest(_))
    ));
}

#[test]
fn test_invalid_entry_stops_generation() {
    let text = r#"
[[mesh]]
id = "ok"
shape = { kind = "quad" }

[[mesh]]
id = "flat"
shape = { kind = "sphere", radius = 0.0, rings = 8, slices = 8 }
"#;
    let set = ShapeSet::from_toml_str(text).unwrap();
    assert!(matches!(
        set.generate_all(),
        Err(MeshError::InvalidParameter {
            shape: "sphere",
            name: "radius",
            ..
        })
    ));
}

#[test]
fn test_shape_json_roundtrip() {
    let shape = Shape::Cone {
        height: 2.0,
        radius: 0.5,
        slices: 12,
        lod_levels: 2,
        options: ConeOptions::default(),
    };
    let json = serde_json::to_string(&shape).unwrap();
    assert!(json.contains("\"kind\":\"cone\""));
    let parsed: Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, shape);

    let parsed: Shape = serde_json::from_str(r#"{"kind":"triangle"}"#).unwrap();
    assert_eq!(parsed, Shape::Triangle { scale: 1.0 });
}

#[test]
fn test_flat_shapes_and_buffer_usage() {
    let grid = Shape::Grid {
        width: 1.0,
        depth: 1.0,
        rows: 2,
        columns: 2,
        lod_levels: 1,
    };
    let cube = Shape::Cube { scale: 1.0 };

    assert!(grid.is_2d());
    assert!(Shape::Triangle { scale: 1.0 }.is_2d());
    assert!(Shape::Quad { scale: 1.0 }.is_2d());
    assert!(!cube.is_2d());
    assert!(!Shape::FullScreenQuad.is_2d());

    assert_eq!(grid.buffer_usage(), BufferUsage::Writable);
    assert_eq!(cube.buffer_usage(), BufferUsage::Immutable);
    assert!(grid.buffer_usage().is_writable());
}

#[test]
fn test_generated_shape_matches_direct_call() {
    let via_shape = Shape::Sphere {
        radius: 1.0,
        rings: 16,
        slices: 16,
        lod_levels: 2,
    }
    .generate()
    .unwrap();
    let direct = geometry_gen::generate_sphere(1.0, 16, 16, 2).unwrap();

    assert_eq!(via_shape, BuiltinMesh::Lit(direct));
}
