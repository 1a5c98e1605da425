use approx::assert_relative_eq;
use vista_core::VistaError;
use vista_math::{dvec3, Point3, Rgb};
use vista_mesh::curve::UPPER_OFFSET;
use vista_mesh::{
    CurveConfig, CurveGeometry, CurvePath, CurveTessellator, StereoMode, TessellationContext,
    TubeMesh, VertexColors,
};

fn tessellator(sides: usize, radius: f64) -> CurveTessellator {
    CurveTessellator::new(CurveConfig {
        sides,
        antialias: true,
        radius,
    })
    .unwrap()
}

fn tube(path: &CurvePath, sides: usize, radius: f64) -> TubeMesh {
    tessellator(sides, radius)
        .tessellate(path, &TessellationContext::default())
        .unwrap()
        .into_tube()
        .unwrap()
}

fn white_path(points: &[Point3]) -> CurvePath {
    CurvePath::from_points(points, Rgb::WHITE)
}

fn square_loop() -> Vec<Point3> {
    vec![
        dvec3(0.0, 0.0, 0.0),
        dvec3(1.0, 0.0, 0.0),
        dvec3(1.0, 1.0, 0.0),
        dvec3(0.0, 1.0, 0.0),
        dvec3(0.0, 0.0, 0.0),
    ]
}

fn zigzag(count: usize) -> Vec<Point3> {
    (0..count)
        .map(|i| dvec3(i as f64, (i % 2) as f64, 0.0))
        .collect()
}

fn assert_unit_normals(mesh: &TubeMesh) {
    for n in &mesh.normals {
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn test_fewer_than_two_points_draw_nothing() {
    let t = tessellator(4, 0.1);
    let ctx = TessellationContext::default();

    let empty = CurvePath::new();
    let single = white_path(&[dvec3(1.0, 2.0, 3.0)]);
    let repeated = white_path(&[dvec3(1.0, 2.0, 3.0); 5]);

    assert_eq!(t.tessellate(&empty, &ctx).unwrap(), CurveGeometry::Empty);
    assert_eq!(t.tessellate(&single, &ctx).unwrap(), CurveGeometry::Empty);
    assert_eq!(t.tessellate(&repeated, &ctx).unwrap(), CurveGeometry::Empty);
}

#[test]
fn test_open_l_shape_has_24_vertices() {
    let path = white_path(&[
        dvec3(0.0, 0.0, 0.0),
        dvec3(1.0, 0.0, 0.0),
        dvec3(1.0, 1.0, 0.0),
    ]);
    let mesh = tube(&path, 4, 0.1);

    assert!(!mesh.closed);
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.normals.len(), 24);
    assert_unit_normals(&mesh);
}

#[test]
fn test_open_vertex_count_is_two_rings_per_point() {
    for count in 2..8 {
        let mesh = tube(&white_path(&zigzag(count)), 5, 0.05);
        assert_eq!(mesh.vertex_count(), 2 * count * 5);
    }
}

#[test]
fn test_closed_loop_shares_first_ring() {
    let mesh = tube(&white_path(&square_loop()), 6, 0.1);

    assert!(mesh.closed);
    assert_eq!(mesh.vertex_count(), (2 * 5 - 1) * 6);
    let last = mesh.ring_count() - 1;
    assert_eq!(mesh.ring(0), mesh.ring(last));
    assert_eq!(mesh.ring_normals(0), mesh.ring_normals(last));
    assert_unit_normals(&mesh);
}

#[test]
fn test_closed_stitch_copies_colors() {
    let red = Rgb::new(1.0, 0.0, 0.0);
    let blue = Rgb::new(0.0, 0.0, 1.0);
    let colors = vec![red, blue, blue, blue, blue];
    let path = CurvePath::with_colors(square_loop(), colors).unwrap();
    let mesh = tube(&path, 4, 0.1);

    let per_vertex = mesh.colors.per_vertex().unwrap();
    assert_eq!(per_vertex.len(), mesh.vertex_count());
    let last = (mesh.ring_count() - 1) * 4;
    assert_eq!(&per_vertex[..4], &per_vertex[last..]);
    assert!(per_vertex[..4].iter().all(|c| *c == red));
}

#[test]
fn test_doubling_back_forms_closed_loop() {
    let path = white_path(&[
        dvec3(0.0, 0.0, 0.0),
        dvec3(1.0, 0.0, 0.0),
        dvec3(0.0, 0.0, 0.0),
    ]);
    let mesh = tube(&path, 4, 0.1);

    assert!(mesh.closed);
    assert_eq!(mesh.ring_count(), 5);
    assert_unit_normals(&mesh);
    // The middle point survives and its rings sit at x = 1.
    assert!(mesh.ring(2).iter().all(|p| (p.x - 1.0).abs() < 1e-12));
}

#[test]
fn test_cap_normals_follow_end_tangents() {
    let points = zigzag(4);
    let mesh = tube(&white_path(&points), 4, 0.1);

    let first = (points[1] - points[0]).normalize();
    let last = (points[3] - points[2]).normalize();
    let end = mesh.ring_count() - 1;
    for n in mesh.ring_normals(0) {
        assert_relative_eq!((*n + first).length(), 0.0, epsilon = 1e-12);
    }
    for n in mesh.ring_normals(end) {
        assert_relative_eq!((*n - last).length(), 0.0, epsilon = 1e-12);
    }
    assert!(mesh.ring(0).iter().all(|p| *p == points[0]));
    assert!(mesh.ring(end).iter().all(|p| *p == points[3]));
}

#[test]
fn test_coincident_points_are_dropped() {
    let path = white_path(&[
        dvec3(0.0, 0.0, 0.0),
        dvec3(0.0, 0.0, 0.0),
        dvec3(1.0, 0.0, 0.0),
        dvec3(1.0, 0.0, 0.0),
        dvec3(1.0, 1.0, 0.0),
    ]);
    let mesh = tube(&path, 4, 0.1);
    assert_eq!(mesh.vertex_count(), 24);
}

#[test]
fn test_monochrome_switches_to_per_vertex_colors() {
    let t = tessellator(4, 0.1);
    let ctx = TessellationContext::default();
    let mut path = white_path(&zigzag(3));

    let mono = t.tessellate(&path, &ctx).unwrap().into_tube().unwrap();
    assert_eq!(mono.colors, VertexColors::Uniform(Rgb::WHITE));

    path.set_color(1, Rgb::new(0.0, 1.0, 0.0)).unwrap();
    let colored = t.tessellate(&path, &ctx).unwrap().into_tube().unwrap();
    assert!(!colored.colors.is_uniform());
    assert_eq!(colored.colors.per_vertex().unwrap().len(), colored.vertex_count());
}

#[test]
fn test_strip_runs_group_by_side() {
    let sides = 5;
    let mesh = tube(&white_path(&zigzag(6)), sides, 0.1);

    for side in 0..sides {
        let runs: Vec<_> = mesh.side_strips(side).collect();
        assert_eq!(runs.len(), 1);
        let expected = if side == sides - 1 { UPPER_OFFSET } else { 0 };
        assert_eq!(runs[0].template_offset, expected);
        assert_eq!(runs[0].len, 2 * mesh.ring_count());
    }
    assert_eq!(mesh.strips.len(), sides);
    assert_eq!(mesh.triangle_count(), sides * (2 * mesh.ring_count() - 2));
}

#[test]
fn test_strip_indices_connect_neighbouring_sides() {
    let mesh = tube(&white_path(&zigzag(3)), 4, 0.1);
    let run = mesh.side_strips(1).next().unwrap();
    assert_eq!(&mesh.strip_indices(run)[..4], &[1, 2, 5, 6]);
    let wrap = mesh.side_strips(3).next().unwrap();
    assert_eq!(&mesh.strip_indices(wrap)[..4], &[3, 0, 7, 4]);
}

#[test]
fn test_long_path_splits_into_overlapping_chunks() {
    let sides = 4;
    let mesh = tube(&white_path(&zigzag(200)), sides, 0.1);
    assert_eq!(mesh.ring_count(), 400);

    let runs: Vec<_> = mesh.side_strips(0).collect();
    assert_eq!(
        runs.iter().map(|r| r.first_ring).collect::<Vec<_>>(),
        vec![0, 127, 254, 381]
    );
    assert_eq!(
        runs.iter().map(|r| r.len).collect::<Vec<_>>(),
        vec![256, 256, 256, 38]
    );
    // Consecutive chunks share their boundary ring.
    let first = mesh.strip_indices(runs[0]);
    let second = mesh.strip_indices(runs[1]);
    assert_eq!(&first[first.len() - 2..], &second[..2]);

    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertex_count()));
    assert_unit_normals(&mesh);
}

#[test]
fn test_tessellation_is_repeatable() {
    let t = tessellator(7, 0.3);
    let ctx = TessellationContext::default();
    let path = white_path(&square_loop());
    let first = t.tessellate(&path, &ctx).unwrap();
    let second = t.tessellate(&path, &ctx).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_uneven_world_scale_rescales_points() {
    let path = white_path(&[dvec3(0.0, 1.0, 0.0), dvec3(2.0, 1.0, 0.0)]);
    let ctx = TessellationContext {
        gcf: 1.0,
        gcfvec: dvec3(1.0, 3.0, 1.0),
        stereo: StereoMode::Off,
    };
    let mesh = tessellator(4, 0.1)
        .tessellate(&path, &ctx)
        .unwrap()
        .into_tube()
        .unwrap();

    assert!(mesh.ring(0).iter().all(|p| *p == dvec3(0.0, 3.0, 0.0)));
    assert!(mesh.ring(3).iter().all(|p| *p == dvec3(2.0, 3.0, 0.0)));
    assert_relative_eq!((mesh.ring(1)[0] - dvec3(0.0, 3.0, 0.0)).length(), 0.1, epsilon = 1e-12);
}

#[test]
fn test_color_anaglyph_desaturates_each_point() {
    let colors = vec![Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0)];
    let path = CurvePath::with_colors(vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)], colors.clone())
        .unwrap();
    let ctx = TessellationContext {
        stereo: StereoMode::ColorAnaglyph,
        ..TessellationContext::default()
    };
    let mesh = tessellator(3, 0.1)
        .tessellate(&path, &ctx)
        .unwrap()
        .into_tube()
        .unwrap();

    let per_vertex = mesh.colors.per_vertex().unwrap();
    assert_eq!(per_vertex[0], colors[0].desaturate());
    assert_eq!(per_vertex[per_vertex.len() - 1], colors[1].desaturate());
}

#[test]
fn test_zero_radius_yields_line_strip() {
    let path = white_path(&[
        dvec3(0.0, 0.0, 0.0),
        dvec3(0.0, 0.0, 0.0),
        dvec3(0.0, 0.0, 1.0),
    ]);
    let geometry = tessellator(4, 0.0)
        .tessellate(&path, &TessellationContext::default())
        .unwrap();
    match geometry {
        CurveGeometry::LineStrip(strip) => {
            assert_eq!(strip.points, vec![dvec3(0.0, 0.0, 0.0), dvec3(0.0, 0.0, 1.0)]);
            assert_eq!(strip.colors, VertexColors::Uniform(Rgb::WHITE));
        }
        other => panic!("expected a line strip, got {other:?}"),
    }
}

#[test]
fn test_non_finite_point_is_rejected() {
    let path = white_path(&[
        dvec3(0.0, 0.0, 0.0),
        dvec3(1.0, 0.0, 0.0),
        dvec3(f64::INFINITY, 0.0, 0.0),
    ]);
    let err = tessellator(4, 0.1)
        .tessellate(&path, &TessellationContext::default())
        .unwrap_err();
    assert!(matches!(err, VistaError::NonFinitePoint { index: 2 }));
}

#[test]
fn test_tube_bounds_enclose_radius() {
    let mesh = tube(&white_path(&[dvec3(0.0, 0.0, 0.0), dvec3(3.0, 0.0, 0.0)]), 8, 0.5);
    let bounds = mesh.bounding_box();
    assert_relative_eq!(bounds.min.x, 0.0);
    assert_relative_eq!(bounds.max.x, 3.0);
    assert_relative_eq!(bounds.max.y, 0.5, epsilon = 1e-12);
    assert_relative_eq!(bounds.min.z, -0.5, epsilon = 1e-12);
}
