//! Thick-line tessellation of a polyline into a faceted tube.
//!
//! The joins follow the approach of GLE's `glePolyCylinder()`: every ring of
//! the previous segment is carried along the segment until it meets the
//! bisecting plane of the corner, then mirrored across that plane to start the
//! next segment. Open tubes get collapsed cap rings at both ends; closed tubes
//! reuse ring 0 as their final ring.

use std::f64::consts::TAU;

use log::debug;
use vista_core::{Result, Validate, VistaError};
use vista_math::{Plane, Point3, Rgb, Vector3};

use super::slice::{CurveSlice, CHUNK_STEP, LOWER_OFFSET, MAX_CHUNK_RINGS, UPPER_OFFSET};
use super::tube::{CurveGeometry, LineStrip, StripRun, TubeMesh, VertexColors};
use super::CurvePath;

/// How colors are adjusted for stereo viewing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StereoMode {
    #[default]
    Off,
    /// Red/cyan glasses over colored content: colors are desaturated.
    ColorAnaglyph,
    /// Red/cyan glasses over monochrome content: colors become gray.
    GrayAnaglyph,
}

impl StereoMode {
    fn adjust(self, color: Rgb) -> Rgb {
        match self {
            Self::Off => color,
            Self::ColorAnaglyph => color.desaturate(),
            Self::GrayAnaglyph => color.grayscale(),
        }
    }
}

/// View-dependent inputs to tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationContext {
    /// Global scale factor.
    pub gcf: f64,
    /// Per-axis global scale.
    pub gcfvec: Vector3,
    pub stereo: StereoMode,
}

impl TessellationContext {
    /// Positions and radius must be rescaled before tessellation.
    pub fn requires_scaling(&self) -> bool {
        self.gcf != 1.0 || self.gcfvec.x != self.gcfvec.y
    }
}

impl Default for TessellationContext {
    fn default() -> Self {
        Self {
            gcf: 1.0,
            gcfvec: Vector3::ONE,
            stereo: StereoMode::Off,
        }
    }
}

/// Construction-time settings of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    /// Facets around the tube cross-section.
    pub sides: usize,
    /// Smooth zero-radius lines.
    pub antialias: bool,
    /// Tube radius; zero draws a line strip.
    pub radius: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            sides: 4,
            antialias: true,
            radius: 0.0,
        }
    }
}

impl Validate for CurveConfig {
    fn validate(&self) -> Result<()> {
        if self.sides < 3 {
            return Err(VistaError::Configuration(format!(
                "a tube needs at least 3 sides, got {}",
                self.sides
            )));
        }
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(VistaError::Configuration(format!(
                "curve radius must be finite and non-negative, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Join geometry at one interior corner.
struct Joint {
    /// Plane halfway between the incoming and outgoing segment directions.
    bisector: Plane,
    /// `1 / (bisector · incoming)`, or zero when the plane contains the
    /// incoming direction.
    sectheta: f64,
    /// Length of the outgoing segment.
    a_dot: f64,
}

impl Joint {
    fn new(corner: usize, current: Point3, next: Point3, last_a: Vector3, a: Vector3) -> Result<Self> {
        let mut bisect = (a + last_a).normalize_or_zero();
        if bisect == Vector3::ZERO {
            // The path doubles back on itself.
            bisect = Vector3::Z.cross(a).normalize_or_zero();
        }
        if bisect == Vector3::ZERO {
            bisect = Vector3::Y.cross(a).normalize_or_zero();
        }
        if bisect == Vector3::ZERO {
            return Err(VistaError::DegenerateBasis { corner });
        }

        let cos = bisect.dot(last_a);
        Ok(Self {
            bisector: Plane::from_unit_normal(current, bisect),
            sectheta: if cos != 0.0 { 1.0 / cos } else { 0.0 },
            a_dot: a.dot(next - current),
        })
    }

    /// Clamp the travel `t` of a ring vertex along the incoming segment so it
    /// stops at the bisecting plane without overshooting either segment.
    fn clamp(&self, rel: Vector3, t: f64) -> f64 {
        if self.sectheta > 0.0 {
            let t1 = (rel.dot(self.bisector.normal) * self.sectheta).max(t - self.a_dot);
            t.min(t1).max(0.0)
        } else {
            t
        }
    }
}

/// Rings needed for `count` path points: an entry and exit ring per point,
/// less one when a closed tube shares its first ring.
///
/// # Errors
/// Returns [`VistaError::Configuration`] when the tube would have more
/// vertices than a `u32` index can address.
fn tube_ring_count(count: usize, closed: bool, sides: usize) -> Result<usize> {
    let vertices = count
        .checked_mul(2)
        .map(|rings| rings - usize::from(closed))
        .and_then(|vcount| Some((vcount, vcount.checked_mul(sides)?)));
    match vertices {
        Some((vcount, total)) if u32::try_from(total).is_ok() => Ok(vcount),
        _ => Err(VistaError::Configuration(format!(
            "a tube of {count} points and {sides} sides exceeds the u32 vertex index range"
        ))),
    }
}

/// Orthonormal cross-section axes perpendicular to the first tangent.
fn cross_section_basis(a: Vector3) -> Result<(Vector3, Vector3)> {
    let mut x = a.cross(Vector3::Y).normalize_or_zero();
    if x == Vector3::ZERO {
        x = a.cross(Vector3::Z).normalize_or_zero();
    }
    let y = x.cross(a).normalize_or_zero();
    if x == Vector3::ZERO || y == Vector3::ZERO || x == y {
        return Err(VistaError::DegenerateBasis { corner: 0 });
    }
    Ok((x, y))
}

/// Turns [`CurvePath`]s into tube meshes with a fixed number of sides.
///
/// The trigonometric table and the strip index template are computed once per
/// instance; every call allocates its own output buffers, so one tessellator
/// may be shared between threads.
#[derive(Debug, Clone)]
pub struct CurveTessellator {
    config: CurveConfig,
    cos_table: Vec<f64>,
    sin_table: Vec<f64>,
    slice: CurveSlice,
}

impl CurveTessellator {
    /// # Errors
    /// Returns [`VistaError::Configuration`] for fewer than 3 sides or a
    /// negative radius.
    pub fn new(config: CurveConfig) -> Result<Self> {
        config.validate()?;
        let sides = config.sides;
        let angles = (0..sides).map(move |i| TAU * i as f64 / sides as f64);
        Ok(Self {
            cos_table: angles.clone().map(f64::cos).collect(),
            sin_table: angles.map(f64::sin).collect(),
            slice: CurveSlice::new(config.sides),
            config,
        })
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    pub fn sides(&self) -> usize {
        self.config.sides
    }

    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    pub fn slice(&self) -> &CurveSlice {
        &self.slice
    }

    /// Tessellate `path` for the given view.
    ///
    /// Coincident points are dropped first; a path left with fewer than two
    /// points yields [`CurveGeometry::Empty`]. A zero radius yields a line
    /// strip, anything else a [`TubeMesh`].
    ///
    /// # Errors
    /// [`VistaError::NonFinitePoint`] for NaN/infinite input and
    /// [`VistaError::DegenerateBasis`] when a corner's geometry collapses.
    pub fn tessellate(&self, path: &CurvePath, ctx: &TessellationContext) -> Result<CurveGeometry> {
        let kept = path.deduplicated()?;
        if kept.len() < path.len() {
            debug!("dropped {} coincident curve points", path.len() - kept.len());
        }
        if kept.is_degenerate() {
            return Ok(CurveGeometry::Empty);
        }

        let mut scaled_radius = self.config.radius;
        let positions: Vec<Point3> = if ctx.requires_scaling() {
            scaled_radius *= ctx.gcfvec.x;
            kept.positions().iter().map(|p| *p * ctx.gcfvec).collect()
        } else {
            kept.positions().to_vec()
        };

        let colors = if kept.is_monochrome() {
            VertexColors::Uniform(ctx.stereo.adjust(kept.colors()[0]))
        } else {
            VertexColors::PerVertex(kept.colors().iter().map(|c| ctx.stereo.adjust(*c)).collect())
        };

        if self.config.radius == 0.0 {
            return Ok(CurveGeometry::LineStrip(LineStrip {
                points: positions,
                colors,
            }));
        }
        self.thick_tube(&positions, &colors, scaled_radius)
            .map(CurveGeometry::Tube)
    }

    /// Build the rings of a tube around `points`, which must hold at least
    /// two points with no coincident neighbours.
    fn thick_tube(&self, points: &[Point3], colors: &VertexColors, scaled_radius: f64) -> Result<TubeMesh> {
        let s = self.sides();
        let count = points.len();
        let closed = points[0] == points[count - 1];
        let vcount = tube_ring_count(count, closed, s)?;

        let mut projected = vec![Point3::ZERO; vcount * s];
        let mut normals = vec![Vector3::ZERO; vcount * s];
        let point_colors = colors.per_vertex();
        let mut light = point_colors.map(|_| vec![Rgb::BLACK; vcount * s]);

        // Open tubes start with the cap ring at index 0.
        let mut i = if closed { 0 } else { s };
        let mut last_a = Vector3::ZERO;

        for corner in 0..count {
            let current = points[corner];
            let is_last = corner == count - 1;
            let next = if is_last { current } else { points[corner + 1] };
            let a = if is_last {
                Vector3::ZERO
            } else {
                let step = next - current;
                if !step.is_finite() {
                    return Err(VistaError::Geometry(format!(
                        "segment {corner} from {current} to {next} overflows f64"
                    )));
                }
                step.normalize_or_zero()
            };
            let corner_color = point_colors.map(|c| c[corner]);

            if corner == 0 {
                let (x, y) = cross_section_basis(a)?;
                let (x, y) = (x * scaled_radius, y * scaled_radius);
                for side in 0..s {
                    // Side 0 points "up" along y.
                    let rel = x * self.sin_table[side] + y * self.cos_table[side];
                    projected[i + side] = current + rel;
                    normals[i + side] = rel.normalize_or_zero();
                    if !closed {
                        projected[side] = current;
                        normals[side] = -a;
                    }
                }
                if let (Some(light), Some(c)) = (light.as_mut(), corner_color) {
                    light[i..i + s].fill(c);
                    if !closed {
                        light[..s].fill(c);
                    }
                }
                i += s;
            } else {
                let joint = if is_last {
                    None
                } else {
                    Some(Joint::new(corner, current, next, last_a, a)?)
                };

                for side in 0..s {
                    let prev_start = projected[i + side - s];
                    let rel = current - prev_start;
                    let mut t = rel.dot(last_a);
                    if let Some(joint) = &joint {
                        t = joint.clamp(rel, t);
                    }
                    let prev_end = prev_start + last_a * t;
                    projected[i + side] = prev_end;
                    normals[i + side] = normals[i + side - s];

                    if let Some(joint) = &joint {
                        let next_start = joint.bisector.reflect_point(prev_end);
                        let rel = next_start - current;
                        projected[i + side + s] = next_start;
                        normals[i + side + s] = (rel - a * a.dot(rel)).normalize_or_zero();
                    } else if !closed {
                        projected[i + side + s] = current;
                        normals[i + side + s] = last_a;
                    }
                }
                if let (Some(light), Some(c)) = (light.as_mut(), corner_color) {
                    light[i..i + s].fill(c);
                    if joint.is_some() || !closed {
                        light[i + s..i + 2 * s].fill(c);
                    }
                }
                i += 2 * s;
            }
            last_a = a;
        }

        if closed {
            // Ring 0 doubles as the final ring.
            let last = (vcount - 1) * s;
            projected.copy_within(0..s, last);
            normals.copy_within(0..s, last);
            if let Some(light) = light.as_mut() {
                light.copy_within(0..s, last);
            }
        }

        let (indices, strips) = self.strip_runs(vcount);
        debug!(
            "tessellated curve: {count} points, {vcount} rings of {s} sides, closed={closed}, {} strips",
            strips.len()
        );

        Ok(TubeMesh {
            positions: projected,
            normals,
            colors: match light {
                Some(light) => VertexColors::PerVertex(light),
                None => colors.clone(),
            },
            indices,
            strips,
            sides: s,
            closed,
        })
    }

    /// Resolve the strip index runs for `vcount` rings: for each side, chunks
    /// of at most [`MAX_CHUNK_RINGS`] rings overlapping by one ring.
    fn strip_runs(&self, vcount: usize) -> (Vec<u32>, Vec<StripRun>) {
        let s = self.sides();
        let mut indices = Vec::with_capacity(2 * vcount * s + 2 * s * (vcount / CHUNK_STEP + 1));
        let mut strips = Vec::new();

        for side in 0..s {
            let (template_offset, first_side) = if side == s - 1 {
                (UPPER_OFFSET, 0)
            } else {
                (LOWER_OFFSET, side)
            };
            for first_ring in (0..vcount).step_by(CHUNK_STEP) {
                let rings = (vcount - first_ring).min(MAX_CHUNK_RINGS);
                let len = 2 * rings;
                // In range: `tube_ring_count` bounds the vertex count by u32::MAX.
                let base = (first_ring * s + first_side) as u32;
                let offset = indices.len();
                indices.extend(self.slice.run(template_offset, len).iter().map(|&e| base + e));
                strips.push(StripRun {
                    side,
                    template_offset,
                    first_ring,
                    offset,
                    len,
                });
            }
        }
        (indices, strips)
    }
}
