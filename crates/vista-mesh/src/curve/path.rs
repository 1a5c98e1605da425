use vista_core::{Result, VistaError};
use vista_math::{Point3, Rgb};

/// An ordered polyline with one color per point.
///
/// The color list always has the same length as the position list; points
/// appended without a color repeat the previous point's color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurvePath {
    positions: Vec<Point3>,
    colors: Vec<Rgb>,
}

impl CurvePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// A path whose points all share `color`.
    pub fn from_points(points: &[Point3], color: Rgb) -> Self {
        Self {
            positions: points.to_vec(),
            colors: vec![color; points.len()],
        }
    }

    /// # Errors
    /// Returns [`VistaError::Configuration`] when the lists differ in length.
    pub fn with_colors(positions: Vec<Point3>, colors: Vec<Rgb>) -> Result<Self> {
        if positions.len() != colors.len() {
            return Err(VistaError::Configuration(format!(
                "{} positions but {} colors",
                positions.len(),
                colors.len()
            )));
        }
        Ok(Self { positions, colors })
    }

    pub fn push(&mut self, pos: Point3, color: Rgb) {
        self.positions.push(pos);
        self.colors.push(color);
    }

    pub fn push_point(&mut self, pos: Point3) {
        let color = self.colors.last().copied().unwrap_or_default();
        self.push(pos, color);
    }

    /// Drop the oldest points so that at most `keep` remain.
    pub fn retain_last(&mut self, keep: usize) {
        let excess = self.positions.len().saturating_sub(keep);
        self.positions.drain(..excess);
        self.colors.drain(..excess);
    }

    /// # Errors
    /// Returns [`VistaError::Configuration`] when `index` is out of range.
    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        let len = self.colors.len();
        let slot = self.colors.get_mut(index).ok_or_else(|| {
            VistaError::Configuration(format!("color index {index} out of range for {len} points"))
        })?;
        *slot = color;
        Ok(())
    }

    /// Recolor every point.
    pub fn set_uniform_color(&mut self, color: Rgb) {
        self.colors.fill(color);
    }

    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn last(&self) -> Option<Point3> {
        self.positions.last().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Fewer than two points: nothing to draw.
    pub fn is_degenerate(&self) -> bool {
        self.positions.len() < 2
    }

    /// First and last points coincide exactly.
    pub fn is_closed(&self) -> bool {
        match (self.positions.first(), self.positions.last()) {
            (Some(first), Some(last)) => self.positions.len() > 1 && first == last,
            _ => false,
        }
    }

    pub fn is_monochrome(&self) -> bool {
        match self.colors.split_first() {
            Some((first, rest)) => rest.iter().all(|c| c == first),
            None => true,
        }
    }

    /// Validated copy of the path with coincident consecutive points removed.
    ///
    /// A point is dropped when its finite displacement from the previously
    /// kept point has no direction; its color goes with it.
    ///
    /// # Errors
    /// Returns [`VistaError::NonFinitePoint`] for the first NaN or infinite
    /// position.
    pub fn deduplicated(&self) -> Result<CurvePath> {
        if let Some(index) = self.positions.iter().position(|p| !p.is_finite()) {
            return Err(VistaError::NonFinitePoint { index });
        }

        let mut kept = CurvePath {
            positions: Vec::with_capacity(self.positions.len()),
            colors: Vec::with_capacity(self.colors.len()),
        };
        for (&pos, &color) in self.positions.iter().zip(&self.colors) {
            if let Some(prev) = kept.last() {
                // An overflowing displacement still separates two points.
                let step = pos - prev;
                if step.is_finite() && step.normalize_or_zero() == Point3::ZERO {
                    continue;
                }
            }
            kept.push(pos, color);
        }
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_math::dvec3;

    #[test]
    fn test_push_point_repeats_last_color() {
        let mut path = CurvePath::new();
        path.push_point(dvec3(0.0, 0.0, 0.0));
        assert_eq!(path.colors()[0], Rgb::WHITE);
        path.push(dvec3(1.0, 0.0, 0.0), Rgb::BLACK);
        path.push_point(dvec3(2.0, 0.0, 0.0));
        assert_eq!(path.colors()[2], Rgb::BLACK);
    }

    #[test]
    fn test_with_colors_length_mismatch() {
        let err = CurvePath::with_colors(vec![dvec3(0.0, 0.0, 0.0)], vec![]);
        assert!(matches!(err, Err(VistaError::Configuration(_))));
    }

    #[test]
    fn test_closed_detection() {
        let pts = [dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0), dvec3(0.0, 0.0, 0.0)];
        assert!(CurvePath::from_points(&pts, Rgb::WHITE).is_closed());
        assert!(!CurvePath::from_points(&pts[..2], Rgb::WHITE).is_closed());
        assert!(!CurvePath::from_points(&pts[..1], Rgb::WHITE).is_closed());
    }

    #[test]
    fn test_dedup_removes_coincident_runs() {
        let mut path = CurvePath::new();
        path.push(dvec3(0.0, 0.0, 0.0), Rgb::WHITE);
        path.push(dvec3(0.0, 0.0, 0.0), Rgb::BLACK);
        path.push(dvec3(1.0, 0.0, 0.0), Rgb::new(1.0, 0.0, 0.0));
        path.push(dvec3(1.0, 0.0, 0.0), Rgb::BLACK);
        path.push(dvec3(1.0, 1.0, 0.0), Rgb::new(0.0, 1.0, 0.0));
        let kept = path.deduplicated().unwrap();
        assert_eq!(
            kept.positions(),
            &[dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0), dvec3(1.0, 1.0, 0.0)]
        );
        assert_eq!(
            kept.colors(),
            &[Rgb::WHITE, Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 1.0, 0.0)]
        );
    }

    #[test]
    fn test_dedup_keeps_return_to_start() {
        let pts = [dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0), dvec3(0.0, 0.0, 0.0)];
        let kept = CurvePath::from_points(&pts, Rgb::WHITE).deduplicated().unwrap();
        assert_eq!(kept.len(), 3);
        assert!(kept.is_closed());
    }

    #[test]
    fn test_dedup_keeps_far_apart_points() {
        let pts = [dvec3(-1e308, 0.0, 0.0), dvec3(1e308, 0.0, 0.0), dvec3(1e308, 1.0, 0.0)];
        let kept = CurvePath::from_points(&pts, Rgb::WHITE).deduplicated().unwrap();
        assert_eq!(kept.positions(), &pts);
    }

    #[test]
    fn test_dedup_rejects_nan() {
        let pts = [dvec3(0.0, 0.0, 0.0), dvec3(f64::NAN, 0.0, 0.0)];
        let err = CurvePath::from_points(&pts, Rgb::WHITE).deduplicated();
        assert!(matches!(err, Err(VistaError::NonFinitePoint { index: 1 })));
    }

    #[test]
    fn test_retain_last() {
        let pts: Vec<_> = (0..5).map(|i| dvec3(i as f64, 0.0, 0.0)).collect();
        let mut path = CurvePath::from_points(&pts, Rgb::WHITE);
        path.retain_last(2);
        assert_eq!(path.positions(), &pts[3..]);
        assert_eq!(path.colors().len(), 2);
    }

    #[test]
    fn test_monochrome() {
        let pts = [dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0)];
        let mut path = CurvePath::from_points(&pts, Rgb::WHITE);
        assert!(path.is_monochrome());
        path.set_color(1, Rgb::BLACK).unwrap();
        assert!(!path.is_monochrome());
        assert!(path.set_color(7, Rgb::BLACK).is_err());
    }
}
