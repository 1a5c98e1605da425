use vista_core::{Result, VistaError};
use vista_math::{Point3, Rgb};
use vista_mesh::CurveConfig;

use super::Curve;

/// Records an object's positions into a curve as it moves.
#[derive(Debug, Clone)]
pub struct Trail {
    /// Record every `interval`-th position; zero disables recording.
    interval: u32,
    /// Keep at most this many points; zero keeps all.
    retain: usize,
    interval_count: u32,
    curve: Curve,
}

impl Trail {
    /// # Errors
    /// Returns [`VistaError::Configuration`] for an invalid curve config.
    pub fn new(interval: u32, retain: usize, config: CurveConfig) -> Result<Self> {
        Ok(Self {
            interval,
            retain,
            interval_count: 0,
            curve: Curve::new(config)?,
        })
    }

    /// # Errors
    /// Returns [`VistaError::Configuration`] for an invalid curve config.
    pub fn with_color(interval: u32, retain: usize, config: CurveConfig, color: Rgb) -> Result<Self> {
        let mut trail = Self::new(interval, retain, config)?;
        trail.curve.set_default_color(color);
        Ok(trail)
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// # Errors
    /// Returns [`VistaError::Configuration`] when the count is already past
    /// the new interval.
    pub fn set_interval(&mut self, interval: u32) -> Result<()> {
        if interval != 0 && self.interval_count >= interval {
            return Err(VistaError::Configuration(format!(
                "trail interval {interval} is behind the pending count {}",
                self.interval_count
            )));
        }
        self.interval = interval;
        Ok(())
    }

    pub fn retain(&self) -> usize {
        self.retain
    }

    pub fn interval_count(&self) -> u32 {
        self.interval_count
    }

    pub fn points(&self) -> &[Point3] {
        self.curve.path().positions()
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn curve_mut(&mut self) -> &mut Curve {
        &mut self.curve
    }

    /// Note a new position of the tracked object.
    pub fn record(&mut self, pos: Point3) {
        if self.interval == 0 {
            return;
        }
        self.interval_count += 1;
        if self.curve.path().is_empty() {
            self.curve.append(pos, 0);
            self.interval_count -= 1;
        }
        if self.interval_count == self.interval {
            if self.curve.path().last() != Some(pos) {
                self.curve.append(pos, self.retain);
            }
            self.interval_count = 0;
        }
    }
}
