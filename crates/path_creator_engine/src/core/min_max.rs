//! Laufende Achsen-Bounding-Box (Min/Max je Achse).

use glam::Vec3;

/// Akkumuliert Minimum und Maximum über beliebig viele Punkte.
///
/// Eine leere Box hat `min = +∞` und `max = -∞`; `size()` liefert dann `Vec3::ZERO`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax3D {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for MinMax3D {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMax3D {
    pub fn new() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Erweitert die Box um `point`.
    pub fn add(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// `true`, solange noch kein Punkt hinzugefügt wurde.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Ausdehnung je Achse.
    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            (self.min + self.max) * 0.5
        }
    }
}
