//! Ebenen-Beschränkung für alle gespeicherten Pfadpunkte.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Koordinaten-Ebene, in der ein Pfad liegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathSpace {
    /// Freier 3D-Raum, keine Achse fixiert
    #[default]
    Free3D,
    /// XY-Ebene (z = 0)
    PlaneXY,
    /// XZ-Ebene (y = 0)
    PlaneXZ,
}

impl PathSpace {
    /// Projiziert einen Punkt auf die aktive Ebene.
    pub fn project(self, point: Vec3) -> Vec3 {
        match self {
            PathSpace::Free3D => point,
            PathSpace::PlaneXY => Vec3::new(point.x, point.y, 0.0),
            PathSpace::PlaneXZ => Vec3::new(point.x, 0.0, point.z),
        }
    }

    /// `true` für beide Ebenen-Varianten.
    pub fn is_planar(self) -> bool {
        !matches!(self, PathSpace::Free3D)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_setzt_fixierte_achse_auf_null() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(PathSpace::Free3D.project(p), p);
        assert_eq!(PathSpace::PlaneXY.project(p), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(PathSpace::PlaneXZ.project(p), Vec3::new(1.0, 0.0, 3.0));
    }
}
