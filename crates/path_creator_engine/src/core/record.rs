//! Flacher, serialisierbarer Datensatz eines Bezier-Pfads.

use anyhow::{Result, bail, ensure};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{ControlMode, PathSpace};
use crate::core::bezier_path::DEFAULT_AUTO_CONTROL_LENGTH;

fn default_auto_control_length() -> f32 {
    DEFAULT_AUTO_CONTROL_LENGTH
}

/// Kontrollpunkte plus Metadaten, wie sie gespeichert werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierPathRecord {
    pub points: Vec<Vec3>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub space: PathSpace,
    #[serde(default)]
    pub control_mode: ControlMode,
    #[serde(default = "default_auto_control_length")]
    pub auto_control_length: f32,
    /// Twist je Anker in Grad; Länge muss der Ankerzahl entsprechen
    pub per_anchor_normal_angle: Vec<f32>,
    #[serde(default)]
    pub global_normals_angle: f32,
    #[serde(default)]
    pub flip_normals: bool,
}

impl BezierPathRecord {
    /// Prüft die Struktur: Punktzahl passend zu `closed`, Winkel je Anker, endliche Werte.
    pub fn validate(&self) -> Result<()> {
        let len = self.points.len();
        if self.closed {
            ensure!(
                len >= 6 && len % 3 == 0,
                "Geschlossener Pfad braucht 3·n Punkte (n >= 2), erhalten: {len}"
            );
        } else {
            ensure!(
                len >= 4 && len % 3 == 1,
                "Offener Pfad braucht 3·n + 1 Punkte (n >= 1), erhalten: {len}"
            );
        }

        let anchors = if self.closed { len / 3 } else { (len + 2) / 3 };
        if self.per_anchor_normal_angle.len() != anchors {
            bail!(
                "Anzahl der Anker-Winkel ({}) passt nicht zur Ankerzahl ({anchors})",
                self.per_anchor_normal_angle.len()
            );
        }

        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            bail!("Punkt {index} hat ungueltige Koordinaten");
        }
        ensure!(
            self.per_anchor_normal_angle.iter().all(|a| a.is_finite())
                && self.global_normals_angle.is_finite()
                && self.auto_control_length.is_finite(),
            "Winkel und auto_control_length muessen endlich sein"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_record() -> BezierPathRecord {
        BezierPathRecord {
            points: vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE],
            closed: false,
            space: PathSpace::Free3D,
            control_mode: ControlMode::Aligned,
            auto_control_length: 0.3,
            per_anchor_normal_angle: vec![0.0, 0.0],
            global_normals_angle: 0.0,
            flip_normals: false,
        }
    }

    #[test]
    fn test_validate_akzeptiert_gueltigen_datensatz() {
        assert!(open_record().validate().is_ok());
    }

    #[test]
    fn test_validate_lehnt_falsche_punktzahl_ab() {
        let mut record = open_record();
        record.points.push(Vec3::ZERO);
        assert!(record.validate().is_err());

        // 4 Punkte reichen nicht für einen geschlossenen Pfad
        let mut record = open_record();
        record.closed = true;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_lehnt_falsche_winkelzahl_ab() {
        let mut record = open_record();
        record.per_anchor_normal_angle.push(10.0);
        let err = record.validate().expect_err("Fehler erwartet");
        assert!(err.to_string().contains("Anker-Winkel"));
    }

    #[test]
    fn test_validate_lehnt_nan_ab() {
        let mut record = open_record();
        record.points[2] = Vec3::new(f32::NAN, 0.0, 0.0);
        assert!(record.validate().is_err());
    }
}
