//! Kopplungsregeln zwischen Kontrollpunkten.
//!
//! Jede Variante bringt ihre eigene Kopplungsfunktion mit, damit der
//! Mutationspfad in `BezierPath` nur einmal pro Edit verzweigt.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Regel, wie sich das Verschieben eines Kontrollpunkts auf seine Nachbarn auswirkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlMode {
    /// Partner bleibt kolinear durch den Anker, behält aber seinen eigenen Abstand
    #[default]
    Aligned,
    /// Partner bleibt kolinear und übernimmt den Abstand des bewegten Punkts
    Mirrored,
    /// Keine Kopplung
    Free,
    /// Kontrollpunkte werden aus den Ankerpositionen berechnet
    Automatic,
}

impl ControlMode {
    /// Direkte Kontrollpunkt-Edits sind nur außerhalb von `Automatic` erlaubt.
    pub fn accepts_control_edits(self) -> bool {
        !matches!(self, ControlMode::Automatic)
    }

    /// Beim Anhängen eines Segments oder Schließen des Pfads wird gespiegelt
    /// statt auf halbe Distanz ausgerichtet.
    pub fn mirrors_on_extend(self) -> bool {
        matches!(self, ControlMode::Mirrored | ControlMode::Automatic)
    }

    /// Neue Position des Partner-Kontrollpunkts, nachdem `moved` verschoben wurde.
    ///
    /// `None` bedeutet: Partner bleibt unverändert (Free, Automatic oder
    /// bewegter Punkt liegt exakt auf dem Anker).
    pub fn couple_partner(self, anchor: Vec3, moved: Vec3, partner: Vec3) -> Option<Vec3> {
        let distance = match self {
            ControlMode::Aligned => anchor.distance(partner),
            ControlMode::Mirrored => anchor.distance(moved),
            ControlMode::Free | ControlMode::Automatic => return None,
        };
        let dir = (anchor - moved).normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }
        Some(anchor + dir * distance)
    }

    /// Kontrollpunkt auf der Außenseite von `anchor`, gegenüber von `inner_control`.
    ///
    /// Spiegelt in `Mirrored`/`Automatic`; sonst ausgerichtet mit halber `span`-Länge.
    pub fn extension_control(self, anchor: Vec3, inner_control: Vec3, span: f32) -> Vec3 {
        let offset = anchor - inner_control;
        if self.mirrors_on_extend() {
            anchor + offset
        } else {
            anchor + offset.normalize_or_zero() * span * 0.5
        }
    }
}
