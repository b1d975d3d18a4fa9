//! Normalen-Berechnung für abgetastete Pfade.
//!
//! Ebene Pfade nutzen ein festes Referenz-Up, freie 3D-Pfade rotationsminimierende
//! Frames nach der Double-Reflection-Methode (Wang et al. 2008), optional mit
//! Naht-Korrektur für geschlossene Pfade und Twist pro Anker.

use glam::{Quat, Vec3};

use crate::core::{MinMax3D, PathSpace};
use crate::shared::angles;

/// Naht-Fehler in Grad, unterhalb dessen keine Korrektur stattfindet.
const LOOP_SEAM_TOLERANCE_DEG: f32 = 0.1;
const DEGENERATE_SQ: f32 = 1e-12;

/// Referenz-Up eines Pfads aus seiner Bounding-Box.
///
/// `Y`, wenn die z-Ausdehnung größer ist als die y-Ausdehnung, sonst `-Z`.
/// Bei Gleichstand entscheidet die Ebene (XZ → `Y`).
pub fn up_reference(bounds: &MinMax3D, space: PathSpace) -> Vec3 {
    let size = bounds.size();
    if size.z > size.y || (size.z == size.y && space == PathSpace::PlaneXZ) {
        Vec3::Y
    } else {
        Vec3::NEG_Z
    }
}

/// Normalen ebener Pfade: `tangent × up`, bei `flip` negiert.
pub fn planar_normals(tangents: &[Vec3], up: Vec3, flip: bool) -> Vec<Vec3> {
    let sign = if flip { -1.0 } else { 1.0 };
    tangents
        .iter()
        .map(|t| t.cross(up).normalize_or_zero() * sign)
        .collect()
}

/// Rotationsminimierende Normalen per doppelter Spiegelung.
///
/// Der Referenzvektor `r` startet als `up` (orthogonal zur ersten Tangente)
/// und wird von Vertex zu Vertex transportiert; die Normale ist `r × tangent`.
pub fn rotation_minimizing_normals(points: &[Vec3], tangents: &[Vec3], up: Vec3) -> Vec<Vec3> {
    let Some(&first_tangent) = tangents.first() else {
        return Vec::new();
    };

    let mut reference = orthogonal_reference(up, first_tangent);
    let mut normals = Vec::with_capacity(points.len());
    normals.push(reference.cross(first_tangent).normalize_or_zero());

    for i in 1..points.len() {
        let offset = points[i] - points[i - 1];
        let c1 = offset.length_squared();
        let (reflected_ref, reflected_tangent) = if c1 > DEGENERATE_SQ {
            (
                reference - offset * (2.0 / c1) * offset.dot(reference),
                tangents[i - 1] - offset * (2.0 / c1) * offset.dot(tangents[i - 1]),
            )
        } else {
            (reference, tangents[i - 1])
        };

        let v2 = tangents[i] - reflected_tangent;
        let c2 = v2.length_squared();
        let transported = if c2 > DEGENERATE_SQ {
            reflected_ref - v2 * (2.0 / c2) * v2.dot(reflected_ref)
        } else {
            reflected_ref
        };

        reference = orthogonal_reference(transported, tangents[i]);
        normals.push(reference.cross(tangents[i]).normalize_or_zero());
    }
    normals
}

/// `candidate` ohne Anteil entlang `tangent`, normalisiert; fällt auf eine
/// beliebige Senkrechte zurück, wenn beide parallel sind.
fn orthogonal_reference(candidate: Vec3, tangent: Vec3) -> Vec3 {
    let projected = candidate - tangent * candidate.dot(tangent);
    if projected.length_squared() > DEGENERATE_SQ {
        return projected.normalize();
    }
    let fallback = Vec3::X - tangent * tangent.x;
    if fallback.length_squared() > DEGENERATE_SQ {
        fallback.normalize()
    } else {
        tangent.any_orthonormal_vector()
    }
}

/// Vorzeichenbehafteter Winkel (Grad) von `from` nach `to` um `axis`.
pub fn signed_angle(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    let unsigned = from.angle_between(to).to_degrees();
    if axis.dot(from.cross(to)) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Verteilt den Winkel-Fehler an der Naht eines geschlossenen Pfads über alle Vertices.
///
/// Jede Normale wird um ihre Tangente mit `fehler · times[i]` gedreht, sodass
/// die letzte Normale auf der ersten landet.
pub fn correct_loop_seam(normals: &mut [Vec3], tangents: &[Vec3], times: &[f32]) {
    let (Some(&first), Some(&last)) = (normals.first(), normals.last()) else {
        return;
    };
    if first == Vec3::ZERO || last == Vec3::ZERO {
        return;
    }
    let seam_error = signed_angle(last, first, tangents[0]);
    if seam_error.abs() <= LOOP_SEAM_TOLERANCE_DEG {
        return;
    }
    log::debug!("Naht-Korrektur: {seam_error:.3} Grad");
    for i in 1..normals.len() {
        let rotation = Quat::from_axis_angle(tangents[i], (seam_error * times[i]).to_radians());
        normals[i] = rotation * normals[i];
    }
}

/// Dreht die Normalen zwischen zwei Ankern um ihre Tangente.
///
/// `anchor_angles[a]` ist der Gesamt-Winkel (Anker + global) in Grad. Zwischen
/// zwei Ankern wird entlang des kürzeren Bogens nach Vertex-Index interpoliert.
pub fn apply_anchor_twist(
    normals: &mut [Vec3],
    tangents: &[Vec3],
    anchor_vertex_map: &[usize],
    anchor_angles: &[f32],
    closed: bool,
) {
    if anchor_vertex_map.len() < 2 || anchor_angles.is_empty() {
        return;
    }
    let runs = anchor_vertex_map.len() - 1;
    for anchor in 0..runs {
        let next_anchor = if closed {
            (anchor + 1) % anchor_angles.len()
        } else {
            (anchor + 1).min(anchor_angles.len() - 1)
        };
        let start_angle = anchor_angles[anchor.min(anchor_angles.len() - 1)];
        let delta = angles::delta_angle(start_angle, anchor_angles[next_anchor]);

        let start_vertex = anchor_vertex_map[anchor];
        let span = anchor_vertex_map[anchor + 1] - start_vertex;
        let count = if anchor == runs - 1 { span + 1 } else { span };

        for i in 0..count {
            let t = if span == 0 {
                1.0
            } else {
                i as f32 / span as f32
            };
            let vertex = start_vertex + i;
            let angle = start_angle + delta * t;
            if angle == 0.0 {
                continue;
            }
            let rotation = Quat::from_axis_angle(tangents[vertex], angle.to_radians());
            normals[vertex] = rotation * normals[vertex];
        }
    }
}
