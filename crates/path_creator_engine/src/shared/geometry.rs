//! Geometrie-Helfer für Punkte, Strecken und Geraden.
//!
//! Die 2D-Funktionen sind Zusatzwerkzeuge für Konsumenten (Picking, Mesh-Aufbau)
//! und melden parallele oder degenerierte Fälle als "keine Lösung".

use glam::{Vec2, Vec3};

/// Ungerichteter Winkel in Grad zwischen `a - b` und `c - b`, in [0, 180].
///
/// Liefert 0, wenn einer der Schenkel die Länge null hat.
pub fn min_angle(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    let ba = a - b;
    let bc = c - b;
    if ba.length_squared() <= f32::EPSILON * f32::EPSILON
        || bc.length_squared() <= f32::EPSILON * f32::EPSILON
    {
        return 0.0;
    }
    ba.angle_between(bc).to_degrees().clamp(0.0, 180.0)
}

/// Nächster Punkt auf der Strecke `a`–`b` zu `p`.
pub fn closest_point_on_segment(p: Vec3, a: Vec3, b: Vec3) -> Vec3 {
    a + (b - a) * segment_param(p - a, b - a)
}

/// 2D-Variante von [`closest_point_on_segment`].
pub fn closest_point_on_segment_2d(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    a + ab * ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
}

/// Projektionsparameter von `ap` auf `ab`, geklemmt auf [0, 1].
fn segment_param(ap: Vec3, ab: Vec3) -> f32 {
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return 0.0;
    }
    (ap.dot(ab) / len_sq).clamp(0.0, 1.0)
}

/// Schneiden sich die Strecken `a1`–`a2` und `b1`–`b2`? Parallele Strecken: `false`.
pub fn line_segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let d = (b2.x - b1.x) * (a1.y - a2.y) - (a1.x - a2.x) * (b2.y - b1.y);
    if d == 0.0 {
        return false;
    }
    let t = ((b1.y - b2.y) * (a1.x - b1.x) + (b2.x - b1.x) * (a1.y - b1.y)) / d;
    let u = ((a1.y - a2.y) * (a1.x - b1.x) + (a2.x - a1.x) * (a1.y - b1.y)) / d;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Schneiden sich die unendlichen Geraden durch `a1`,`a2` und `b1`,`b2`?
pub fn lines_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    line_denominator(a1, a2, b1, b2) != 0.0
}

/// Schnittpunkt der Geraden durch `a1`,`a2` und `b1`,`b2`; `None` bei Parallelität.
pub fn line_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let d = line_denominator(a1, a2, b1, b2);
    if d == 0.0 {
        return None;
    }
    let n = (a1.x - b1.x) * (b1.y - b2.y) - (a1.y - b1.y) * (b1.x - b2.x);
    Some(a1 + (a2 - a1) * (n / d))
}

fn line_denominator(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> f32 {
    (a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x)
}

/// Seite von `c` relativ zur Geraden `a → b`: -1, 0 oder 1.
pub fn side_of_line(a: Vec2, b: Vec2, c: Vec2) -> i32 {
    let value = (c.x - a.x) * (a.y - b.y) + (c.y - a.y) * (b.x - a.x);
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Liegt `p` im Dreieck `a`,`b`,`c` (inklusive Rand)? Degeneriertes Dreieck: `false`.
pub fn point_in_triangle(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    let area = 0.5 * (-b.y * c.x + a.y * (-b.x + c.x) + a.x * (b.y - c.y) + b.x * c.y);
    if area == 0.0 {
        return false;
    }
    let inv = 1.0 / (2.0 * area);
    let s = inv * (a.y * c.x - a.x * c.y + (c.y - a.y) * p.x + (a.x - c.x) * p.y);
    let t = inv * (a.x * b.y - a.y * b.x + (a.y - b.y) * p.x + (b.x - a.x) * p.y);
    s >= 0.0 && t >= 0.0 && s + t <= 1.0
}

/// Umlaufsinn eines Polygons (Shoelace); `true` für Uhrzeigersinn.
pub fn points_are_clockwise(points: &[Vec2]) -> bool {
    let signed_area: f32 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p, next)| (next.x - p.x) * (next.y + p.y))
        .sum();
    signed_area >= 0.0
}
