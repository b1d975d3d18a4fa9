//! Reine Funktionen für kubische Bézier-Segmente (4 Kontrollpunkte).
//!
//! Alle Auswertungen klemmen `t` auf [0, 1]. Degenerierte Richtungen liefern
//! `Vec3::ZERO` statt NaN.

use glam::Vec3;

use crate::core::MinMax3D;

/// Schrittweite für die Tangenten-Näherung bei verschwindender Ableitung.
const TANGENT_FALLBACK_STEP: f32 = 1e-3;

/// Punkt auf dem Segment bei `t` (Bernstein-Form).
pub fn evaluate(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Erste Ableitung nach `t`.
pub fn derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    3.0 * u * u * (p1 - p0) + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Zweite Ableitung nach `t`.
pub fn second_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    6.0 * (1.0 - t) * (p2 - 2.0 * p1 + p0) + 6.0 * t * (p3 - 2.0 * p2 + p1)
}

/// Normalen-Schätzung `(d2 × d1) × d1`, normalisiert.
///
/// Bei gerader Kurve oder verschwindender Ableitung: `Vec3::ZERO`.
pub fn normal(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let d1 = derivative(p0, p1, p2, p3, t);
    let d2 = second_derivative(p0, p1, p2, p3, t);
    d2.cross(d1).cross(d1).normalize_or_zero()
}

/// Einheits-Tangente bei `t`.
///
/// Fällt auf eine Differenzen-Näherung zurück, wenn die Ableitung verschwindet
/// (Kontrollpunkt liegt auf dem Anker).
pub fn tangent(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let d = derivative(p0, p1, p2, p3, t).normalize_or_zero();
    if d != Vec3::ZERO {
        return d;
    }
    let t = t.clamp(0.0, 1.0);
    let before = evaluate(p0, p1, p2, p3, t - TANGENT_FALLBACK_STEP);
    let after = evaluate(p0, p1, p2, p3, t + TANGENT_FALLBACK_STEP);
    let approx = (after - before).normalize_or_zero();
    if approx != Vec3::ZERO {
        approx
    } else {
        (p3 - p0).normalize_or_zero()
    }
}

/// Grobe Längen-Überschätzung: Sehne + halbe Kontrollpolygon-Länge.
///
/// Nur für die Schrittzahl der Diskretisierung gedacht, nicht als Bogenlänge.
pub fn estimate_length(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> f32 {
    let control_net = p0.distance(p1) + p1.distance(p2) + p2.distance(p3);
    p0.distance(p3) + control_net * 0.5
}

/// De-Casteljau-Teilung bei `t` in zwei Teilsegmente.
///
/// Beide Hälften treffen sich exakt in `evaluate(…, t)`.
pub fn subdivide(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> ([Vec3; 4], [Vec3; 4]) {
    let t = t.clamp(0.0, 1.0);
    let a = p0.lerp(p1, t);
    let b = p1.lerp(p2, t);
    let c = p2.lerp(p3, t);
    let ab = a.lerp(b, t);
    let bc = b.lerp(c, t);
    let split = ab.lerp(bc, t);
    ([p0, a, ab, split], [split, bc, c, p3])
}

/// Parameterwerte strikt in (0, 1), an denen eine Achse ein Extremum hat.
///
/// Nullstellen des quadratischen Ableitungspolynoms je Achse; der lineare
/// Fall (quadratischer Koeffizient ≈ 0) wird mit abgedeckt.
pub fn extreme_times(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Vec<f32> {
    let a = 3.0 * (-p0 + 3.0 * p1 - 3.0 * p2 + p3);
    let b = 6.0 * (p0 - 2.0 * p1 + p2);
    let c = 3.0 * (p1 - p0);

    let mut times = Vec::with_capacity(6);
    for axis in 0..3 {
        for root in quadratic_roots(a[axis], b[axis], c[axis]) {
            if root > 0.0 && root < 1.0 {
                times.push(root);
            }
        }
    }
    times
}

/// Bounding-Box aus beiden Ankern plus allen Extrempunkten.
pub fn segment_bounds(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> MinMax3D {
    let mut bounds = MinMax3D::new();
    bounds.add(p0);
    bounds.add(p3);
    for t in extreme_times(p0, p1, p2, p3) {
        bounds.add(evaluate(p0, p1, p2, p3, t));
    }
    bounds
}

/// Reelle Nullstellen von `a·t² + b·t + c` (0, 1 oder 2 Werte).
fn quadratic_roots(a: f32, b: f32, c: f32) -> Vec<f32> {
    const EPS: f32 = 1e-6;
    if a.abs() < EPS {
        if b.abs() < EPS {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    let sqrt = discriminant.sqrt();
    vec![(-b + sqrt) / (2.0 * a), (-b - sqrt) / (2.0 * a)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arc() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 1.0),
            Vec3::new(3.0, 2.0, -1.0),
            Vec3::new(3.0, 0.0, 0.5),
        ]
    }

    #[test]
    fn test_evaluate_trifft_beide_anker() {
        let [p0, p1, p2, p3] = arc();
        assert_eq!(evaluate(p0, p1, p2, p3, 0.0), p0);
        assert!(evaluate(p0, p1, p2, p3, 1.0).distance(p3) < 1e-6);
    }

    #[test]
    fn test_evaluate_klemmt_t() {
        let [p0, p1, p2, p3] = arc();
        assert_eq!(evaluate(p0, p1, p2, p3, -3.0), p0);
        assert!(evaluate(p0, p1, p2, p3, 7.0).distance(p3) < 1e-6);
    }

    #[test]
    fn test_derivative_entspricht_differenzenquotient() {
        let [p0, p1, p2, p3] = arc();
        let h = 1e-3;
        let t = 0.4;
        let numeric =
            (evaluate(p0, p1, p2, p3, t + h) - evaluate(p0, p1, p2, p3, t - h)) / (2.0 * h);
        let analytic = derivative(p0, p1, p2, p3, t);
        assert!(numeric.distance(analytic) < 1e-2);
    }

    #[test]
    fn test_normal_einer_geraden_ist_null() {
        let p0 = Vec3::ZERO;
        let p3 = Vec3::new(3.0, 0.0, 0.0);
        let n = normal(p0, p0.lerp(p3, 1.0 / 3.0), p0.lerp(p3, 2.0 / 3.0), p3, 0.5);
        assert_eq!(n, Vec3::ZERO);
        assert!(!n.is_nan());
    }

    #[test]
    fn test_tangent_bei_kontrollpunkt_auf_anker() {
        let p0 = Vec3::ZERO;
        let p3 = Vec3::new(4.0, 0.0, 0.0);
        let t = tangent(p0, p0, Vec3::new(2.0, 0.0, 0.0), p3, 0.0);
        assert_relative_eq!(t.x, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_subdivide_trifft_sich_im_teilungspunkt() {
        let [p0, p1, p2, p3] = arc();
        let (left, right) = subdivide(p0, p1, p2, p3, 0.3);
        let split = evaluate(p0, p1, p2, p3, 0.3);

        assert!(left[3].distance(split) < 1e-5);
        assert_eq!(left[3], right[0]);
        assert_eq!(left[0], p0);
        assert_eq!(right[3], p3);

        // Teilkurven beschreiben dieselbe Kurve
        let on_left = evaluate(left[0], left[1], left[2], left[3], 0.5);
        let on_full = evaluate(p0, p1, p2, p3, 0.15);
        assert!(on_left.distance(on_full) < 1e-5);
    }

    #[test]
    fn test_estimate_length_ueberschaetzt_sehne() {
        let [p0, p1, p2, p3] = arc();
        assert!(estimate_length(p0, p1, p2, p3) >= p0.distance(p3));
    }

    #[test]
    fn test_extreme_times_liegen_im_offenen_intervall() {
        let [p0, p1, p2, p3] = arc();
        let times = extreme_times(p0, p1, p2, p3);
        assert!(!times.is_empty());
        assert!(times.iter().all(|t| *t > 0.0 && *t < 1.0));
    }

    #[test]
    fn test_extreme_times_linearer_fall() {
        // y-Achse: quadratischer Koeffizient verschwindet, Scheitel bei t = 0.5
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(1.0, 1.0, 0.0);
        let p2 = Vec3::new(2.0, 1.0, 0.0);
        let p3 = Vec3::new(3.0, 0.0, 0.0);
        let times = extreme_times(p0, p1, p2, p3);
        assert!(times.iter().any(|t| (t - 0.5).abs() < 1e-5));
    }

    #[test]
    fn test_segment_bounds_umfasst_scheitel() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(0.0, 4.0, 0.0);
        let p2 = Vec3::new(2.0, 4.0, 0.0);
        let p3 = Vec3::new(2.0, 0.0, 0.0);
        let bounds = segment_bounds(p0, p1, p2, p3);

        // Scheitel der Kurve: y = 3 bei t = 0.5
        assert_relative_eq!(bounds.max.y, 3.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.min.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(bounds.max.x, 2.0, epsilon = 1e-6);
    }
}
