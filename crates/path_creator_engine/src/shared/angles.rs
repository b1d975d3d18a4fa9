//! Skalare Hilfsfunktionen für Winkel (Grad) und Intervalle.

/// Wickelt `value` periodisch in [0, `length`].
pub fn repeat(value: f32, length: f32) -> f32 {
    (value - (value / length).floor() * length).clamp(0.0, length)
}

/// Pendelt `value` zwischen 0 und `length` hin und her.
pub fn ping_pong(value: f32, length: f32) -> f32 {
    let wrapped = repeat(value, length * 2.0);
    length - (wrapped - length).abs()
}

/// Normalisiert einen Winkel in [0, 360).
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid kann bei sehr kleinen negativen Werten genau 360 liefern
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Kürzeste vorzeichenbehaftete Differenz `current → target` in (-180, 180].
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = repeat(target - current, 360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Interpoliert zwei Winkel entlang des kürzeren Bogens; `t` wird auf [0, 1] geklemmt.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + delta_angle(from, to) * t.clamp(0.0, 1.0)
}

/// Anteil von `value` zwischen `a` und `b`, geklemmt auf [0, 1]; 0 bei `a == b`.
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        0.0
    } else {
        ((value - a) / (b - a)).clamp(0.0, 1.0)
    }
}
