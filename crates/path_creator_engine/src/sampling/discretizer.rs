//! Zerlegt einen Bezier-Pfad in eine Vertex-Tabelle.
//!
//! Zwei Strategien: winkel-adaptiv (wenige Vertices auf Geraden, viele in
//! Kurven) und gleichabständig. Beide laufen jedes Segment in
//! `ceil(geschätzte_länge · accuracy)` gleichmäßigen Teilschritten ab.

use anyhow::{Result, ensure};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{BezierPath, MinMax3D};
use crate::shared::{cubic_bezier, geometry};

/// Standard-Teilschritte pro Längeneinheit.
pub const DEFAULT_ACCURACY: f32 = 10.0;
/// Standard-Winkelfehler in Grad, ab dem ein Vertex gesetzt wird.
pub const DEFAULT_MAX_ANGLE_ERROR: f32 = 0.3;
/// Standard-Mindestabstand zwischen zwei Vertices.
pub const DEFAULT_MIN_VERTEX_SPACING: f32 = 0.01;

/// Zwischenergebnis der Diskretisierung.
#[derive(Debug, Clone, Default)]
pub struct PathSplitData {
    pub vertices: Vec<Vec3>,
    pub tangents: Vec<Vec3>,
    pub cumulative_lengths: Vec<f32>,
    /// Vertex-Index je Segmentgrenze (`num_segments + 1` Einträge)
    pub anchor_vertex_map: Vec<usize>,
    pub bounds: MinMax3D,
}

impl PathSplitData {
    /// Startzustand: Vertex 0 = Pfadanfang, Tangente von Segment 0 bei t = 0.
    fn seeded(path: &BezierPath) -> Self {
        let [p0, p1, p2, p3] = path.points_in_segment(0);
        let mut data = Self::default();
        data.push(p0, cubic_bezier::tangent(p0, p1, p2, p3, 0.0), 0.0);
        data.anchor_vertex_map.push(0);
        data
    }

    fn push(&mut self, vertex: Vec3, tangent: Vec3, cumulative_length: f32) {
        self.vertices.push(vertex);
        self.tangents.push(tangent);
        self.cumulative_lengths.push(cumulative_length);
        self.bounds.add(vertex);
    }

    fn close_segment(&mut self) {
        self.anchor_vertex_map.push(self.vertices.len() - 1);
    }
}

/// Parameter der Diskretisierung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DiscretizeSettings {
    /// Winkel-adaptiv
    AngleError {
        max_angle_error: f32,
        min_vertex_spacing: f32,
        accuracy: f32,
    },
    /// Gleichabständig
    Spacing { spacing: f32, accuracy: f32 },
}

impl Default for DiscretizeSettings {
    fn default() -> Self {
        DiscretizeSettings::AngleError {
            max_angle_error: DEFAULT_MAX_ANGLE_ERROR,
            min_vertex_spacing: DEFAULT_MIN_VERTEX_SPACING,
            accuracy: DEFAULT_ACCURACY,
        }
    }
}

impl DiscretizeSettings {
    /// Lehnt Parameter ab, mit denen die Diskretisierung nicht terminieren würde.
    pub fn validate(&self) -> Result<()> {
        match *self {
            DiscretizeSettings::AngleError {
                max_angle_error,
                min_vertex_spacing,
                accuracy,
            } => {
                ensure!(
                    max_angle_error.is_finite() && max_angle_error > 0.0,
                    "max_angle_error muss > 0 sein (erhalten: {max_angle_error})"
                );
                ensure!(
                    min_vertex_spacing.is_finite() && min_vertex_spacing >= 0.0,
                    "min_vertex_spacing darf nicht negativ sein (erhalten: {min_vertex_spacing})"
                );
                validate_accuracy(accuracy)
            }
            DiscretizeSettings::Spacing { spacing, accuracy } => {
                ensure!(
                    spacing.is_finite() && spacing > 0.0,
                    "spacing muss > 0 sein (erhalten: {spacing})"
                );
                validate_accuracy(accuracy)
            }
        }
    }

    /// Führt die passende Strategie aus.
    pub fn split(&self, path: &BezierPath) -> Result<PathSplitData> {
        match *self {
            DiscretizeSettings::AngleError {
                max_angle_error,
                min_vertex_spacing,
                accuracy,
            } => split_by_angle_error(path, max_angle_error, min_vertex_spacing, accuracy),
            DiscretizeSettings::Spacing { spacing, accuracy } => {
                split_evenly(path, spacing, accuracy)
            }
        }
    }
}

fn validate_accuracy(accuracy: f32) -> Result<()> {
    ensure!(
        accuracy.is_finite() && accuracy > 0.0,
        "accuracy muss > 0 sein (erhalten: {accuracy})"
    );
    Ok(())
}

fn step_count(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, accuracy: f32) -> usize {
    (cubic_bezier::estimate_length(p0, p1, p2, p3) * accuracy)
        .ceil()
        .max(1.0) as usize
}

/// Winkel-adaptive Zerlegung.
///
/// Ein Teilschritt-Punkt wird Vertex, wenn der Knick (lokal oder vom letzten
/// Vertex aus gesehen) `max_angle_error` übersteigt und er mindestens
/// `min_vertex_spacing` vom letzten Vertex entfernt ist. Der Endpunkt des
/// Pfads wird immer übernommen.
pub fn split_by_angle_error(
    path: &BezierPath,
    max_angle_error: f32,
    min_vertex_spacing: f32,
    accuracy: f32,
) -> Result<PathSplitData> {
    DiscretizeSettings::AngleError {
        max_angle_error,
        min_vertex_spacing,
        accuracy,
    }
    .validate()?;

    let mut data = PathSplitData::seeded(path);
    let mut prev_point = path.point(0);
    let mut last_added = prev_point;
    let mut current_length = 0.0;
    let segment_count = path.num_segments();

    for segment in 0..segment_count {
        let [p0, p1, p2, p3] = path.points_in_segment(segment);
        let divisions = step_count(p0, p1, p2, p3, accuracy);
        let increment = 1.0 / divisions as f32;

        for step in 1..=divisions {
            let t = step as f32 / divisions as f32;
            let is_last_point = segment == segment_count - 1 && step == divisions;
            let point = cubic_bezier::evaluate(p0, p1, p2, p3, t);
            // Am Segmentende fällt `next` mit `point` zusammen: Winkel 0, Fehler 180
            let next = cubic_bezier::evaluate(p0, p1, p2, p3, t + increment);
            data.bounds.add(point);

            let local_error = 180.0 - geometry::min_angle(prev_point, point, next);
            let vertex_error = 180.0 - geometry::min_angle(last_added, point, next);
            let angle_error = local_error.max(vertex_error);

            if (angle_error > max_angle_error && point.distance(last_added) >= min_vertex_spacing)
                || is_last_point
            {
                current_length += last_added.distance(point);
                data.push(
                    point,
                    cubic_bezier::tangent(p0, p1, p2, p3, t),
                    current_length,
                );
                last_added = point;
            }
            prev_point = point;
        }
        data.close_segment();
    }

    log::debug!(
        "Winkel-Diskretisierung: {} Segmente -> {} Vertices",
        segment_count,
        data.vertices.len()
    );
    Ok(data)
}

/// Gleichabständige Zerlegung.
///
/// Überschreitet die seit dem letzten Vertex gelaufene Strecke `spacing`,
/// wird der Punkt um den Überschuss zurückgezogen, übernommen und derselbe
/// Teilschritt erneut geprüft. Kommt der zurückgezogene Punkt dem Teilschritt
/// nicht näher als der vorherige, wird der Teilschritt unverändert übernommen.
pub fn split_evenly(path: &BezierPath, spacing: f32, accuracy: f32) -> Result<PathSplitData> {
    DiscretizeSettings::Spacing { spacing, accuracy }.validate()?;

    let mut data = PathSplitData::seeded(path);
    let mut prev_point = path.point(0);
    let mut last_added = prev_point;
    let mut current_length = 0.0;
    let mut distance_since_vertex = 0.0;
    let segment_count = path.num_segments();

    for segment in 0..segment_count {
        let [p0, p1, p2, p3] = path.points_in_segment(segment);
        let divisions = step_count(p0, p1, p2, p3, accuracy);

        let mut step = 1;
        while step <= divisions {
            let t = step as f32 / divisions as f32;
            let is_last_point = segment == segment_count - 1 && step == divisions;
            let mut point = cubic_bezier::evaluate(p0, p1, p2, p3, t);
            data.bounds.add(point);
            distance_since_vertex += prev_point.distance(point);

            let overshoot = distance_since_vertex - spacing;
            let mut overshot = overshoot > 0.0;
            if overshot {
                let pulled_back = point + (prev_point - point).normalize_or_zero() * overshoot;
                if pulled_back.distance(point) >= prev_point.distance(point) {
                    // Kein Fortschritt (spacing unterhalb der f32-Auflösung): Rohpunkt übernehmen
                    overshot = false;
                } else {
                    point = pulled_back;
                }
            }

            if distance_since_vertex >= spacing || is_last_point {
                current_length += last_added.distance(point);
                data.push(
                    point,
                    cubic_bezier::tangent(p0, p1, p2, p3, t),
                    current_length,
                );
                distance_since_vertex = 0.0;
                last_added = point;
            }
            prev_point = point;

            if !overshot {
                step += 1;
            }
        }
        data.close_segment();
    }

    log::debug!(
        "Abstands-Diskretisierung (spacing {spacing}): {} Segmente -> {} Vertices",
        segment_count,
        data.vertices.len()
    );
    Ok(data)
}
