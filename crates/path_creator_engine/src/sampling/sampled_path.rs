//! Unveränderlicher, abgetasteter Pfad mit Frames und Abfragen.

use anyhow::{Result, ensure};
use glam::{Mat3, Quat, Vec3};

use super::discretizer::{DiscretizeSettings, PathSplitData};
use super::frames;
use crate::core::{BezierPath, MinMax3D, PathSpace};
use crate::shared::{angles, geometry};

/// Verhalten von Zeit-/Distanz-Abfragen außerhalb von [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndOfPath {
    /// Zeit wird periodisch gewickelt (1.0 → 0.0)
    #[default]
    Loop,
    /// Zeit wird auf [0, 1] geklemmt
    Clamp,
    /// Zeit pendelt zwischen Anfang und Ende
    Bounce,
}

impl EndOfPath {
    fn wrap(self, t: f32) -> f32 {
        match self {
            EndOfPath::Loop => t.rem_euclid(1.0),
            EndOfPath::Clamp => t.clamp(0.0, 1.0),
            EndOfPath::Bounce => angles::ping_pong(t, 1.0),
        }
    }
}

/// Ergebnis einer Nächster-Punkt-Suche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    pub point: Vec3,
    /// Zeit-Anteil in [0, 1]
    pub time: f32,
    /// Bogenlänge vom Pfadanfang bis `point`
    pub distance: f32,
}

/// Benachbarte Vertices einer Abfrage plus Interpolations-Anteil.
#[derive(Debug, Clone, Copy)]
struct TimeOnPath {
    previous: usize,
    next: usize,
    fraction: f32,
}

/// Polyline-Schnappschuss eines `BezierPath`.
///
/// Alle Vertex-Arrays sind parallel. `times` ist monoton steigend mit
/// `times[0] == 0` und `times[last] == 1`.
#[derive(Debug, Clone)]
pub struct SampledPath {
    points: Vec<Vec3>,
    tangents: Vec<Vec3>,
    normals: Vec<Vec3>,
    times: Vec<f32>,
    cumulative_lengths: Vec<f32>,
    length: f32,
    anchor_vertex_map: Vec<usize>,
    closed: bool,
    space: PathSpace,
    up: Vec3,
    bounds: MinMax3D,
}

impl SampledPath {
    /// Diskretisiert `path` mit `settings` und berechnet die Frames.
    pub fn build(path: &BezierPath, settings: &DiscretizeSettings) -> Result<Self> {
        let data = settings.split(path)?;
        Self::from_split_data(path, data)
    }

    /// Baut den Pfad aus einer fertigen Zerlegung von `path`.
    ///
    /// Lehnt leere oder nicht zu `path` passende Zerlegungen ab.
    pub fn from_split_data(path: &BezierPath, data: PathSplitData) -> Result<Self> {
        let count = data.vertices.len();
        ensure!(count > 0, "Zerlegung enthaelt keine Vertices");
        ensure!(
            data.tangents.len() == count && data.cumulative_lengths.len() == count,
            "Tangenten ({}) und Laengen ({}) passen nicht zu {count} Vertices",
            data.tangents.len(),
            data.cumulative_lengths.len()
        );
        ensure!(
            data.anchor_vertex_map.len() == path.num_segments() + 1,
            "Anker-Zuordnung hat {} Eintraege, erwartet {}",
            data.anchor_vertex_map.len(),
            path.num_segments() + 1
        );
        ensure!(
            data.anchor_vertex_map.iter().all(|v| *v < count),
            "Anker-Zuordnung verweist auf fehlende Vertices"
        );

        let PathSplitData {
            vertices,
            tangents,
            cumulative_lengths,
            anchor_vertex_map,
            bounds,
        } = data;

        let length = cumulative_lengths.last().copied().unwrap_or(0.0);
        let last_index = vertices.len().saturating_sub(1).max(1) as f32;
        let times: Vec<f32> = if length > 0.0 {
            cumulative_lengths.iter().map(|d| d / length).collect()
        } else {
            (0..vertices.len()).map(|i| i as f32 / last_index).collect()
        };

        let tangents: Vec<Vec3> = tangents.iter().map(|t| t.normalize_or_zero()).collect();
        let space = path.space();
        let up = frames::up_reference(&bounds, space);

        let normals = if space.is_planar() {
            frames::planar_normals(&tangents, up, path.flip_normals())
        } else {
            let mut normals = frames::rotation_minimizing_normals(&vertices, &tangents, up);
            if path.is_closed() {
                frames::correct_loop_seam(&mut normals, &tangents, &times);
            }
            let anchor_angles: Vec<f32> = (0..path.num_anchors())
                .map(|a| path.anchor_normal_angle(a) + path.global_normals_angle())
                .collect();
            frames::apply_anchor_twist(
                &mut normals,
                &tangents,
                &anchor_vertex_map,
                &anchor_angles,
                path.is_closed(),
            );
            if path.flip_normals() {
                normals.iter_mut().for_each(|n| *n = -*n);
            }
            normals
        };

        log::debug!(
            "SampledPath: {} Vertices, Länge {:.3}, up {:?}",
            vertices.len(),
            length,
            up
        );

        Ok(Self {
            points: vertices,
            tangents,
            normals,
            times,
            cumulative_lengths,
            length,
            anchor_vertex_map,
            closed: path.is_closed(),
            space,
            up,
            bounds,
        })
    }

    // ── Zugriff ─────────────────────────────────────────────────

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn tangents(&self) -> &[Vec3] {
        &self.tangents
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn times(&self) -> &[f32] {
        &self.times
    }

    pub fn cumulative_lengths(&self) -> &[f32] {
        &self.cumulative_lengths
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Gesamtlänge der Polyline.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Vertex-Index je Segmentgrenze.
    pub fn anchor_vertex_map(&self) -> &[usize] {
        &self.anchor_vertex_map
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn space(&self) -> PathSpace {
        self.space
    }

    /// Referenz-Up, aus dem die Normalen abgeleitet wurden.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn bounds(&self) -> MinMax3D {
        self.bounds
    }

    // ── Abfragen ────────────────────────────────────────────────

    /// Interpolierter Punkt bei Zeit-Anteil `t`.
    pub fn point_at_time(&self, t: f32, end: EndOfPath) -> Vec3 {
        let data = self.time_on_path(t, end);
        self.points[data.previous].lerp(self.points[data.next], data.fraction)
    }

    /// Interpolierte Einheits-Tangente bei `t`.
    pub fn direction_at_time(&self, t: f32, end: EndOfPath) -> Vec3 {
        let data = self.time_on_path(t, end);
        let fallback = self.tangents[data.previous];
        self.tangents[data.previous]
            .lerp(self.tangents[data.next], data.fraction)
            .normalize_or(fallback)
    }

    /// Interpolierte Einheits-Normale bei `t`.
    pub fn normal_at_time(&self, t: f32, end: EndOfPath) -> Vec3 {
        let data = self.time_on_path(t, end);
        let fallback = self.normals[data.previous];
        self.normals[data.previous]
            .lerp(self.normals[data.next], data.fraction)
            .normalize_or(fallback)
    }

    /// Orientierung bei `t`: lokales +Z entlang der Tangente, +Y entlang der Normale.
    pub fn rotation_at_time(&self, t: f32, end: EndOfPath) -> Quat {
        look_rotation(self.direction_at_time(t, end), self.normal_at_time(t, end))
    }

    pub fn point_at_distance(&self, distance: f32, end: EndOfPath) -> Vec3 {
        self.point_at_time(self.distance_to_time(distance), end)
    }

    pub fn direction_at_distance(&self, distance: f32, end: EndOfPath) -> Vec3 {
        self.direction_at_time(self.distance_to_time(distance), end)
    }

    pub fn normal_at_distance(&self, distance: f32, end: EndOfPath) -> Vec3 {
        self.normal_at_time(self.distance_to_time(distance), end)
    }

    pub fn rotation_at_distance(&self, distance: f32, end: EndOfPath) -> Quat {
        self.rotation_at_time(self.distance_to_time(distance), end)
    }

    /// Nächster Punkt der Polyline zu `query` (lineare Suche über alle Strecken).
    ///
    /// Bei geschlossenen Pfaden wird auch die Strecke vom letzten zum ersten
    /// Vertex geprüft.
    pub fn closest_point(&self, query: Vec3) -> ClosestPoint {
        let n = self.points.len();
        let Some(&first) = self.points.first() else {
            return ClosestPoint {
                point: query,
                time: 0.0,
                distance: 0.0,
            };
        };

        let mut best = (first, 0, 0, f32::INFINITY);
        let segment_count = if self.closed { n } else { n.saturating_sub(1) };
        for a in 0..segment_count {
            let b = (a + 1) % n;
            let candidate = geometry::closest_point_on_segment(query, self.points[a], self.points[b]);
            let dist_sq = candidate.distance_squared(query);
            if dist_sq < best.3 {
                best = (candidate, a, b, dist_sq);
            }
        }
        let (point, a, b, dist_sq) = best;
        if !dist_sq.is_finite() {
            // Nur ein Vertex
            return ClosestPoint {
                point: first,
                time: 0.0,
                distance: 0.0,
            };
        }

        // Die Wrap-Strecke endet bei Zeit 1 bzw. der vollen Länge
        let (time_b, length_b) = if b == 0 {
            (1.0, self.length)
        } else {
            (self.times[b], self.cumulative_lengths[b])
        };
        let segment_length = self.points[a].distance(self.points[b]);
        let along = self.points[a].distance(point);
        let fraction = if segment_length > 0.0 {
            along / segment_length
        } else {
            0.0
        };

        ClosestPoint {
            point,
            time: self.times[a] + (time_b - self.times[a]) * fraction,
            distance: self.cumulative_lengths[a] + (length_b - self.cumulative_lengths[a]) * fraction,
        }
    }

    // ── Intern ──────────────────────────────────────────────────

    fn distance_to_time(&self, distance: f32) -> f32 {
        if self.length > 0.0 {
            distance / self.length
        } else {
            0.0
        }
    }

    /// Binäre Suche über `times` nach dem Vertex-Paar, das `t` einschließt.
    fn time_on_path(&self, t: f32, end: EndOfPath) -> TimeOnPath {
        let n = self.times.len();
        if n < 2 {
            return TimeOnPath {
                previous: 0,
                next: 0,
                fraction: 0.0,
            };
        }
        let t = end.wrap(t);
        let next = self.times.partition_point(|&time| time < t).clamp(1, n - 1);
        let previous = next - 1;
        TimeOnPath {
            previous,
            next,
            fraction: angles::inverse_lerp(self.times[previous], self.times[next], t),
        }
    }
}

/// Rotation, die +Z auf `forward` und +Y möglichst auf `up` dreht.
fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let right = up.cross(forward).normalize_or_zero();
    if right == Vec3::ZERO {
        return Quat::from_rotation_arc(Vec3::Z, forward);
    }
    let true_up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, true_up, forward))
}
