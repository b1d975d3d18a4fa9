//! Bezier-Pfad: geordnete Kontrollpunkte mit Ankern auf Indizes ≡ 0 (mod 3).
//!
//! Je vier aufeinanderfolgende Punkte (Anker, Kontrolle, Kontrolle, Anker)
//! bilden ein kubisches Segment. Ein geschlossener Pfad hängt zwei weitere
//! Kontrollpunkte an, die den letzten Anker mit dem ersten verbinden.
//!
//! Statt Beobachter-Callbacks zählt jede Mutation `version()` genau einmal
//! hoch. Konsumenten vergleichen die Version mit der zuletzt gesehenen und
//! bauen abgeleitete Daten bei Bedarf neu.

use std::sync::OnceLock;

use anyhow::{Result, ensure};
use glam::Vec3;

use super::{BezierPathRecord, ControlMode, MinMax3D, PathSpace};
use crate::shared::{angles, cubic_bezier};

/// Standard-Länge der automatisch gesetzten Kontrollpunkte (Anteil der Nachbar-Distanz).
pub const DEFAULT_AUTO_CONTROL_LENGTH: f32 = 0.3;
/// Untergrenze für `auto_control_length`.
pub const MIN_AUTO_CONTROL_LENGTH: f32 = 0.01;

/// Halbe Breite der Standard-Form (Anker bei `center ± 2·X`).
const DEFAULT_HALF_WIDTH: f32 = 2.0;
const DEFAULT_CONTROL_WIDTH: f32 = 1.0;
const DEFAULT_CONTROL_HEIGHT: f32 = 0.5;

/// Veränderbarer Kontrollpunkt-Graph eines Pfads.
#[derive(Debug, Clone)]
pub struct BezierPath {
    points: Vec<Vec3>,
    closed: bool,
    space: PathSpace,
    control_mode: ControlMode,
    auto_control_length: f32,
    /// Twist je Anker in Grad
    per_anchor_normal_angle: Vec<f32>,
    global_normals_angle: f32,
    flip_normals: bool,
    version: u64,
    bounds_cache: OnceLock<MinMax3D>,
}

impl Default for BezierPath {
    fn default() -> Self {
        Self::new(Vec3::ZERO, false, PathSpace::Free3D)
    }
}

impl BezierPath {
    /// Erstellt die Standard-Form: zwei Anker bei `center ± (2, 0, 0)`, ein Segment.
    ///
    /// Die Kontrollpunkte liegen leicht versetzt in der Pfad-Ebene, damit die
    /// Kurve sichtbar gebogen ist. Die Version startet bei 0.
    pub fn new(center: Vec3, closed: bool, space: PathSpace) -> Self {
        let lift = if space == PathSpace::PlaneXZ {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let points = [
            center - Vec3::X * DEFAULT_HALF_WIDTH,
            center - Vec3::X * DEFAULT_CONTROL_WIDTH + lift * DEFAULT_CONTROL_HEIGHT,
            center + Vec3::X * DEFAULT_CONTROL_WIDTH - lift * DEFAULT_CONTROL_HEIGHT,
            center + Vec3::X * DEFAULT_HALF_WIDTH,
        ]
        .into_iter()
        .map(|p| space.project(p))
        .collect();

        let mut path = Self::from_points(points, false, space, ControlMode::default());
        path.set_closed(closed);
        path.version = 0;
        path
    }

    /// Baut einen Pfad durch `anchors` im `Automatic`-Modus.
    pub fn from_anchors(anchors: &[Vec3], closed: bool, space: PathSpace) -> Result<Self> {
        ensure!(
            anchors.len() >= 2,
            "Mindestens zwei Anker erforderlich (erhalten: {})",
            anchors.len()
        );
        ensure!(
            anchors.iter().all(|a| a.is_finite()),
            "Anker-Koordinaten muessen endlich sein"
        );

        let anchors: Vec<Vec3> = anchors.iter().map(|a| space.project(*a)).collect();
        let mut points = Vec::with_capacity(anchors.len() * 3 + 2);
        points.push(anchors[0]);
        for pair in anchors.windows(2) {
            // Platzhalter, werden von auto_set_all_controls überschrieben
            points.extend([pair[0], pair[1], pair[1]]);
        }
        if closed {
            points.extend([anchors[anchors.len() - 1], anchors[0]]);
        }

        let mut path = Self::from_points(points, closed, space, ControlMode::Automatic);
        path.auto_set_all_controls();
        log::debug!(
            "Pfad aus {} Ankern erstellt (geschlossen: {})",
            anchors.len(),
            closed
        );
        Ok(path)
    }

    /// Stellt einen Pfad aus einem gespeicherten Datensatz wieder her.
    pub fn from_record(record: BezierPathRecord) -> Result<Self> {
        record.validate()?;
        let mut path = Self::from_points(
            record.points,
            record.closed,
            record.space,
            record.control_mode,
        );
        path.auto_control_length = record.auto_control_length.max(MIN_AUTO_CONTROL_LENGTH);
        path.per_anchor_normal_angle = record
            .per_anchor_normal_angle
            .into_iter()
            .map(angles::normalize_degrees)
            .collect();
        path.global_normals_angle = angles::normalize_degrees(record.global_normals_angle);
        path.flip_normals = record.flip_normals;
        Ok(path)
    }

    /// Flacher Datensatz zum Speichern.
    pub fn to_record(&self) -> BezierPathRecord {
        BezierPathRecord {
            points: self.points.clone(),
            closed: self.closed,
            space: self.space,
            control_mode: self.control_mode,
            auto_control_length: self.auto_control_length,
            per_anchor_normal_angle: self.per_anchor_normal_angle.clone(),
            global_normals_angle: self.global_normals_angle,
            flip_normals: self.flip_normals,
        }
    }

    fn from_points(
        points: Vec<Vec3>,
        closed: bool,
        space: PathSpace,
        control_mode: ControlMode,
    ) -> Self {
        let anchor_count = if closed {
            points.len() / 3
        } else {
            (points.len() + 2) / 3
        };
        Self {
            points,
            closed,
            space,
            control_mode,
            auto_control_length: DEFAULT_AUTO_CONTROL_LENGTH,
            per_anchor_normal_angle: vec![0.0; anchor_count],
            global_normals_angle: 0.0,
            flip_normals: false,
            version: 0,
            bounds_cache: OnceLock::new(),
        }
    }

    // ── Lesezugriff ─────────────────────────────────────────────────

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Punkt `i`; Index außerhalb ist ein Aufruffehler und paniked.
    pub fn point(&self, i: usize) -> Vec3 {
        self.points[i]
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_segments(&self) -> usize {
        self.points.len() / 3
    }

    pub fn num_anchors(&self) -> usize {
        if self.closed {
            self.points.len() / 3
        } else {
            (self.points.len() + 2) / 3
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn space(&self) -> PathSpace {
        self.space
    }

    pub fn control_mode(&self) -> ControlMode {
        self.control_mode
    }

    pub fn auto_control_length(&self) -> f32 {
        self.auto_control_length
    }

    pub fn global_normals_angle(&self) -> f32 {
        self.global_normals_angle
    }

    pub fn flip_normals(&self) -> bool {
        self.flip_normals
    }

    /// Modifikations-Zähler; steigt bei jeder benachrichtigenden Mutation um 1.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Twist-Winkel des Ankers mit Ordinalzahl `anchor` in [0, 360).
    pub fn anchor_normal_angle(&self, anchor: usize) -> f32 {
        angles::normalize_degrees(self.per_anchor_normal_angle[anchor])
    }

    /// Die vier Punkte eines Segments; `segment_index` wird auf gültige Segmente geklemmt.
    pub fn points_in_segment(&self, segment_index: usize) -> [Vec3; 4] {
        let segment = segment_index.min(self.num_segments().saturating_sub(1));
        let start = segment * 3;
        [
            self.points[start],
            self.points[start + 1],
            self.points[start + 2],
            self.points[self.loop_index(start as isize + 3)],
        ]
    }

    /// Bounding-Box aus Ankern und analytischen Extrempunkten, gecacht bis zur nächsten Mutation.
    pub fn path_bounds(&self) -> MinMax3D {
        *self.bounds_cache.get_or_init(|| {
            let mut bounds = MinMax3D::new();
            for segment in 0..self.num_segments() {
                let [p0, p1, p2, p3] = self.points_in_segment(segment);
                let segment_bounds = cubic_bezier::segment_bounds(p0, p1, p2, p3);
                bounds.add(segment_bounds.min);
                bounds.add(segment_bounds.max);
            }
            bounds
        })
    }

    // ── Mutationen ──────────────────────────────────────────────────

    /// Verschiebt Punkt `i` nach `position` (auf die Pfad-Ebene projiziert).
    ///
    /// Anker nehmen ihre beiden Kontrollpunkte mit (bzw. lösen im
    /// `Automatic`-Modus eine Neuberechnung aus). Kontrollpunkte koppeln ihren
    /// Partner gemäß `ControlMode`; im `Automatic`-Modus werden sie ignoriert.
    /// Mit `suppress_notification` bleibt die Version unverändert, der
    /// Bounds-Cache wird trotzdem verworfen.
    pub fn move_point(&mut self, i: usize, position: Vec3, suppress_notification: bool) {
        assert!(
            i < self.points.len(),
            "Punkt-Index {i} ausserhalb des Pfads ({} Punkte)",
            self.points.len()
        );
        let is_anchor = i % 3 == 0;
        if !is_anchor && !self.control_mode.accepts_control_edits() {
            log::debug!("Kontrollpunkt {i} im Automatic-Modus ignoriert");
            return;
        }

        let position = self.space.project(position);
        let delta = position - self.points[i];
        self.points[i] = position;

        if self.control_mode == ControlMode::Automatic {
            self.auto_set_affected_controls(i);
        } else if is_anchor {
            for neighbour in [i as isize - 1, i as isize + 1] {
                if let Some(index) = self.wrapped_index(neighbour) {
                    self.points[index] += delta;
                }
            }
        } else {
            self.couple_partner_of(i);
        }

        self.bounds_cache.take();
        if !suppress_notification {
            self.version += 1;
        }
    }

    /// Hängt vorne ein Segment mit neuem Anker an. Bei geschlossenem Pfad: no-op.
    pub fn add_segment_to_start(&mut self, anchor: Vec3) {
        if self.closed {
            log::warn!("add_segment_to_start auf geschlossenem Pfad ignoriert");
            return;
        }
        let anchor = self.space.project(anchor);
        let first = self.points[0];
        let second_control =
            self.control_mode
                .extension_control(first, self.points[1], first.distance(anchor));
        let new_control = (anchor + second_control) * 0.5;

        self.points
            .splice(0..0, [anchor, new_control, second_control]);
        self.per_anchor_normal_angle
            .insert(0, self.per_anchor_normal_angle[0]);

        if self.control_mode == ControlMode::Automatic {
            self.auto_set_affected_controls(0);
        }
        log::debug!("Segment am Anfang angehaengt ({} Punkte)", self.points.len());
        self.notify_modified();
    }

    /// Hängt hinten ein Segment mit neuem Anker an. Bei geschlossenem Pfad: no-op.
    pub fn add_segment_to_end(&mut self, anchor: Vec3) {
        if self.closed {
            log::warn!("add_segment_to_end auf geschlossenem Pfad ignoriert");
            return;
        }
        let anchor = self.space.project(anchor);
        let last_index = self.points.len() - 1;
        let last = self.points[last_index];
        let second_control = self.control_mode.extension_control(
            last,
            self.points[last_index - 1],
            last.distance(anchor),
        );
        let new_control = (anchor + second_control) * 0.5;

        self.points.extend([second_control, new_control, anchor]);
        let last_angle = self.per_anchor_normal_angle[self.per_anchor_normal_angle.len() - 1];
        self.per_anchor_normal_angle.push(last_angle);

        if self.control_mode == ControlMode::Automatic {
            self.auto_set_affected_controls(self.points.len() - 1);
        }
        log::debug!("Segment am Ende angehaengt ({} Punkte)", self.points.len());
        self.notify_modified();
    }

    /// Fügt im Segment `segment_index` bei `split_time` einen neuen Anker ein.
    ///
    /// Außerhalb von `Automatic` wird das Segment per De Casteljau geteilt und
    /// der neue Anker samt seinen Kontrollpunkten nach `anchor` verschoben.
    pub fn split_segment(&mut self, anchor: Vec3, segment_index: usize, split_time: f32) {
        assert!(
            segment_index < self.num_segments(),
            "Segment-Index {segment_index} ausserhalb des Pfads ({} Segmente)",
            self.num_segments()
        );
        let split_time = split_time.clamp(0.0, 1.0);
        let anchor = self.space.project(anchor);
        let insert_at = segment_index * 3 + 2;
        let new_anchor = segment_index * 3 + 3;

        if self.control_mode == ControlMode::Automatic {
            self.points
                .splice(insert_at..insert_at, [Vec3::ZERO, anchor, Vec3::ZERO]);
            self.auto_set_affected_controls(new_anchor);
        } else {
            let [p0, p1, p2, p3] = self.points_in_segment(segment_index);
            let (left, right) = cubic_bezier::subdivide(p0, p1, p2, p3, split_time);
            self.points
                .splice(insert_at..insert_at, [left[2], right[0], right[1]]);
            self.points[new_anchor - 2] = left[1];
            self.points[new_anchor + 2] = right[2];

            let offset = anchor - right[0];
            self.points[new_anchor] = anchor;
            self.points[new_anchor - 1] += offset;
            self.points[new_anchor + 1] += offset;

            if self.control_mode == ControlMode::Mirrored {
                let before = self.points[new_anchor - 1] - anchor;
                let after = self.points[new_anchor + 1] - anchor;
                let average = (before.length() + after.length()) * 0.5;
                self.points[new_anchor - 1] = anchor + before.normalize_or_zero() * average;
                self.points[new_anchor + 1] = anchor + after.normalize_or_zero() * average;
            }
        }

        let angle_count = self.per_anchor_normal_angle.len();
        let previous = self.per_anchor_normal_angle[segment_index];
        let next = self.per_anchor_normal_angle[(segment_index + 1) % angle_count];
        let split_angle = angles::normalize_degrees(angles::lerp_angle(previous, next, split_time));
        self.per_anchor_normal_angle
            .insert(segment_index + 1, split_angle);

        log::debug!("Segment {segment_index} bei t={split_time:.3} geteilt");
        self.notify_modified();
    }

    /// Entfernt den Anker `anchor_index` samt seinen Kontrollpunkten.
    ///
    /// Ein offener Pfad behält mindestens ein Segment, ein geschlossener
    /// mindestens zwei. Liefert `false`, wenn nichts gelöscht wurde.
    pub fn delete_segment(&mut self, anchor_index: usize) -> bool {
        assert!(
            anchor_index % 3 == 0 && anchor_index < self.points.len(),
            "Index {anchor_index} ist kein Anker"
        );
        let segments = self.num_segments();
        if !(segments > 2 || (!self.closed && segments > 1)) {
            log::warn!("Anker {anchor_index} nicht geloescht: Pfad hat nur {segments} Segment(e)");
            return false;
        }

        let len = self.points.len();
        if anchor_index == 0 {
            if self.closed {
                self.points[len - 1] = self.points[2];
            }
            self.points.drain(0..3);
        } else if anchor_index == len - 1 && !self.closed {
            self.points.drain(anchor_index - 2..=anchor_index);
        } else {
            self.points.drain(anchor_index - 1..anchor_index + 2);
        }
        self.per_anchor_normal_angle.remove(anchor_index / 3);

        if self.control_mode == ControlMode::Automatic {
            self.auto_set_all_controls();
        }
        log::debug!("Anker {anchor_index} geloescht ({} Punkte)", self.points.len());
        self.notify_modified();
        true
    }

    /// Schließt oder öffnet den Pfad über zwei zusätzliche Kontrollpunkte.
    pub fn set_closed(&mut self, closed: bool) {
        if self.closed == closed {
            return;
        }
        self.closed = closed;

        if closed {
            let len = self.points.len();
            let first = self.points[0];
            let last = self.points[len - 1];
            let span = first.distance(last);
            let last_out = self
                .control_mode
                .extension_control(last, self.points[len - 2], span);
            let first_in = self
                .control_mode
                .extension_control(first, self.points[1], span);
            self.points.extend([last_out, first_in]);
        } else {
            let len = self.points.len();
            self.points.truncate(len - 2);
        }

        if self.control_mode == ControlMode::Automatic {
            self.auto_set_start_and_end_controls();
        }
        self.notify_modified();
    }

    /// Wechselt die Pfad-Ebene und schreibt alle Punkte um.
    ///
    /// Von 3D in eine Ebene wird die Achse mit der kleinsten Ausdehnung verworfen.
    pub fn set_space(&mut self, space: PathSpace) {
        if self.space == space {
            return;
        }
        let previous = self.space;

        match (previous, space) {
            (PathSpace::Free3D, PathSpace::PlaneXY | PathSpace::PlaneXZ) => {
                let dropped = self.flattest_axis(space);
                for p in &mut self.points {
                    *p = match (space, dropped) {
                        (PathSpace::PlaneXY, 0) => Vec3::new(p.z, p.y, 0.0),
                        (PathSpace::PlaneXY, 1) => Vec3::new(p.x, p.z, 0.0),
                        (PathSpace::PlaneXY, _) => Vec3::new(p.x, p.y, 0.0),
                        (_, 0) => Vec3::new(p.y, 0.0, p.z),
                        (_, 2) => Vec3::new(p.x, 0.0, p.y),
                        _ => Vec3::new(p.x, 0.0, p.z),
                    };
                }
            }
            (PathSpace::PlaneXY, PathSpace::PlaneXZ) => {
                for p in &mut self.points {
                    *p = Vec3::new(p.x, 0.0, p.y);
                }
            }
            (PathSpace::PlaneXZ, PathSpace::PlaneXY) => {
                for p in &mut self.points {
                    *p = Vec3::new(p.x, p.z, 0.0);
                }
            }
            _ => {}
        }

        self.space = space;
        log::debug!("Pfad-Ebene gewechselt: {previous:?} -> {space:?}");
        self.notify_modified();
    }

    /// Setzt den Kontrollmodus. Nur der Wechsel nach `Automatic` berechnet sofort neu.
    pub fn set_control_mode(&mut self, mode: ControlMode) {
        if self.control_mode == mode {
            return;
        }
        self.control_mode = mode;
        if mode == ControlMode::Automatic {
            self.auto_set_all_controls();
            self.notify_modified();
        }
    }

    /// Setzt die relative Länge automatischer Kontrollpunkte (mindestens 0.01).
    pub fn set_auto_control_length(&mut self, length: f32) {
        let length = length.max(MIN_AUTO_CONTROL_LENGTH);
        if self.auto_control_length == length {
            return;
        }
        self.auto_control_length = length;
        if self.control_mode == ControlMode::Automatic {
            self.auto_set_all_controls();
        }
        self.notify_modified();
    }

    pub fn set_anchor_normal_angle(&mut self, anchor: usize, angle: f32) {
        let angle = angles::normalize_degrees(angle);
        if self.per_anchor_normal_angle[anchor] != angle {
            self.per_anchor_normal_angle[anchor] = angle;
            self.notify_modified();
        }
    }

    pub fn set_global_normals_angle(&mut self, angle: f32) {
        let angle = angles::normalize_degrees(angle);
        if self.global_normals_angle != angle {
            self.global_normals_angle = angle;
            self.notify_modified();
        }
    }

    pub fn set_flip_normals(&mut self, flip: bool) {
        if self.flip_normals != flip {
            self.flip_normals = flip;
            self.notify_modified();
        }
    }

    /// Setzt alle Twist-Winkel (pro Anker und global) auf 0.
    pub fn reset_normal_angles(&mut self) {
        self.per_anchor_normal_angle.fill(0.0);
        self.global_normals_angle = 0.0;
        self.notify_modified();
    }

    /// Verwirft den Bounds-Cache und erhöht die Version.
    ///
    /// Für Aufrufer, die mehrere `move_point`-Aufrufe mit unterdrückter
    /// Benachrichtigung gebündelt haben.
    pub fn notify_modified(&mut self) {
        self.bounds_cache.take();
        self.version += 1;
    }

    // ── Interne Helfer ──────────────────────────────────────────────

    fn loop_index(&self, i: isize) -> usize {
        i.rem_euclid(self.points.len() as isize) as usize
    }

    /// Gültiger Index für `i`: direkt im Bereich oder, bei geschlossenem Pfad, umgebrochen.
    fn wrapped_index(&self, i: isize) -> Option<usize> {
        if (0..self.points.len() as isize).contains(&i) {
            Some(i as usize)
        } else if self.closed {
            Some(self.loop_index(i))
        } else {
            None
        }
    }

    /// Achse mit der kleinsten Bounds-Ausdehnung (0 = x, 1 = y, 2 = z).
    ///
    /// Bei Gleichstand gewinnt die Achse, die die Ziel-Ebene ohnehin verwirft.
    fn flattest_axis(&self, target: PathSpace) -> usize {
        let size = self.path_bounds().size();
        let preferred = if target == PathSpace::PlaneXZ { 1 } else { 2 };
        let min = size.min_element();
        if size[preferred] <= min {
            preferred
        } else {
            (0..3).find(|axis| size[*axis] <= min).unwrap_or(preferred)
        }
    }

    fn couple_partner_of(&mut self, control: usize) {
        let i = control as isize;
        let next_is_anchor = (control + 1) % 3 == 0;
        let (anchor, partner) = if next_is_anchor {
            (i + 1, i + 2)
        } else {
            (i - 1, i - 2)
        };
        let (Some(anchor), Some(partner)) = (self.wrapped_index(anchor), self.wrapped_index(partner))
        else {
            return;
        };
        if let Some(coupled) = self.control_mode.couple_partner(
            self.points[anchor],
            self.points[control],
            self.points[partner],
        ) {
            self.points[partner] = coupled;
        }
    }

    /// Kontrollpunkte eines Ankers entlang der Winkelhalbierenden zu seinen Nachbarn.
    fn auto_set_anchor_controls(&mut self, anchor_index: usize) {
        let len = self.points.len();
        let anchor = self.points[anchor_index];
        let i = anchor_index as isize;
        let mut direction = Vec3::ZERO;
        let mut distances = [0.0f32; 2];

        if anchor_index >= 3 || self.closed {
            let offset = self.points[self.loop_index(i - 3)] - anchor;
            direction += offset.normalize_or_zero();
            distances[0] = offset.length();
        }
        if anchor_index + 3 < len || self.closed {
            let offset = self.points[self.loop_index(i + 3)] - anchor;
            direction -= offset.normalize_or_zero();
            distances[1] = -offset.length();
        }
        let direction = direction.normalize_or_zero();

        for (side, control) in [i - 1, i + 1].into_iter().enumerate() {
            if let Some(index) = self.wrapped_index(control) {
                self.points[index] = anchor + direction * distances[side] * self.auto_control_length;
            }
        }
    }

    /// Sonderfälle an Anfang/Ende, an denen die Winkelhalbierende degeneriert.
    fn auto_set_start_and_end_controls(&mut self) {
        let len = self.points.len();
        let two_anchors = self.num_anchors() == 2;

        if self.closed && !two_anchors {
            self.auto_set_anchor_controls(0);
            self.auto_set_anchor_controls(len - 3);
            return;
        }

        let axis = if self.space == PathSpace::PlaneXY {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let p = &mut self.points;
        if self.closed {
            let dir_ab = (p[3] - p[0]).normalize_or_zero();
            let distance = p[0].distance(p[3]);
            let mut perp = dir_ab.cross(axis);
            if perp.length_squared() < 1e-12 {
                perp = dir_ab.cross(Vec3::X);
            }
            let offset = perp.normalize_or_zero() * distance * 0.5;
            p[1] = p[0] + offset;
            p[5] = p[0] - offset;
            p[2] = p[3] + offset;
            p[4] = p[3] - offset;
        } else if two_anchors {
            p[1] = p[0] + (p[3] - p[0]) * 0.25;
            p[2] = p[3] + (p[0] - p[3]) * 0.25;
        } else {
            p[1] = (p[0] + p[2]) * 0.5;
            p[len - 2] = (p[len - 1] + p[len - 3]) * 0.5;
        }
    }

    /// Neuberechnung rund um einen geänderten Anker.
    fn auto_set_affected_controls(&mut self, updated_anchor: usize) {
        let len = self.points.len() as isize;
        let updated = updated_anchor as isize;
        for i in [updated - 3, updated, updated + 3] {
            if (0..len).contains(&i) || self.closed {
                self.auto_set_anchor_controls(self.loop_index(i));
            }
        }
        self.auto_set_start_and_end_controls();
    }

    fn auto_set_all_controls(&mut self) {
        if self.num_anchors() > 2 {
            for anchor in (0..self.points.len()).step_by(3) {
                self.auto_set_anchor_controls(anchor);
            }
        }
        self.auto_set_start_and_end_controls();
    }
}
