//! Integrationstests für den kompletten Ablauf:
//! - Pfad editieren → Version steigt → SampledPath wird neu gebaut
//! - Beide Abtast-Strategien auf realistischen Pfaden
//! - Frames und Abfragen auf dem Ergebnis

use glam::Vec3;
use path_creator::{
    BezierPath, ControlMode, CreatorOptions, DiscretizeSettings, EndOfPath, PathCreator, PathSpace,
};
use std::sync::Arc;

/// Offener Pfad mit vier Ankern in der XZ-Ebene (Straßenverlauf).
fn road_path() -> BezierPath {
    BezierPath::from_anchors(
        &[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(20.0, 0.0, 10.0),
            Vec3::new(40.0, 0.0, -5.0),
            Vec3::new(60.0, 0.0, 5.0),
        ],
        false,
        PathSpace::PlaneXZ,
    )
    .expect("Pfad erwartet")
}

// ─── Standard-Pfad ──────────────────────────────────────────

#[test]
fn test_standard_pfad_form() {
    let mut path = BezierPath::default();
    assert_eq!(path.num_points(), 4);
    assert_eq!(path.point(0), Vec3::new(-2.0, 0.0, 0.0));
    assert_eq!(path.point(3), Vec3::new(2.0, 0.0, 0.0));

    path.set_closed(true);
    assert_eq!(path.num_points(), 6);
    assert_eq!(path.num_segments(), 2);
}

#[test]
fn test_anker_verschieben_laesst_anderen_anker_unberuehrt() {
    let mut path = BezierPath::default();
    let other = path.point(3);
    path.move_point(0, Vec3::new(-5.0, 1.0, 2.0), false);

    assert_eq!(path.point(3), other);
    assert_eq!(path.point(0), Vec3::new(-5.0, 1.0, 2.0));
}

// ─── Creator-Ablauf ─────────────────────────────────────────

#[test]
fn test_edit_zyklus_baut_neu() {
    let mut creator = PathCreator::new(road_path(), DiscretizeSettings::default());
    let first = creator.sampled_path().expect("SampledPath erwartet");
    let version = creator.path().version();

    creator
        .path_mut()
        .add_segment_to_end(Vec3::new(80.0, 0.0, 0.0));
    assert_eq!(creator.path().version(), version + 1);

    let second = creator.sampled_path().expect("SampledPath erwartet");
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(second.anchor_vertex_map().len(), 5);
    assert!(second.length() > first.length());
}

#[test]
fn test_split_und_delete_erhalten_endpunkte() {
    let mut creator = PathCreator::new(road_path(), DiscretizeSettings::default());
    let end = creator.path().point(creator.path().num_points() - 1);

    creator
        .path_mut()
        .split_segment(Vec3::new(10.0, 0.0, 6.0), 0, 0.5);
    assert_eq!(creator.path().num_anchors(), 5);

    assert!(creator.path_mut().delete_segment(3));
    assert_eq!(creator.path().num_anchors(), 4);

    let sampled = creator.sampled_path().expect("SampledPath erwartet");
    let last = *sampled.points().last().expect("Punkt erwartet");
    assert!(last.distance(end) < 1e-4);
}

#[test]
fn test_beide_strategien_auf_strassenpfad() {
    let path = road_path();

    let angle = path_creator::SampledPath::build(&path, &DiscretizeSettings::default())
        .expect("SampledPath erwartet");
    let spacing = 1.0;
    let even = path_creator::SampledPath::build(
        &path,
        &DiscretizeSettings::Spacing {
            spacing,
            accuracy: 10.0,
        },
    )
    .expect("SampledPath erwartet");

    // Beide Strategien messen dieselbe Kurve
    assert!((angle.length() - even.length()).abs() / angle.length() < 0.02);

    let n = even.num_points();
    for pair in even.points()[..n - 1].windows(2) {
        let d = pair[0].distance(pair[1]);
        assert!((d - spacing).abs() < 0.05, "Abstand {d}");
    }
    for sampled in [&angle, &even] {
        assert!(sampled.points().iter().all(|p| p.y == 0.0));
        assert!(sampled.normals().iter().all(|n| n.y.abs() < 1e-6));
        assert_eq!(sampled.times()[0], 0.0);
    }
}

#[test]
fn test_geschlossener_pfad_abfragen() {
    let path = BezierPath::from_anchors(
        &[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 10.0),
        ],
        true,
        PathSpace::PlaneXZ,
    )
    .expect("Pfad erwartet");
    assert_eq!(path.control_mode(), ControlMode::Automatic);

    let mut creator = PathCreator::new(path, DiscretizeSettings::default());
    let sampled = creator.sampled_path().expect("SampledPath erwartet");

    assert!(sampled.is_closed());
    // Loop: Zeit 1.0 und 0.0 liefern denselben Punkt
    let start = sampled.point_at_time(0.0, EndOfPath::Loop);
    assert!(sampled.point_at_time(1.0, EndOfPath::Loop).distance(start) < 1e-5);
    assert!(sampled.point_at_time(2.0, EndOfPath::Loop).distance(start) < 1e-5);

    // Punkt vor der ersten Kante: nächster Punkt liegt auf Segment 0
    let closest = sampled.closest_point(Vec3::new(5.0, 0.0, -3.0));
    assert!(closest.point.z < 1.0);
    assert!(closest.time > 0.0 && closest.time < 0.5);
}

#[test]
fn test_creator_aus_optionen_mit_festem_abstand() {
    let options = CreatorOptions {
        vertex_spacing: Some(0.25),
        ..CreatorOptions::default()
    };
    let mut creator = PathCreator::from_options(&options);
    let sampled = creator.sampled_path().expect("SampledPath erwartet");

    assert!(sampled.num_points() > 10);
    let distance = sampled.length() * 0.5;
    let point = sampled.point_at_distance(distance, EndOfPath::Clamp);
    let closest = sampled.closest_point(point);
    assert!((closest.distance - distance).abs() < 1e-2);
}
