//! Integrationstests für Laden/Speichern von Pfaden und den Export abgetasteter Pfade.

use glam::Vec3;
use path_creator::{
    BezierPath, ControlMode, DiscretizeSettings, PathSpace, SampledPath, SampledPathRecord,
    load_bezier_path, save_bezier_path, write_sampled_path,
};
use std::fs;
use std::path::PathBuf;

/// Eigenes Temp-Verzeichnis je Test, damit parallele Tests sich nicht stören.
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("path_creator_io_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Temp-Verzeichnis erwartet");
    dir
}

#[test]
fn test_speichern_und_laden_erhaelt_pfad() {
    let dir = temp_dir("roundtrip");
    let file = dir.join("pfad.json");

    let mut path = BezierPath::from_anchors(
        &[Vec3::ZERO, Vec3::new(5.0, 1.0, 2.0), Vec3::new(9.0, -1.0, 0.0)],
        true,
        PathSpace::Free3D,
    )
    .expect("Pfad erwartet");
    path.set_anchor_normal_angle(1, 30.0);
    path.set_flip_normals(true);
    path.set_control_mode(ControlMode::Mirrored);

    save_bezier_path(&path, &file).expect("Speichern erwartet");
    let loaded = load_bezier_path(&file).expect("Laden erwartet");

    assert_eq!(loaded.points(), path.points());
    assert!(loaded.is_closed());
    assert_eq!(loaded.control_mode(), ControlMode::Mirrored);
    assert_eq!(loaded.anchor_normal_angle(1), 30.0);
    assert!(loaded.flip_normals());
    assert_eq!(loaded.to_record(), path.to_record());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_laden_fehlerhafter_dateien() {
    let dir = temp_dir("fehler");

    assert!(load_bezier_path(&dir.join("fehlt.json")).is_err());

    let broken = dir.join("kaputt.json");
    fs::write(&broken, "{ kein json").expect("Schreiben erwartet");
    assert!(load_bezier_path(&broken).is_err());

    // Strukturell ungültig: 5 Punkte für einen offenen Pfad
    let invalid = dir.join("ungueltig.json");
    fs::write(
        &invalid,
        r#"{"points":[[0,0,0],[1,0,0],[2,0,0],[3,0,0],[4,0,0]],"per_anchor_normal_angle":[0,0]}"#,
    )
    .expect("Schreiben erwartet");
    let err = load_bezier_path(&invalid).expect_err("Fehler erwartet");
    assert!(format!("{err:#}").contains("3·n + 1"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_minimaler_datensatz_nutzt_defaults() {
    let dir = temp_dir("minimal");
    let file = dir.join("minimal.json");
    fs::write(
        &file,
        r#"{"points":[[0,0,0],[1,1,0],[2,1,0],[3,0,0]],"per_anchor_normal_angle":[0,0]}"#,
    )
    .expect("Schreiben erwartet");

    let path = load_bezier_path(&file).expect("Laden erwartet");
    assert!(!path.is_closed());
    assert_eq!(path.space(), PathSpace::Free3D);
    assert_eq!(path.control_mode(), ControlMode::Aligned);
    assert_eq!(path.auto_control_length(), 0.3);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_export_abgetasteter_pfad() {
    let dir = temp_dir("export");
    let file = dir.join("sampled.json");

    let path = BezierPath::default();
    let sampled = SampledPath::build(&path, &DiscretizeSettings::default())
        .expect("SampledPath erwartet");
    write_sampled_path(&sampled, &file).expect("Export erwartet");

    let content = fs::read_to_string(&file).expect("Datei erwartet");
    let record: SampledPathRecord = serde_json::from_str(&content).expect("JSON erwartet");
    assert_eq!(record.points.len(), sampled.num_points());
    assert_eq!(record.normals.len(), record.points.len());
    assert_eq!(record.times.first(), Some(&0.0));
    assert_eq!(record.anchor_vertex_map, sampled.anchor_vertex_map());
    assert!((record.length - sampled.length()).abs() < 1e-6);

    let _ = fs::remove_dir_all(&dir);
}
