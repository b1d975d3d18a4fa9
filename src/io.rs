//! Persistenz: Bezier-Pfade als JSON laden/speichern, abgetastete Pfade exportieren.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use path_creator_engine::{BezierPath, BezierPathRecord, PathSpace, SampledPath};
use serde::{Deserialize, Serialize};

/// Speichert den Kontrollpunkt-Graphen als JSON-Datensatz.
pub fn save_bezier_path(path: &BezierPath, file: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(&path.to_record())
        .context("Pfad konnte nicht serialisiert werden")?;
    std::fs::write(file, content)
        .with_context(|| format!("Pfad-Datei nicht schreibbar: {}", file.display()))?;
    log::info!("Pfad gespeichert nach: {}", file.display());
    Ok(())
}

/// Lädt und validiert einen gespeicherten Pfad.
pub fn load_bezier_path(file: &Path) -> Result<BezierPath> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Pfad-Datei nicht lesbar: {}", file.display()))?;
    let record: BezierPathRecord = serde_json::from_str(&content)
        .with_context(|| format!("Fehler beim Parsen von {}", file.display()))?;
    let path = BezierPath::from_record(record)
        .with_context(|| format!("Ungueltiger Pfad in {}", file.display()))?;
    log::info!(
        "Pfad geladen aus: {} ({} Anker, geschlossen: {})",
        file.display(),
        path.num_anchors(),
        path.is_closed()
    );
    Ok(path)
}

/// Export-Form eines abgetasteten Pfads (parallele Vertex-Listen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledPathRecord {
    pub closed: bool,
    pub space: PathSpace,
    pub length: f32,
    pub points: Vec<Vec3>,
    pub tangents: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub times: Vec<f32>,
    pub anchor_vertex_map: Vec<usize>,
}

impl From<&SampledPath> for SampledPathRecord {
    fn from(sampled: &SampledPath) -> Self {
        Self {
            closed: sampled.is_closed(),
            space: sampled.space(),
            length: sampled.length(),
            points: sampled.points().to_vec(),
            tangents: sampled.tangents().to_vec(),
            normals: sampled.normals().to_vec(),
            times: sampled.times().to_vec(),
            anchor_vertex_map: sampled.anchor_vertex_map().to_vec(),
        }
    }
}

/// Schreibt den abgetasteten Pfad als JSON.
pub fn write_sampled_path(sampled: &SampledPath, file: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(&SampledPathRecord::from(sampled))
        .context("Abgetasteter Pfad konnte nicht serialisiert werden")?;
    std::fs::write(file, content)
        .with_context(|| format!("Export-Datei nicht schreibbar: {}", file.display()))?;
    log::info!(
        "{} Vertices exportiert nach: {}",
        sampled.num_points(),
        file.display()
    );
    Ok(())
}
