//! Zentrale Konfiguration für den Path Creator.
//!
//! `CreatorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use path_creator_engine::sampling::discretizer::{
    DEFAULT_ACCURACY, DEFAULT_MAX_ANGLE_ERROR, DEFAULT_MIN_VERTEX_SPACING,
};
use path_creator_engine::{ControlMode, DiscretizeSettings, PathSpace};
use serde::{Deserialize, Serialize};

// ── Vertex-Pfad ─────────────────────────────────────────────────────

/// Standard-Ankerabstand-Faktor im Automatic-Modus.
pub const AUTO_CONTROL_LENGTH: f32 = path_creator_engine::core::bezier_path::DEFAULT_AUTO_CONTROL_LENGTH;

/// Dateiname der Optionen-Datei neben der Binary.
const OPTIONS_FILE_NAME: &str = "path_creator.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Creator-Optionen.
/// Wird als `path_creator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorOptions {
    // ── Diskretisierung ─────────────────────────────────────────
    /// Winkelfehler in Grad, ab dem ein Vertex gesetzt wird
    #[serde(default = "default_max_angle_error")]
    pub max_angle_error: f32,
    /// Mindestabstand zwischen zwei Vertices (Winkel-Modus)
    #[serde(default = "default_min_vertex_spacing")]
    pub min_vertex_spacing: f32,
    /// Teilschritte pro Längeneinheit
    #[serde(default = "default_accuracy")]
    pub accuracy: f32,
    /// Fester Vertex-Abstand; gesetzt ersetzt er den Winkel-Modus
    #[serde(default)]
    pub vertex_spacing: Option<f32>,

    // ── Neue Pfade ──────────────────────────────────────────────
    /// Ebene neu erzeugter Pfade
    #[serde(default)]
    pub default_space: PathSpace,
    /// Kontrollmodus neu erzeugter Pfade
    #[serde(default)]
    pub default_control_mode: ControlMode,
    /// Kontrollpunkt-Länge im Automatic-Modus
    #[serde(default = "default_auto_control_length")]
    pub auto_control_length: f32,
}

impl Default for CreatorOptions {
    fn default() -> Self {
        Self {
            max_angle_error: DEFAULT_MAX_ANGLE_ERROR,
            min_vertex_spacing: DEFAULT_MIN_VERTEX_SPACING,
            accuracy: DEFAULT_ACCURACY,
            vertex_spacing: None,
            default_space: PathSpace::default(),
            default_control_mode: ControlMode::default(),
            auto_control_length: AUTO_CONTROL_LENGTH,
        }
    }
}

fn default_max_angle_error() -> f32 {
    DEFAULT_MAX_ANGLE_ERROR
}

fn default_min_vertex_spacing() -> f32 {
    DEFAULT_MIN_VERTEX_SPACING
}

fn default_accuracy() -> f32 {
    DEFAULT_ACCURACY
}

fn default_auto_control_length() -> f32 {
    AUTO_CONTROL_LENGTH
}

impl CreatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Schreibt die Optionen als TOML; `load_from_file` liest sie unverändert zurück.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content =
            toml::to_string_pretty(self).context("Optionen lassen sich nicht als TOML darstellen")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei {} nicht schreibbar", path.display()))?;
        log::info!(
            "Optionen ({:?}) gespeichert nach: {}",
            self.discretize_settings(),
            path.display()
        );
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("path-creator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Diskretisierungs-Parameter: fester Abstand, falls gesetzt, sonst Winkel-Modus.
    pub fn discretize_settings(&self) -> DiscretizeSettings {
        match self.vertex_spacing {
            Some(spacing) => DiscretizeSettings::Spacing {
                spacing,
                accuracy: self.accuracy,
            },
            None => DiscretizeSettings::AngleError {
                max_angle_error: self.max_angle_error,
                min_vertex_spacing: self.min_vertex_spacing,
                accuracy: self.accuracy,
            },
        }
    }
}
