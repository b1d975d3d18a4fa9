//! Besitzer eines Bezier-Pfads mit versioniertem Cache des abgetasteten Pfads.

use std::sync::Arc;

use anyhow::Result;
use glam::Vec3;
use path_creator_engine::{BezierPath, DiscretizeSettings, SampledPath};

use crate::shared::CreatorOptions;

/// Hält einen `BezierPath` und baut den `SampledPath` erst bei Bedarf neu.
///
/// Der Cache ist an die `version()` des Pfads gebunden: jede benachrichtigende
/// Mutation macht ihn ungültig, der nächste Zugriff baut neu. Jeder Zugriff
/// über `path_mut` verwirft ihn ebenfalls.
#[derive(Debug, Clone)]
pub struct PathCreator {
    path: BezierPath,
    settings: DiscretizeSettings,
    cache: Option<(u64, Arc<SampledPath>)>,
}

impl Default for PathCreator {
    fn default() -> Self {
        Self::new(BezierPath::default(), DiscretizeSettings::default())
    }
}

impl PathCreator {
    pub fn new(path: BezierPath, settings: DiscretizeSettings) -> Self {
        Self {
            path,
            settings,
            cache: None,
        }
    }

    /// Standard-Pfad mit Ebene, Kontrollmodus und Diskretisierung aus den Optionen.
    pub fn from_options(options: &CreatorOptions) -> Self {
        let mut path = BezierPath::new(Vec3::ZERO, false, options.default_space);
        path.set_auto_control_length(options.auto_control_length);
        path.set_control_mode(options.default_control_mode);
        Self::new(path, options.discretize_settings())
    }

    pub fn path(&self) -> &BezierPath {
        &self.path
    }

    /// Veränderlicher Zugriff für Edits über die `BezierPath`-Operationen.
    ///
    /// Der Aufrufer kann den Pfad auch komplett ersetzen, dessen Version dann
    /// wieder bei 0 beginnt. Deshalb wird der Cache hier verworfen.
    pub fn path_mut(&mut self) -> &mut BezierPath {
        self.cache = None;
        &mut self.path
    }

    /// Ersetzt den Pfad vollständig; der Cache wird verworfen.
    pub fn set_path(&mut self, path: BezierPath) {
        self.path = path;
        self.cache = None;
    }

    pub fn settings(&self) -> DiscretizeSettings {
        self.settings
    }

    /// Setzt neue Diskretisierungs-Parameter nach Validierung.
    pub fn set_settings(&mut self, settings: DiscretizeSettings) -> Result<()> {
        settings.validate()?;
        if settings != self.settings {
            self.settings = settings;
            self.cache = None;
        }
        Ok(())
    }

    /// `true`, wenn der nächste Zugriff neu diskretisieren muss.
    pub fn is_stale(&self) -> bool {
        !matches!(&self.cache, Some((version, _)) if *version == self.path.version())
    }

    /// Abgetasteter Pfad zur aktuellen Version, bei Bedarf neu gebaut.
    pub fn sampled_path(&mut self) -> Result<Arc<SampledPath>> {
        let version = self.path.version();
        if let Some((cached_version, sampled)) = &self.cache {
            if *cached_version == version {
                return Ok(Arc::clone(sampled));
            }
        }

        log::debug!("SampledPath wird neu gebaut (Version {version})");
        let sampled = Arc::new(SampledPath::build(&self.path, &self.settings)?);
        self.cache = Some((version, Arc::clone(&sampled)));
        Ok(sampled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_creator_engine::{ControlMode, PathSpace};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_pfade_sind_thread_tauglich() {
        assert_send_sync::<BezierPath>();
        assert_send_sync::<SampledPath>();
        assert_send_sync::<PathCreator>();
    }

    #[test]
    fn test_cache_wird_wiederverwendet() {
        let mut creator = PathCreator::default();
        assert!(creator.is_stale());

        let first = creator.sampled_path().expect("SampledPath erwartet");
        let second = creator.sampled_path().expect("SampledPath erwartet");
        assert!(Arc::ptr_eq(&first, &second));
        assert!(!creator.is_stale());
    }

    #[test]
    fn test_mutation_macht_cache_ungueltig() {
        let mut creator = PathCreator::default();
        let before = creator.sampled_path().expect("SampledPath erwartet");

        creator
            .path_mut()
            .move_point(3, Vec3::new(4.0, 0.0, 0.0), false);
        assert!(creator.is_stale());

        let after = creator.sampled_path().expect("SampledPath erwartet");
        assert!(!Arc::ptr_eq(&before, &after));
        assert!(after.length() > before.length());
    }

    #[test]
    fn test_unterdrueckte_mutation_zaehlt_version_nicht_hoch() {
        let mut creator = PathCreator::default();
        creator.sampled_path().expect("SampledPath erwartet");

        creator
            .path_mut()
            .move_point(3, Vec3::new(4.0, 0.0, 0.0), true);
        assert_eq!(creator.path().version(), 0);
        // Mutabler Zugriff verwirft den Cache, der Neubau sieht den neuen Punkt
        assert!(creator.is_stale());
        let sampled = creator.sampled_path().expect("SampledPath erwartet");
        let end = *sampled.points().last().expect("Endpunkt erwartet");
        assert!(end.distance(Vec3::new(4.0, 0.0, 0.0)) < 1e-4);

        creator.path_mut().notify_modified();
        assert_eq!(creator.path().version(), 1);
    }

    #[test]
    fn test_ersetzen_ueber_path_mut_verwirft_cache() {
        let mut creator = PathCreator::default();
        let before = creator.sampled_path().expect("SampledPath erwartet");
        assert_eq!(creator.path().version(), 0);

        // Neuer Pfad startet ebenfalls bei Version 0
        *creator.path_mut() =
            BezierPath::new(Vec3::new(0.0, 10.0, 0.0), false, PathSpace::Free3D);
        assert_eq!(creator.path().version(), 0);
        assert!(creator.is_stale());

        let after = creator.sampled_path().expect("SampledPath erwartet");
        assert!(!Arc::ptr_eq(&before, &after));
        assert!(after.points().iter().all(|p| p.y > 5.0));
        assert!(!creator.is_stale());
    }

    #[test]
    fn test_set_settings_validiert_und_invalidiert() {
        let mut creator = PathCreator::default();
        creator.sampled_path().expect("SampledPath erwartet");

        let invalid = DiscretizeSettings::Spacing {
            spacing: 0.0,
            accuracy: 10.0,
        };
        assert!(creator.set_settings(invalid).is_err());
        assert!(!creator.is_stale());

        creator
            .set_settings(DiscretizeSettings::Spacing {
                spacing: 0.5,
                accuracy: 10.0,
            })
            .expect("gueltige Settings erwartet");
        assert!(creator.is_stale());
    }

    #[test]
    fn test_set_path_verwirft_cache() {
        let mut creator = PathCreator::default();
        creator.sampled_path().expect("SampledPath erwartet");

        // Gleiche Version 0, aber anderer Pfad
        creator.set_path(BezierPath::new(Vec3::ONE, false, PathSpace::PlaneXY));
        assert!(creator.is_stale());
    }

    #[test]
    fn test_from_options() {
        let options = CreatorOptions {
            default_space: PathSpace::PlaneXZ,
            default_control_mode: ControlMode::Automatic,
            auto_control_length: 0.5,
            ..CreatorOptions::default()
        };
        let creator = PathCreator::from_options(&options);

        assert_eq!(creator.path().space(), PathSpace::PlaneXZ);
        assert_eq!(creator.path().control_mode(), ControlMode::Automatic);
        assert_eq!(creator.path().auto_control_length(), 0.5);
        assert!(creator.path().points().iter().all(|p| p.y == 0.0));
        assert_eq!(creator.settings(), options.discretize_settings());
    }
}
