//! Path Creator CLI.
//!
//! Lädt einen Bezier-Pfad (oder den Standard-Pfad), tastet ihn ab, gibt eine
//! Zusammenfassung aus und exportiert optional die Vertex-Daten.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use path_creator::{CreatorOptions, DiscretizeSettings, PathCreator, io};

#[derive(Debug, Parser)]
#[command(
    name = "path-creator",
    version,
    about = "Bezier-Pfade abtasten, Frames berechnen und abfragen"
)]
struct CliArgs {
    /// Pfad-Datei (JSON); ohne Angabe wird der Standard-Pfad verwendet
    path_file: Option<PathBuf>,

    /// Fester Vertex-Abstand statt Winkel-Modus
    #[arg(long, value_name = "S")]
    spacing: Option<f32>,

    /// Maximaler Winkelfehler im Winkel-Modus (Grad)
    #[arg(long, value_name = "GRAD")]
    max_angle: Option<f32>,

    /// Optionen-TOML (Standard: path_creator.toml neben der Binary)
    #[arg(long = "options", value_name = "DATEI")]
    options_file: Option<PathBuf>,

    /// Wirksame Optionen inklusive Overrides in die Optionen-TOML schreiben
    #[arg(long)]
    save_options: bool,

    /// Abgetasteten Pfad als JSON schreiben
    #[arg(long = "out", value_name = "DATEI")]
    out_file: Option<PathBuf>,

    /// Nächsten Punkt auf dem Pfad ausgeben
    #[arg(long, value_name = "x,y,z", value_parser = parse_vec3, allow_hyphen_values = true)]
    closest: Option<Vec3>,
}

fn parse_vec3(raw: &str) -> Result<Vec3, String> {
    let parts = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|e| format!("keine gueltige Zahl \"{part}\": {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("erwartet x,y,z, erhalten: {raw}")),
    }
}

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = CliArgs::parse();
    log::info!("Path Creator v{} startet...", env!("CARGO_PKG_VERSION"));
    run(args)
}

fn run(args: CliArgs) -> Result<()> {
    let options_path = args
        .options_file
        .clone()
        .unwrap_or_else(CreatorOptions::config_path);
    let mut options = CreatorOptions::load_from_file(&options_path);
    if let Some(max_angle) = args.max_angle {
        options.max_angle_error = max_angle;
    }
    if let Some(spacing) = args.spacing {
        options.vertex_spacing = Some(spacing);
    }

    let mut creator = match &args.path_file {
        Some(file) => {
            let path = io::load_bezier_path(file)?;
            PathCreator::new(path, options.discretize_settings())
        }
        None => {
            log::info!("Keine Pfad-Datei angegeben, verwende Standard-Pfad");
            PathCreator::from_options(&options)
        }
    };
    creator.set_settings(options.discretize_settings())?;
    if args.save_options {
        options.save_to_file(&options_path)?;
    }

    let sampled = creator.sampled_path()?;
    let path = creator.path();
    let mode = match creator.settings() {
        DiscretizeSettings::AngleError {
            max_angle_error, ..
        } => format!("Winkel-Modus ({max_angle_error} Grad)"),
        DiscretizeSettings::Spacing { spacing, .. } => format!("Abstands-Modus ({spacing})"),
    };

    println!(
        "Pfad:        {} Anker, {} Segmente, geschlossen: {}",
        path.num_anchors(),
        path.num_segments(),
        path.is_closed()
    );
    println!(
        "Ebene:       {:?}, Kontrollmodus: {:?}",
        path.space(),
        path.control_mode()
    );
    println!("Abtastung:   {mode}");
    println!("Vertices:    {}", sampled.num_points());
    println!("Länge:       {:.4}", sampled.length());
    let bounds = sampled.bounds();
    println!("Bounds:      {:?} .. {:?}", bounds.min, bounds.max);

    if let Some(query) = args.closest {
        let closest = sampled.closest_point(query);
        println!(
            "Nächster Punkt zu {query:?}: {:?} (Zeit {:.4}, Distanz {:.4})",
            closest.point, closest.time, closest.distance
        );
    }

    if let Some(out) = &args.out_file {
        io::write_sampled_path(&sampled, out)?;
    }
    Ok(())
}
