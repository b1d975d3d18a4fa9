//! Core-Datenmodell: Pfad-Ebene, Bounding-Box, Kontrollmodus und Bezier-Pfad.

pub mod bezier_path;
pub mod control_mode;
pub mod min_max;
pub mod path_space;
pub mod record;

pub use bezier_path::BezierPath;
pub use control_mode::ControlMode;
pub use min_max::MinMax3D;
pub use path_space::PathSpace;
pub use record::BezierPathRecord;
