//! Path-Creator-Engine.
//!
//! Enthält den Bezier-Kontrollpunkt-Graphen (`core`), reine Kurven- und
//! Winkel-Mathematik (`shared`) sowie die Diskretisierung in einen
//! abgetasteten Pfad mit Frames und Abfragen (`sampling`).

pub mod core;
pub mod sampling;
pub mod shared;

pub use core::{BezierPath, BezierPathRecord, ControlMode, MinMax3D, PathSpace};
pub use sampling::{
    ClosestPoint, DiscretizeSettings, EndOfPath, PathSplitData, SampledPath, split_by_angle_error,
    split_evenly,
};
