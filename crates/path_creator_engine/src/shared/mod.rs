//! Reine, zustandslose Mathematik: Bézier-Segmente, Winkel, Geometrie-Helfer.

pub mod angles;
pub mod cubic_bezier;
pub mod geometry;
