//! Diskretisierung eines Bezier-Pfads in einen abgetasteten Pfad mit Frames.

pub mod discretizer;
pub mod frames;
pub mod sampled_path;

pub use discretizer::{DiscretizeSettings, PathSplitData, split_by_angle_error, split_evenly};
pub use sampled_path::{ClosestPoint, EndOfPath, SampledPath};
