//! Path Creator Library.
//! Pfad-Verwaltung, Persistenz und Optionen als Library exportiert für Tests und Wiederverwendung.

pub mod creator;
pub mod io;
pub mod shared;

pub use creator::PathCreator;
pub use io::{SampledPathRecord, load_bezier_path, save_bezier_path, write_sampled_path};
pub use path_creator_engine::{
    BezierPath, BezierPathRecord, ClosestPoint, ControlMode, DiscretizeSettings, EndOfPath,
    MinMax3D, PathSpace, SampledPath,
};
pub use shared::CreatorOptions;
