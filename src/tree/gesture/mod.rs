
pub mod landmarks;
pub mod classifier;
pub mod source;

pub use landmarks::{Landmark, LandmarkFrame};
pub use classifier::{HandSignal, classify};
pub use source::{LandmarkSource, SourceError, spawn_landmark_source, ScriptedSource};
