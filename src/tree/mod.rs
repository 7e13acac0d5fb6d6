
pub mod config;
pub mod state;
pub mod gesture;
pub mod formation;
pub mod transition;
pub mod foliage;
pub mod decor;
pub mod view;
pub mod scene;
pub mod output;
pub mod modules;

mod init_scene;
pub use init_scene::{init_scene, init_scene_with_rng};

mod define_updater;
pub use define_updater::define_updater;
