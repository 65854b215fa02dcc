pub mod export;
pub mod scene;

// Re-export the pieces the rest of the app touches
pub use export::{export_animation, export_frame};
pub use scene::{compute_frame, PointSet, ShellLayout};
