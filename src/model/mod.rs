//src/model/mod.rs
pub mod elements;
pub mod nucleus;

// Re-exports for cleaner imports
pub use elements::{get_profile, ElementProfile};
pub use nucleus::NucleusLayout;
