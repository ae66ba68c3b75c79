// Domain layer - core simulation logic
pub mod domain;

// Application layer - advance sequencing
pub mod application;

// Infrastructure layer - terminal rendering and input
pub mod input;
pub mod rendering;

// Re-exports for convenience
pub use application::Simulator;
pub use domain::{Algorithm, Boundary, Cell, Grid, GridError, Pattern, Rule, Seed, presets};
