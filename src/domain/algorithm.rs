//! Backend selection for the advance loop.

/// Available evolution backends.
/// Both produce identical grids; they differ only in how the sweep runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Single-threaded sweep over the grid
    #[default]
    Serial,
    /// Row-parallel sweep via rayon, worthwhile on large grids
    Parallel,
}

impl Algorithm {
    /// Get all available backends
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for the status line and benchmark output
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }
}
