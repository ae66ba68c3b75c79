mod algorithm;
mod boundary;
mod cell;
mod grid;
mod patterns;
mod rules;
mod seed;

pub use algorithm::Algorithm;
pub use boundary::Boundary;
pub use cell::Cell;
pub use grid::{Grid, GridError};
pub use patterns::{Pattern, presets};
pub use rules::{ConwayRule, Rule, default_rule};
pub use seed::Seed;
