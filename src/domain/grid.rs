use super::{Boundary, Cell, rules::Rule};
use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;

/// Errors from grid construction and direct cell access.
///
/// Neighbor lookups past an edge are not errors; they are governed by the
/// active [`Boundary`] policy.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid extent must be non-zero, got {width}x{height}")]
    EmptyExtent { width: usize, height: usize },

    #[error("coordinate ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("seed density must lie in 0.0..=1.0, got {0}")]
    DensityOutOfRange(f64),
}

/// Grid manages the 2D cell state of one generation.
/// Evolution is functional: each step produces a brand-new grid, so neighbor
/// counting never observes a partially updated generation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    ///
    /// A zero extent in either direction is rejected rather than clamped.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyExtent { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Read the cell at a position already known to be in range.
    fn at(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.width && y < self.height);
        self.cells[self.index(x, y)]
    }

    /// Get cell state at position; out-of-range access is a bounds error
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.check(x, y)?;
        Ok(self.at(x, y))
    }

    /// Set cell state at position; out-of-range access is a bounds error
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        self.check(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Count live cells in the 8-cell Moore neighborhood of (x, y).
    ///
    /// Offsets past an edge are resolved by the boundary policy: wrapped
    /// modulo the extent, or dead and skipped.
    pub fn count_live_neighbors(&self, x: usize, y: usize, boundary: Boundary) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| boundary.resolve(x, y, dx, dy, self.width, self.height))
            .filter(|&(nx, ny)| self.at(nx, ny).is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation (serial)
    pub fn evolve(&self, rule: &dyn Rule, boundary: Boundary) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| rule.evolve(self.at(x, y), self.count_live_neighbors(x, y, boundary)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel evolution using rayon, worthwhile on large grids.
    ///
    /// Every worker reads only the frozen current generation and writes a
    /// disjoint slice of the next one, so the result is identical to
    /// [`Grid::evolve`].
    pub fn evolve_parallel(&self, rule: &dyn Rule, boundary: Boundary) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map(|y| (0..self.width).into_par_iter().map(move |x| (x, y)))
            .map(|(x, y)| rule.evolve(self.at(x, y), self.count_live_neighbors(x, y, boundary)))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Reset every cell to dead
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Set each cell alive independently with probability `density`.
    ///
    /// The random source is injected by the caller so runs can be reproduced
    /// from a fixed seed.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        density: f64,
        rng: &mut R,
    ) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::DensityOutOfRange(density));
        }
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = rng.random_bool(density).into());
        Ok(())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.at(x, y)))
    }

    /// Iterate over rows top to bottom, each a slice of `width` cells
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}
