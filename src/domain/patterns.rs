use super::{Cell, Grid, GridError};

/// A named arrangement of live cells that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    /// Relative coordinates of the live cells
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from the relative coordinates of its live cells
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            width,
            height,
            cells,
        }
    }

    /// Stamp the pattern onto the grid with its top-left corner at (x, y).
    ///
    /// A pattern cell falling outside the grid is a bounds error; nothing is
    /// silently dropped.
    pub fn stamp(&self, grid: &mut Grid, x: usize, y: usize) -> Result<(), GridError> {
        for (dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive)?;
        }
        Ok(())
    }
}

/// Classic Game of Life pattern library
pub mod presets {
    use super::*;

    /// Block - simplest still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![(0, 0), (1, 0), (0, 1), (1, 1)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            vec![
                // Top
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
                // Upper middle
                (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3),
                (0, 4), (5, 4), (7, 4), (12, 4),
                // Center
                (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
                (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                // Lower middle
                (0, 8), (5, 8), (7, 8), (12, 8),
                (0, 9), (5, 9), (7, 9), (12, 9),
                (0, 10), (5, 10), (7, 10), (12, 10),
                // Bottom
                (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (0, 4), (0, 5),
                (1, 4), (1, 5),
                // Left circle
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),
                // Middle pieces
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),
                // Right square
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            pulsar(),
            r_pentomino(),
            glider_gun(),
        ]
    }

    /// Look up a preset by name, case-insensitively
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}
