/// Edge policy for neighbor lookups.
///
/// Chosen once when the simulator is constructed and immutable afterwards.
/// The two policies produce materially different results for any pattern
/// that reaches an edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Boundary {
    /// The grid wraps on all four edges (toroidal topology).
    #[default]
    Wrapped,
    /// Coordinates past an edge are permanently dead.
    Fixed,
}

impl Boundary {
    /// Resolve the coordinate at offset `(dx, dy)` from `(x, y)` on a
    /// `width` x `height` grid.
    ///
    /// Returns `None` when the offset lands outside the grid and this
    /// policy treats the outside as dead.
    pub fn resolve(
        self,
        x: usize,
        y: usize,
        dx: i32,
        dy: i32,
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;

        match self {
            Boundary::Wrapped => {
                let w = width as i64;
                let h = height as i64;
                Some((((nx % w + w) % w) as usize, ((ny % h + h) % h) as usize))
            }
            Boundary::Fixed => (nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64)
                .then_some((nx as usize, ny as usize)),
        }
    }

    /// Display name used in the status line and CLI help
    pub const fn name(self) -> &'static str {
        match self {
            Boundary::Wrapped => "wrapped",
            Boundary::Fixed => "fixed",
        }
    }
}
