//! Terminal frame drawing.
//!
//! One text frame per generation: every grid row as a line of glyphs,
//! followed by a status line. Frames are queued and flushed in one write so
//! the terminal never shows a half-drawn generation.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand,
    cursor::{Hide, MoveTo, Show},
    execute,
    style::Print,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::application::Simulator;
use crate::domain::{Cell, Grid};

const ALIVE_GLYPH: char = '\u{2588}';
const DEAD_GLYPH: char = ' ';

/// Raw mode and alternate screen for the lifetime of this guard.
/// Dropping it restores the terminal on every exit path, panics included.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
            eprintln!("error leaving alternate screen: {e}");
        }
        if let Err(e) = disable_raw_mode() {
            eprintln!("error disabling raw mode: {e}");
        }
    }
}

const fn glyph(cell: Cell) -> char {
    if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH }
}

/// Queue one full frame and flush it.
pub fn draw_frame(
    out: &mut impl Write,
    sim: &Simulator,
    paused: bool,
    updates_per_second: f32,
) -> io::Result<()> {
    draw_grid(out, sim.grid())?;
    draw_status(out, sim, paused, updates_per_second)?;
    out.flush()
}

/// Draw every grid row, one terminal line per row, top to bottom
fn draw_grid(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    let mut line = String::with_capacity(grid.width() * ALIVE_GLYPH.len_utf8());
    for (y, row) in grid.rows().enumerate() {
        line.clear();
        line.extend(row.iter().map(|&cell| glyph(cell)));
        out.queue(MoveTo(0, y as u16))?.queue(Print(&line))?;
    }
    Ok(())
}

/// Status line below the grid: counters, policy, speed, and key help
fn draw_status(
    out: &mut impl Write,
    sim: &Simulator,
    paused: bool,
    updates_per_second: f32,
) -> io::Result<()> {
    let grid = sim.grid();
    let status = format!(
        "gen {:>6}  pop {:>6}  {}/{}  {}  {:.0} gen/s | [space] pause  [r] random  [c] clear  [s/l] snapshot  [q] quit",
        sim.generation(),
        grid.population(),
        sim.boundary().name(),
        sim.algorithm().name(),
        if paused { "paused " } else { "running" },
        updates_per_second,
    );

    out.queue(MoveTo(0, grid.height() as u16))?
        .queue(Clear(ClearType::CurrentLine))?
        .queue(Print(status))?;
    Ok(())
}
