use std::io;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use crossterm::terminal;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lifeterm::{
    Algorithm, Boundary, Grid, Seed, Simulator,
    input::{self, Action},
    presets,
    rendering::{self, TerminalGuard},
};

const USAGE: &str = "\
lifeterm - Conway's Game of Life in the terminal

USAGE:
    lifeterm [OPTIONS]

OPTIONS:
    --width N          grid width in cells (default: terminal width)
    --height N         grid height in cells (default: terminal height - 1)
    --density F        random seed density in 0.0..=1.0 (default: 0.3)
    --boundary POLICY  edge policy: wrapped | fixed (default: wrapped)
    --parallel         evolve rows in parallel (for large grids)
    --fps N            generations per second, 1-60 (default: 10)
    --seed N           seed the RNG for a reproducible run
    --pattern NAME     start from a centered preset instead of random cells
                       (Block, Blinker, Toad, Beacon, Glider, Pulsar,
                        R-pentomino, Glider Gun)
    -h, --help         print this help

KEYS:
    space/p pause   r randomize   c clear   s/l snapshot save/load
    Up/Down speed   q/Esc/Ctrl-C quit";

/// Runtime options gathered from the command line
struct Config {
    width: Option<usize>,
    height: Option<usize>,
    density: f64,
    boundary: Boundary,
    algorithm: Algorithm,
    updates_per_second: f32,
    seed: Option<u64>,
    pattern: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            density: 0.3,
            boundary: Boundary::Wrapped,
            algorithm: Algorithm::Serial,
            updates_per_second: 10.0,
            seed: None,
            pattern: None,
        }
    }
}

fn next_value<T>(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = args
        .next()
        .with_context(|| format!("{flag} expects a value"))?;
    raw.parse()
        .map_err(|e| anyhow::anyhow!("invalid value '{raw}' for {flag}: {e}"))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Config> {
    let mut config = Config::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => config.width = Some(next_value(&mut args, &arg)?),
            "--height" => config.height = Some(next_value(&mut args, &arg)?),
            "--density" => config.density = next_value(&mut args, &arg)?,
            "--boundary" => {
                let raw: String = next_value(&mut args, &arg)?;
                config.boundary = match raw.as_str() {
                    "wrapped" | "torus" => Boundary::Wrapped,
                    "fixed" | "dead" => Boundary::Fixed,
                    other => bail!("unknown boundary policy '{other}' (wrapped or fixed)"),
                };
            }
            "--parallel" => config.algorithm = Algorithm::Parallel,
            "--fps" => config.updates_per_second = next_value(&mut args, &arg)?,
            "--seed" => config.seed = Some(next_value(&mut args, &arg)?),
            "--pattern" => config.pattern = Some(next_value(&mut args, &arg)?),
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unrecognized argument '{other}' (try --help)"),
        }
    }

    if !(1.0..=60.0).contains(&config.updates_per_second) {
        bail!("--fps must lie in 1..=60, got {}", config.updates_per_second);
    }
    Ok(config)
}

/// Pick the seed strategy: a centered preset when requested, random otherwise
fn seed_strategy(config: &Config, width: usize, height: usize) -> Result<Seed> {
    let Some(name) = &config.pattern else {
        return Ok(Seed::Random {
            density: config.density,
        });
    };

    let pattern =
        presets::by_name(name).with_context(|| format!("unknown pattern '{name}' (try --help)"))?;
    if pattern.width > width || pattern.height > height {
        bail!(
            "pattern '{}' needs at least {}x{} cells, grid is {width}x{height}",
            pattern.name,
            pattern.width,
            pattern.height,
        );
    }
    let x = (width - pattern.width) / 2;
    let y = (height - pattern.height) / 2;
    Ok(Seed::Pattern { pattern, x, y })
}

fn main() -> Result<()> {
    let config = parse_args(std::env::args().skip(1))?;

    // Fit the grid to the terminal unless an extent was given;
    // the bottom terminal row is reserved for the status line.
    let (term_width, term_height) = terminal::size().context("unable to query terminal size")?;
    let width = config.width.unwrap_or(term_width as usize);
    let height = config
        .height
        .unwrap_or_else(|| (term_height as usize).saturating_sub(1).max(1));

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let grid = seed_strategy(&config, width, height)?
        .build(width, height, &mut rng)
        .context("failed to build initial grid")?;
    let mut sim = Simulator::new(grid, config.boundary).with_algorithm(config.algorithm);

    let _guard = TerminalGuard::new().context("failed to prepare terminal")?;
    run(&mut sim, &mut rng, &config)
}

/// The driver loop: render, wait a frame interval (or a key), advance.
fn run(sim: &mut Simulator, rng: &mut ChaCha8Rng, config: &Config) -> Result<()> {
    let mut out = io::stdout();
    let mut paused = false;
    let mut updates_per_second = config.updates_per_second;
    let mut snapshot: Option<Grid> = None;

    loop {
        rendering::draw_frame(&mut out, sim, paused, updates_per_second)
            .context("failed to draw frame")?;

        let interval = Duration::from_secs_f32(1.0 / updates_per_second);
        if let Some(action) = input::poll_action(interval).context("failed to read input")? {
            match action {
                Action::Quit => return Ok(()),
                Action::TogglePause => paused = !paused,
                Action::Randomize => {
                    let (width, height) = sim.grid().dimensions();
                    let mut grid = Grid::new(width, height)?;
                    grid.randomize(config.density, rng)?;
                    sim.reset(grid);
                }
                Action::Clear => {
                    let (width, height) = sim.grid().dimensions();
                    sim.reset(Grid::new(width, height)?);
                    paused = true;
                }
                Action::SpeedUp => updates_per_second = (updates_per_second + 1.0).clamp(1.0, 60.0),
                Action::SpeedDown => {
                    updates_per_second = (updates_per_second - 1.0).clamp(1.0, 60.0)
                }
                Action::SaveSnapshot => snapshot = Some(sim.grid().clone()),
                Action::LoadSnapshot => {
                    if let Some(grid) = snapshot.clone() {
                        sim.reset(grid);
                    }
                }
            }
        }

        if !paused {
            sim.advance();
        }
    }
}
