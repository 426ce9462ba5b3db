//! Terminal front end for the automaton and forest-fire engines
//!
//! Prints each generation as ASCII plus a population / census line.

use cellfire_core::{
    AutomatonEngine, BoundaryMode, CellState, CountingStrategy, Execution, ForestFireEngine,
    ForestState, Grid, GridConfig, GrowthStrategy, Initializer, LifeLikeRule, LifeState,
    SeededSource, SimResult, Simulation, SimulationParameters,
};
use clap::{Parser, ValueEnum};
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Life-like automaton
    Life,
    /// Stochastic forest fire
    Forest,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Boundary {
    Clamped,
    Wrapped,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Growth {
    Density,
    Constant,
}

/// Cellular automaton and forest-fire demo
#[derive(Parser, Debug)]
#[command(name = "cellfire-demo")]
#[command(about = "Run a cellular automaton or forest fire in the terminal", long_about = None)]
struct Args {
    /// Which engine to run
    #[arg(short, long, value_enum, default_value_t = Mode::Forest)]
    mode: Mode,

    /// Grid rows
    #[arg(long, default_value_t = 24)]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 60)]
    cols: usize,

    /// Generations to run
    #[arg(short, long, default_value_t = 20)]
    steps: usize,

    /// Random seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Edge handling for neighbour lookups
    #[arg(short, long, value_enum, default_value_t = Boundary::Clamped)]
    boundary: Boundary,

    /// Use the direct scan counter instead of the box-sum counter
    #[arg(long)]
    scan: bool,

    /// Evaluate cells on a single thread
    #[arg(long)]
    serial: bool,

    /// Initial alive / tree probability
    #[arg(long, default_value_t = 0.4)]
    density: f64,

    /// Life-like rule in B/S notation
    #[arg(short, long, default_value = "B3/S23")]
    rule: String,

    /// Regrowth probability
    #[arg(long, default_value_t = 0.05)]
    growth_prob: f64,

    /// Regrowth policy
    #[arg(long, value_enum, default_value_t = Growth::Density)]
    growth: Growth,

    /// Spontaneous ignition probability
    #[arg(long, default_value_t = 0.0001)]
    fire_prob: f64,

    /// Ember jump probability
    #[arg(long, default_value_t = 0.0005)]
    jump_prob: f64,

    /// Eastward wind reach in columns
    #[arg(short, long, default_value_t = 0)]
    wind: usize,

    /// Steps a cell burns before it is empty
    #[arg(long, default_value_t = 3)]
    burn: u32,

    /// Only print the final generation
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn grid_config(&self) -> GridConfig {
        GridConfig::new(self.rows, self.cols)
            .with_boundary(match self.boundary {
                Boundary::Clamped => BoundaryMode::Clamped,
                Boundary::Wrapped => BoundaryMode::Wrapped,
            })
            .with_counting(if self.scan {
                CountingStrategy::Scan
            } else {
                CountingStrategy::Convolution
            })
            .with_execution(if self.serial {
                Execution::Serial
            } else {
                Execution::Parallel
            })
    }

    fn parameters(&self) -> SimulationParameters {
        SimulationParameters {
            growth_prob: self.growth_prob,
            fire_prob: self.fire_prob,
            fire_jump_prob: self.jump_prob,
            wind_speed: self.wind,
            burn_duration: self.burn,
            growth: match self.growth {
                Growth::Density => GrowthStrategy::NeighborDensity,
                Growth::Constant => GrowthStrategy::Constant,
            },
        }
    }

    fn rng(&self) -> SeededSource {
        self.seed
            .map_or_else(SeededSource::from_entropy, SeededSource::seeded)
    }
}

fn render<S: CellState>(grid: &Grid<S>, glyph: impl Fn(S) -> char) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in 0..grid.rows() {
        if let Some(cells) = grid.row(row) {
            out.extend(cells.iter().map(|&s| glyph(s)));
        }
        out.push('\n');
    }
    out
}

fn life_glyph(state: LifeState) -> char {
    match state {
        LifeState::Alive => '#',
        LifeState::Dead => '.',
    }
}

fn forest_glyph(state: ForestState) -> char {
    match state {
        ForestState::Empty => ' ',
        ForestState::Tree => 'T',
        ForestState::Burning => '*',
    }
}

fn run_life(args: &Args) -> SimResult<()> {
    let rule = LifeLikeRule::parse(&args.rule)?;
    println!("=== Life-like automaton {} ===\n", rule);
    let mut engine = AutomatonEngine::new(
        args.grid_config(),
        rule,
        Initializer::Random {
            probability: args.density,
        },
        args.rng(),
    )?;

    for _ in 0..args.steps {
        if !args.quiet {
            print!("{}", render(engine.current_state(), life_glyph));
            println!("generation {} population {}\n", engine.generation(), engine.population());
        }
        engine.step();
    }
    print!("{}", render(engine.current_state(), life_glyph));
    println!("generation {} population {}", engine.generation(), engine.population());
    Ok(())
}

fn run_forest(args: &Args) -> SimResult<()> {
    println!("=== Forest fire ===\n");
    let mut engine = ForestFireEngine::new(
        args.grid_config(),
        args.parameters(),
        Initializer::Random {
            probability: args.density,
        },
        args.rng(),
    )?;
    engine.ignite(args.rows / 2, args.cols / 2)?;

    for _ in 0..args.steps {
        if !args.quiet {
            print!("{}", render(engine.current_state(), forest_glyph));
            println!("generation {} {}\n", engine.generation(), engine.census());
        }
        engine.step();
    }
    print!("{}", render(engine.current_state(), forest_glyph));
    println!("generation {} {}", engine.generation(), engine.census());
    Ok(())
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();
    info!("Starting demo: {:?}", args.mode);

    let result = match args.mode {
        Mode::Life => run_life(&args),
        Mode::Forest => run_forest(&args),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}
