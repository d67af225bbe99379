use anyhow::Result;
use clap::Parser;
use pheromaze_lib::app::App;
use pheromaze_lib::model::config::{AppConfig, RngMode};
use pheromaze_lib::model::metrics::init_logging;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file ("<width> <length>" header followed by rows of 0/1)
    #[arg(short, long)]
    maze: PathBuf,

    /// Start/end coordinate file
    #[arg(short = 'p', long)]
    coordinates: PathBuf,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Where to write the best route
    #[arg(short, long)]
    output: Option<String>,

    /// Optional JSON run report
    #[arg(long)]
    report: Option<String>,

    /// Ants per generation
    #[arg(short, long)]
    ants: Option<usize>,

    #[arg(short, long)]
    generations: Option<usize>,

    /// Pheromone deposit normalization factor
    #[arg(short)]
    q: Option<f64>,

    /// Evaporation factor in [0, 1]
    #[arg(short, long)]
    evaporation: Option<f64>,

    #[arg(short, long)]
    seed: Option<u64>,

    /// Run ants one after another instead of on the thread pool
    #[arg(long)]
    sequential: bool,

    /// Draw every ant from one shared random stream (implies --sequential)
    #[arg(long)]
    shared_rng: bool,

    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        let colony = &mut config.colony;
        if let Some(ants) = self.ants {
            colony.ants_per_gen = ants;
        }
        if let Some(generations) = self.generations {
            colony.generations = generations;
        }
        if let Some(q) = self.q {
            colony.q = q;
        }
        if let Some(evaporation) = self.evaporation {
            colony.evaporation = evaporation;
        }
        if self.seed.is_some() {
            colony.seed = self.seed;
        }
        if self.sequential {
            colony.parallel = false;
        }
        if self.shared_rng {
            colony.rng_mode = RngMode::Shared;
        }

        let output = &mut config.output;
        if let Some(path) = &self.output {
            output.route_path.clone_from(path);
        }
        if self.report.is_some() {
            output.report_path.clone_from(&self.report);
        }
        if let Some(level) = &self.log_level {
            output.log_level.clone_from(level);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);
    init_logging(&config.output.log_level);

    let app = App::new(config)?;
    let started = Instant::now();
    let report = app.run(&args.maze, &args.coordinates)?;

    println!("Shortest route: {}", report.route);
    println!("Route size: {}", report.size);
    println!("Time taken: {:.3}s", started.elapsed().as_secs_f64());
    println!("Seed: {}", report.seed);

    Ok(())
}
