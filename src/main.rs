use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};

use grid_snake::{CellPos, Config, Context, TickOutcome, World};

/// Headless driver: runs the simulation and prints the board
#[derive(Parser, Debug)]
#[command(name = "grid_snake", version)]
struct Args {
    /// Path to the TOML config
    #[arg(long)]
    config: Option<String>,
    /// Stop after this many ticks (runs until game over otherwise)
    #[arg(long)]
    ticks: Option<usize>,
    /// Override the configured seed
    #[arg(long)]
    seed: Option<u64>,
    /// Toggle an obstacle at X,Y before the first tick, repeatable
    #[arg(long, value_parser = parse_cell)]
    obstacle: Vec<CellPos>,
    /// Print the board every N ticks, 0 to only print the final board
    #[arg(long, default_value_t = 1)]
    print_every: usize,
    /// Don't wait between ticks
    #[arg(long)]
    fast: bool,
}

fn parse_cell(s: &str) -> Result<CellPos, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {:?}", s))?;
    let parse = |v: &str| v.trim().parse::<isize>().map_err(|e| format!("{:?}: {}", v, e));
    Ok(CellPos::new(parse(x)?, parse(y)?))
}

fn main() -> grid_snake::Result {
    env_logger::init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref());
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut world = World::new(&config).context("main")?;
    for pos in &args.obstacle {
        world.toggle_obstacle(*pos).context("main")?;
    }

    let frame = Duration::from_secs_f32(1. / config.fps.max(1) as f32);
    let mut stationary_streak = 0;
    loop {
        let tick = world.stats().ticks;
        if args.ticks.map_or(false, |max| tick >= max) {
            break;
        }

        match world.tick() {
            Ok(TickOutcome::Over) => break,
            Ok(TickOutcome::Stationary) => stationary_streak += 1,
            Ok(_) => stationary_streak = 0,
            Err(e) => {
                warn!("stopping: {}", e);
                break;
            }
        }

        if args.print_every > 0 && (tick + 1) % args.print_every == 0 {
            println!("tick {}\n{}\n", tick + 1, world.grid().render_ascii());
        }

        // nothing will change without outside input
        if args.ticks.is_none() && stationary_streak > 1 {
            info!("snake is stuck, stopping");
            break;
        }

        if !args.fast {
            thread::sleep(frame);
        }
    }

    println!("{}", world.grid().render_ascii());
    let stats = world.stats();
    info!(
        "finished after {} ticks: {} moves, {} stationary, {} pills eaten, game over: {}",
        stats.ticks,
        stats.moves,
        stats.stationary_ticks,
        stats.pills_eaten,
        world.is_game_over()
    );
    println!("length {}, pills eaten {}", world.body().len(), stats.pills_eaten);
    Ok(())
}
