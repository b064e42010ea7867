// main.rs - Conway's Game of Life in a window, or headless in a terminal

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use life_engine::{Grid, PatternCatalog, SimulationController, ticker};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod ui;

use ui::{BOX_SIZE, LifeApp, SPACING};

#[derive(Parser, Debug)]
#[command(name = "life", about = "Conway's Game of Life on a fixed grid")]
struct Args {
    /// Grid rows
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u16).range(1..))]
    rows: u16,

    /// Grid columns
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(1..))]
    cols: u16,

    /// Seed to load at startup (Pulsar, Penta-decathlon)
    #[arg(long)]
    seed: Option<String>,

    /// Speed level, 1 (2s per turn) to 5 (0.15s per turn)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    speed: u8,

    /// Run in the terminal without opening a window
    #[arg(long)]
    headless: bool,

    /// Turns to run in headless mode
    #[arg(long, default_value_t = 10)]
    ticks: u64,

    /// Print the board after every headless turn
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,life_engine=info")),
        )
        .init();

    let args = Args::parse();
    let controller = build_controller(&args)?;

    if args.headless {
        run_headless(controller, &args)
    } else {
        run_window(controller)
    }
}

fn build_controller(args: &Args) -> Result<SimulationController> {
    let catalog = PatternCatalog::builtin().context("built-in pattern catalog is malformed")?;
    let grid = Grid::new(usize::from(args.rows), usize::from(args.cols));
    let mut controller = SimulationController::new(grid, catalog);
    controller.set_speed_level(args.speed)?;

    if let Some(seed) = &args.seed {
        controller
            .choose_seed(seed)
            .with_context(|| format!("cannot load seed {seed:?} onto a {}x{} grid", args.rows, args.cols))?;
    }

    info!(rows = args.rows, cols = args.cols, seed = args.seed.as_deref(), "board ready");
    Ok(controller)
}

fn run_headless(mut controller: SimulationController, args: &Args) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start tokio runtime")?;

    let dump = args.dump;
    if dump {
        println!("{}", controller.dump(false));
    }

    controller.start_pause();
    let turns = runtime.block_on(ticker::run(&mut controller, args.ticks, |c| {
        if dump {
            println!("{}", c.dump(false));
        }
    }));

    info!(turns, population = controller.grid().population(), "headless run finished");
    Ok(())
}

fn run_window(controller: SimulationController) -> Result<()> {
    let grid = controller.grid();
    let pitch = BOX_SIZE + SPACING;
    let width = (grid.cols() as f32 * pitch + 60.0).max(720.0);
    let height = grid.rows() as f32 * pitch + 200.0;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Life")
            .with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(controller))),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))
}
