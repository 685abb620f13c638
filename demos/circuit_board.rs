use clap::Parser;
use nexo::error::Result;
use nexo::puzzles::circuit_board::{self, Chip, ChipColor};
use nexo::solver::engine::BacktrackingSolver;
use nexo::solver::stats::render_stats_table;
use tracing_subscriber::EnvFilter;

/// Fit a set of rectangular chips onto a circuit board with no overlap.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value_t = 10)]
    rows: usize,

    #[arg(long, default_value_t = 10)]
    columns: usize,

    /// Emit search statistics as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let chips = vec![
        Chip::new(1, 6, ChipColor::Blue),
        Chip::new(3, 4, ChipColor::Green),
        Chip::new(5, 5, ChipColor::Purple),
        Chip::new(2, 8, ChipColor::Red),
        Chip::new(3, 3, ChipColor::Yellow),
    ];

    let problem = circuit_board::build_problem(chips, args.rows, args.columns)?;

    let (solution, stats) = BacktrackingSolver::new().solve(&problem);
    match solution {
        Some(solution) => println!(
            "{}",
            circuit_board::render(args.rows, args.columns, &solution)
        ),
        None => println!("No solution found!"),
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).expect("stats serialize to JSON")
        );
    } else {
        println!("{}", render_stats_table(&stats, problem.constraints()));
    }
    Ok(())
}
