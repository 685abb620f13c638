use clap::Parser;
use nexo::error::Result;
use nexo::puzzles::sudoku;
use nexo::solver::engine::BacktrackingSolver;
use nexo::solver::stats::render_stats_table;
use tracing_subscriber::EnvFilter;

const DEFAULT_PUZZLE: &str = "\
    .23.56.89\
    45.78.12.\
    7.91.34.6\
    .34.67.91\
    56.89.23.\
    8.12.45.7\
    .45.78.12\
    67.91.34.\
    9.23.56.8";

/// Solve a sudoku puzzle.
#[derive(Parser, Debug)]
struct Args {
    /// The puzzle as 81 cells in row-major order; `.` or `0` for blanks,
    /// other non-digit characters are ignored.
    #[arg(default_value_t = DEFAULT_PUZZLE.to_string())]
    puzzle: String,

    /// Emit search statistics as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let givens = sudoku::parse_givens(&args.puzzle);
    let problem = sudoku::build_problem(&givens)?;

    let (solution, stats) = BacktrackingSolver::new().solve(&problem);
    match solution {
        Some(solution) => println!("{}", sudoku::render(&solution)),
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
