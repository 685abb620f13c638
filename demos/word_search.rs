use clap::Parser;
use nexo::error::Result;
use nexo::puzzles::word_search;
use nexo::solver::engine::BacktrackingSolver;
use nexo::solver::stats::render_stats_table;
use tracing_subscriber::EnvFilter;

/// Hide a list of words in a grid of random letters.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value_t = 9)]
    rows: usize,

    #[arg(long, default_value_t = 9)]
    columns: usize,

    /// Seed for the random filler letters.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Emit search statistics as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Words to hide in the grid.
    #[arg(default_values_t = [
        "MATTHEW".to_string(),
        "JOE".to_string(),
        "MARY".to_string(),
        "SARAH".to_string(),
        "SALLY".to_string(),
    ])]
    words: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let words: Vec<String> = args.words.iter().map(|w| w.to_uppercase()).collect();

    let grid = word_search::generate_grid(args.rows, args.columns, args.seed);
    let problem = word_search::build_problem(words, args.rows, args.columns)?;

    let (solution, stats) = BacktrackingSolver::new().solve(&problem);
    match solution {
        Some(solution) => println!("{}", word_search::render(&grid, &solution)),
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
