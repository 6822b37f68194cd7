use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countdown::{Evaluator, ExpressionSolver, SolverConfig, TokenizerMode, validate_numbers};
use log::{LevelFilter, info, warn};

/// Countdown - Reach a target from a set of numbers with + - << >>
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Find expressions over + - << >> that hit a target, or evaluate one under the same precedence"
)]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(short, long, default_value = "warn", global = true)]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for an expression that evaluates to TARGET
    Solve {
        /// Target value to reach
        #[arg(allow_negative_numbers = true)]
        target: i32,

        /// Numbers available, each usable at most once
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i32>,

        /// Disable caching of sub-sequence expressions
        #[arg(long)]
        no_memo: bool,

        /// Re-evaluate the witness text before printing it
        #[arg(long)]
        verify: bool,
    },
    /// Evaluate an expression (+ and - bind tighter than << and >>)
    Eval {
        /// Expression text, e.g. "((75 + 100) << (5 - 2))"
        expression: String,

        /// Reject characters outside the expression grammar instead of skipping them
        #[arg(long)]
        strict: bool,
    },
}

/// Install `env_logger` at `level`
pub fn init_logging(level: LevelFilter) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(args.log_level)?;

    match args.command {
        Command::Solve {
            target,
            numbers,
            no_memo,
            verify,
        } => run_solve(target, &numbers, !no_memo, verify),
        Command::Eval { expression, strict } => run_eval(&expression, strict),
    }
}

fn run_solve(target: i32, numbers: &[i32], memoize: bool, verify: bool) -> Result<()> {
    validate_numbers(numbers).context("Invalid numbers")?;

    let solver = ExpressionSolver::new(SolverConfig { memoize });

    info!("Searching for {} using numbers {:?}", target, numbers);

    match solver.find_solution(target, numbers) {
        Some(expr) => {
            if verify {
                solver
                    .verify(&expr, target)
                    .with_context(|| format!("Witness {} failed verification", expr))?;
                info!("Witness verified");
            }
            println!("{}", expr.describe());
            Ok(())
        }
        None => {
            warn!("No matching expression found");
            println!("No solution.");
            Ok(())
        }
    }
}

fn run_eval(expression: &str, strict: bool) -> Result<()> {
    let mode = if strict {
        TokenizerMode::Strict
    } else {
        TokenizerMode::Lenient
    };

    let value = Evaluator::with_mode(mode)
        .evaluate(expression)
        .with_context(|| format!("Could not evaluate '{}'", expression))?;
    println!("{}", value);
    Ok(())
}
