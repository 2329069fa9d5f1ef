//! Runs the Tabu Search on the `nug20` instance from the row-major layout.
//!
//! Usage: `nug20 [allowed_percent_error]` (default 0). Set `RUST_LOG=debug`
//! to see every iteration.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use u_qap::qap::{row_major_assignment, QapSolver};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let allowed_percent_error = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<f64>() {
            Ok(v) => v,
            Err(e) => {
                eprintln!("invalid allowed_percent_error {arg:?}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => 0.0,
    };

    let result = QapSolver::nug20(row_major_assignment(), allowed_percent_error)
        .and_then(|mut solver| solver.solve());
    match result {
        Ok(result) => {
            println!("stopped: {}", result.stop_reason);
            println!("cost: {}", result.best_cost);
            println!("solution: {}", result.best);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
