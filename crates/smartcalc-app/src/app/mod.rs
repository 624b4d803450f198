pub mod oneshot;
pub mod repl;
pub mod setup;

pub use oneshot::{keys_report, run_keys, run_keys_mode, run_solve_mode, solve_once, SolveReport};
pub use repl::run_repl_mode;
pub use setup::setup_from_cli;
