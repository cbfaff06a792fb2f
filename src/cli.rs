//! Command-line surface for the solver process (C9).

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(about = "Builds the position graph from a starting board and solves it by backward induction")]
pub struct HorizonOptions {
    /// How many real plies to expand breadth-first before the frontier is finalized.
    #[arg(short, long, default_value_t = 10)]
    pub depth: usize,

    /// Path to the endgame knowledge CSV. Missing file is tolerated; malformed contents are not.
    #[arg(short, long, default_value = "knowledge.csv")]
    pub knowledge: String,

    /// Overrides the starting position; a 64-character board string. Defaults to the
    /// standard Othello opening.
    #[arg(short, long)]
    pub board: Option<String>,

    /// Log level passed to the logger, e.g. "info", "debug", "warn".
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}
