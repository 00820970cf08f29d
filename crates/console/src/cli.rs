use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "drag-chess", version, about = "Two-player chess, one pick-up and drop at a time")]
pub struct Cli {
    /// YAML config file (falls back to DRAG_CHESS_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Play these moves, e.g. "e2e4 e7e5", then exit instead of reading stdin
    #[arg(long, value_name = "MOVES")]
    pub moves: Option<String>,

    /// Write the game journal when the game ends
    #[arg(long)]
    pub save_journal: bool,
}
