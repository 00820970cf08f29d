mod app;
mod cli;
mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use app::{Command, ConsoleApp};

fn main() -> anyhow::Result<()> {
    let env = Env::default().filter_or("DRAG_CHESS_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let cli = cli::Cli::parse();
    let cfg_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("DRAG_CHESS_CONFIG").map(PathBuf::from));
    let mut cfg = config::Config::load(cfg_path.as_deref())?;
    if cli.save_journal {
        cfg.save_journal = true;
    }

    let mut app = ConsoleApp::new(cfg);
    let reason = match &cli.moves {
        Some(moves) => {
            for line in app.run_script(moves)? {
                println!("{line}");
            }
            println!("{}", app.draw_board());
            "script finished"
        }
        None => run_interactive(&mut app)?,
    };

    if let Some(path) = app.finish(reason)? {
        info!("journal saved to {}", path.display());
    }
    Ok(())
}

fn run_interactive(app: &mut ConsoleApp) -> anyhow::Result<&'static str> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", app.draw_board());

    loop {
        write!(stdout, "{}", app.prompt())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read stdin")? == 0 {
            return Ok("end of input");
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => return Ok("quit"),
            Ok(command) => println!("{}", app.execute(command)),
            Err(e) => warn!("{e:#}"),
        }
    }
}
