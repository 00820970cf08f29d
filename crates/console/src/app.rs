use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use engine::{Game, GameLogger, PieceRef, ReleaseOutcome, Square, BOARD_SIZE};

use crate::config::Config;

/// One line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Square, Square),
    Select(Square),
    Drag(Square),
    Release(Square),
    Targets(Option<Square>),
    Board,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let square = |name: &str| -> anyhow::Result<Square> { Ok(Square::from_algebraic(name)?) };

        let command = match words.as_slice() {
            ["quit" | "exit" | "q"] => Command::Quit,
            ["board"] => Command::Board,
            ["targets"] => Command::Targets(None),
            ["targets", at] => Command::Targets(Some(square(at)?)),
            ["select", at] => Command::Select(square(at)?),
            ["drag", at] => Command::Drag(square(at)?),
            ["release", at] => Command::Release(square(at)?),
            [from, to] => Command::Move(square(from)?, square(to)?),
            [mv] if mv.len() == 4 && mv.is_char_boundary(2) => {
                let (from, to) = mv.split_at(2);
                Command::Move(square(from)?, square(to)?)
            }
            [] => bail!("empty command"),
            _ => bail!("unknown command `{line}`"),
        };
        Ok(command)
    }
}

pub struct ConsoleApp {
    game: Game,
    config: Config,
}

impl ConsoleApp {
    pub fn new(config: Config) -> Self {
        let mut logger = GameLogger::new();
        if config.verbose_journal {
            logger.enable_advanced_logging();
        }
        Self {
            game: Game::new().with_logger(logger),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run a command and return what to print.
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Move(from, to) => {
                let mover = self.game.board().piece_at(from).map(|p| p.to_ref());
                match (self.game.try_move(from, to), mover) {
                    (Ok(outcome), Some(mover)) => describe(mover, from, to, &outcome),
                    (Ok(_), None) => format!("{from}-{to}"),
                    (Err(e), _) => e.to_string(),
                }
            }
            Command::Select(square) => {
                if self.game.select_at(square) {
                    let mut out = self
                        .game
                        .selected()
                        .map(|p| format!("holding {} {} from {square}", p.color(), p.kind()))
                        .unwrap_or_default();
                    if self.config.show_targets {
                        out.push('\n');
                        out.push_str(&self.draw_board());
                    }
                    out
                } else {
                    format!("nothing of {} to pick up on {square}", self.game.color_to_move())
                }
            }
            Command::Drag(square) => {
                if !self.game.is_dragging() {
                    return "nothing selected".to_string();
                }
                let preview = self.game.preview_move_to(square);
                match (preview.legal, preview.will_capture) {
                    (true, true) => format!("{square}: legal, captures"),
                    (true, false) => format!("{square}: legal"),
                    (false, _) => format!("{square}: illegal"),
                }
            }
            Command::Release(square) => {
                let Some(mover) = self.game.selected().map(|p| p.to_ref()) else {
                    return "nothing selected".to_string();
                };
                let outcome = self.game.release_at(square);
                if outcome.committed {
                    describe(mover, mover.square, square, &outcome)
                } else {
                    format!("{} {} goes back to {}", mover.color, mover.kind, mover.square)
                }
            }
            Command::Targets(square) => {
                let from = square.or_else(|| self.game.selected().map(|p| p.previous_square()));
                let Some(from) = from else {
                    return "nothing selected".to_string();
                };
                let targets = self.game.legal_targets(from);
                if targets.is_empty() {
                    format!("{from}: no moves")
                } else {
                    let names: Vec<String> = targets.iter().map(Square::to_string).collect();
                    format!("{from}: {}", names.join(" "))
                }
            }
            Command::Board => self.draw_board(),
            Command::Quit => String::new(),
        }
    }

    /// Play a whitespace-separated list of moves, stopping at the first
    /// one that is rejected.
    pub fn run_script(&mut self, moves: &str) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::new();
        for (n, word) in moves.split_whitespace().enumerate() {
            let command: Command = word.parse().with_context(|| format!("move {} `{word}`", n + 1))?;
            let Command::Move(from, to) = command else {
                bail!("move {} `{word}` is not a move", n + 1);
            };
            let mover = self
                .game
                .board()
                .piece_at(from)
                .map(|p| p.to_ref())
                .ok_or_else(|| anyhow!("move {} `{word}`: no piece on {from}", n + 1))?;
            let outcome = self
                .game
                .try_move(from, to)
                .with_context(|| format!("move {} `{word}`", n + 1))?;
            lines.push(describe(mover, from, to, &outcome));
        }
        Ok(lines)
    }

    /// Save the journal if the config asks for it.
    pub fn finish(&mut self, reason: &str) -> anyhow::Result<Option<PathBuf>> {
        if !self.config.save_journal {
            return Ok(None);
        }
        let dir = self.config.journal_dir.clone();
        match self.game.logger_mut() {
            Some(logger) => {
                let path = logger
                    .save_to_file(&dir, reason)
                    .with_context(|| format!("failed to save journal to {}", dir.display()))?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    /// Text board, black's back rank on top. While a piece is held its
    /// origin is bracketed and, with `show_targets`, its legal targets are
    /// marked.
    pub fn draw_board(&self) -> String {
        let board = self.game.display_board();
        let origin = self.game.selected().map(|p| p.previous_square());
        let targets = match origin {
            Some(from) if self.config.show_targets => self.game.legal_targets(from),
            _ => Vec::new(),
        };
        let empty = if self.config.unicode { '·' } else { '.' };
        let target = if self.config.unicode { '•' } else { '*' };

        let mut out = String::new();
        for row in 0..BOARD_SIZE {
            let _ = write!(out, "{} ", BOARD_SIZE - row);
            for column in 0..BOARD_SIZE {
                let Ok(square) = Square::new(column, row) else {
                    continue;
                };
                let glyph = match board.piece_at(square) {
                    Some(piece) if self.config.unicode => piece.kind().symbol(piece.color()),
                    Some(piece) => piece.kind().letter(piece.color()),
                    None if targets.contains(&square) => target,
                    None => empty,
                };
                let (left, right) = if Some(square) == origin {
                    ('[', ']')
                } else if targets.contains(&square) && board.piece_at(square).is_some() {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };
                out.push(left);
                out.push(glyph);
                out.push(right);
            }
            out.push('\n');
        }
        out.push_str("   a  b  c  d  e  f  g  h\n");
        let _ = write!(out, "{} to move", self.game.color_to_move());
        out
    }

    pub fn prompt(&self) -> String {
        let side = self.game.color_to_move();
        if self.game.is_dragging() {
            format!("{side} (holding) > ")
        } else {
            format!("{side} > ")
        }
    }
}

fn describe(mover: PieceRef, from: Square, to: Square, outcome: &ReleaseOutcome) -> String {
    let mut line = format!("{} {} {from}-{to}", mover.color, mover.kind);
    if let Some(victim) = &outcome.captured {
        let _ = write!(line, ", takes {} on {}", victim.kind, victim.square);
    }
    if let Some(queen) = &outcome.promoted {
        let _ = write!(line, ", promotes to {} on {}", queen.kind, queen.square);
    }
    line
}
