use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::EngineError;
use crate::piece::Piece;
use crate::types::{Color, PieceRef, Square};

/// In-memory journal of one game. Every line is also sent to the `log`
/// facade at debug level under the `journal` target.
#[derive(Debug)]
pub struct GameLogger {
    pub log_buffer: String,
    pub advanced_logging: bool,
    started_at: DateTime<Local>,
    move_count: u32,
    indent_level: usize,
}

impl GameLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            advanced_logging: false,
            started_at: Local::now(),
            move_count: 0,
            indent_level: 0,
        };

        logger.log("=== Game Log Started ===");
        let date = logger.started_at.format("%m/%d/%Y %H:%M:%S").to_string();
        logger.log(&format!("Date: {date}"));
        logger
    }

    pub fn should_log_advanced(&self) -> bool {
        self.advanced_logging
    }

    pub fn enable_advanced_logging(&mut self) {
        self.advanced_logging = true;
        self.log("Advanced logging enabled - previews are recorded");
    }

    pub fn disable_advanced_logging(&mut self) {
        self.advanced_logging = false;
        self.log("Advanced logging disabled");
    }

    pub fn log(&mut self, message: &str) {
        log::debug!(target: "journal", "{message}");
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_with_indent(&mut self, message: &str) {
        let line = format!("{}{}", "  ".repeat(self.indent_level), message);
        self.log(&line);
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn log_selection(&mut self, piece: &Piece) {
        self.log(&format!(
            "{} picks up {} on {}",
            piece.color(),
            piece.kind(),
            piece.square()
        ));
        self.increase_indent();
    }

    pub fn log_preview(&mut self, target: Square, legal: bool, will_capture: bool) {
        if self.should_log_advanced() {
            let verdict = match (legal, will_capture) {
                (true, true) => "legal, captures",
                (true, false) => "legal",
                (false, _) => "illegal",
            };
            self.log_with_indent(&format!("over {target}: {verdict}"));
        }
    }

    pub fn log_commit(&mut self, mover: &PieceRef, from: Square, captured: Option<&PieceRef>, en_passant: bool) {
        self.decrease_indent();
        self.move_count += 1;
        let mut line = format!("{}. {} {} {}-{}", self.move_count, mover.color, mover.kind, from, mover.square);
        if let Some(victim) = captured {
            line.push_str(&format!(" takes {} {}", victim.kind, victim.square));
            if en_passant {
                line.push_str(" en passant");
            }
        }
        self.log(&line);
    }

    pub fn log_promotion(&mut self, queen: &PieceRef) {
        self.log_with_indent(&format!("  pawn promoted to {} queen on {}", queen.color, queen.square));
    }

    pub fn log_rejection(&mut self, piece: &Piece, target: Square) {
        self.decrease_indent();
        self.log(&format!(
            "rejected: {} {} {}-{}",
            piece.color(),
            piece.kind(),
            piece.previous_square(),
            target
        ));
    }

    pub fn log_turn(&mut self, color: Color) {
        self.log_with_indent(&format!("{color} to move"));
    }

    /// Write the journal to `<dir>/<timestamp>.txt` and return the path.
    pub fn save_to_file(&mut self, dir: &Path, reason: &str) -> Result<PathBuf, EngineError> {
        fs::create_dir_all(dir)?;

        let now = Local::now();
        let path = dir.join(format!("{}.txt", now.format("%m_%d_%Y_%H_%M_%S")));

        self.log(&format!("Game ended: {reason} - saving log"));

        let mut file = File::create(&path)?;
        file.write_all(self.log_buffer.as_bytes())?;
        Ok(path)
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceId, PieceKind};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn journal_starts_with_a_header() {
        let logger = GameLogger::new();
        assert!(logger.log_buffer.starts_with("=== Game Log Started ===\nDate: "));
        assert_eq!(logger.move_count(), 0);
    }

    #[test]
    fn commits_are_numbered() {
        let mut logger = GameLogger::new();
        let pawn = PieceRef {
            id: PieceId(4),
            kind: PieceKind::Pawn,
            color: Color::White,
            square: sq("e4"),
        };
        logger.log_commit(&pawn, sq("e2"), None, false);

        let victim = PieceRef {
            id: PieceId(4),
            kind: PieceKind::Pawn,
            color: Color::White,
            square: sq("e4"),
        };
        let taker = PieceRef {
            id: PieceId(19),
            kind: PieceKind::Pawn,
            color: Color::Black,
            square: sq("e3"),
        };
        logger.log_commit(&taker, sq("d4"), Some(&victim), true);

        assert_eq!(logger.move_count(), 2);
        assert!(logger.log_buffer.contains("1. white pawn e2-e4\n"));
        assert!(logger.log_buffer.contains("2. black pawn d4-e3 takes pawn e4 en passant\n"));
    }

    #[test]
    fn previews_only_show_up_with_advanced_logging() {
        let mut logger = GameLogger::new();
        logger.log_preview(sq("e4"), true, false);
        assert!(!logger.log_buffer.contains("over e4"));

        logger.enable_advanced_logging();
        logger.log_preview(sq("e4"), true, true);
        assert!(logger.log_buffer.contains("over e4: legal, captures"));
    }

    #[test]
    fn indent_never_goes_negative() {
        let mut logger = GameLogger::new();
        logger.decrease_indent();
        logger.log_with_indent("flat");
        assert!(logger.log_buffer.ends_with("\nflat\n"));
    }

    #[test]
    fn save_to_file_writes_the_buffer() {
        let dir = std::env::temp_dir().join(format!("drag-chess-journal-{}", std::process::id()));
        let mut logger = GameLogger::new();
        logger.log("hello");

        let path = logger.save_to_file(&dir, "test").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("hello\n"));
        assert!(written.ends_with("Game ended: test - saving log\n"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
