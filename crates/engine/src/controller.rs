//! Turn controller: picks up a piece of the side to move, previews moves on a
//! staged copy of the board, and commits or rolls back on release.

use log::{debug, info};

use crate::board::Board;
use crate::error::EngineError;
use crate::logger::GameLogger;
use crate::piece::Piece;
use crate::staging::Staging;
use crate::types::*;

/// Answer to a non-committing legality probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preview {
    pub legal: bool,
    pub will_capture: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutcome {
    pub committed: bool,
    /// The captured piece as it stood before the capture.
    pub captured: Option<PieceRef>,
    /// The queen that replaced a promoted pawn.
    pub promoted: Option<PieceRef>,
    pub next_color_to_move: Color,
}

impl ReleaseOutcome {
    fn rejected(color_to_move: Color) -> Self {
        Self {
            committed: false,
            captured: None,
            promoted: None,
            next_color_to_move: color_to_move,
        }
    }
}

#[derive(Debug)]
struct Drag {
    piece: PieceId,
    staging: Staging,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Dragging(Drag),
}

/// Committed board, side to move, and the move in progress.
#[derive(Debug)]
pub struct Game {
    board: Board,
    color_to_move: Color,
    phase: Phase,
    logger: Option<GameLogger>,
}

impl Game {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    pub fn from_board(board: Board, color_to_move: Color) -> Self {
        Self {
            board,
            color_to_move,
            phase: Phase::Idle,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: GameLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn logger(&self) -> Option<&GameLogger> {
        self.logger.as_ref()
    }

    pub fn logger_mut(&mut self) -> Option<&mut GameLogger> {
        self.logger.as_mut()
    }

    /// The committed board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board as it should be drawn: the staged view while dragging.
    pub fn display_board(&self) -> &Board {
        match &self.phase {
            Phase::Idle => &self.board,
            Phase::Dragging(drag) => drag.staging.view(),
        }
    }

    pub fn color_to_move(&self) -> Color {
        self.color_to_move
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// The piece being dragged, as it stands on the committed board.
    pub fn selected(&self) -> Option<&Piece> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Dragging(drag) => self.board.piece(drag.piece),
        }
    }

    /// Snapshot for rendering; follows `display_board`.
    pub fn board_state(&self) -> Vec<PieceRef> {
        self.display_board().snapshot()
    }

    /// Where the piece on `square` could go, ignoring whose turn it is.
    pub fn legal_targets(&self, square: Square) -> Vec<Square> {
        match self.board.piece_at(square) {
            Some(piece) => self.board.legal_targets(piece.id()),
            None => Vec::new(),
        }
    }

    /// Pick up the piece on `square` if it belongs to the side to move.
    ///
    /// Selecting while already dragging puts the held piece back first.
    pub fn select_at(&mut self, square: Square) -> bool {
        if let Some(held) = self.selected().map(Piece::previous_square) {
            self.release_at(held);
        }

        let Some(piece) = self
            .board
            .piece_at(square)
            .filter(|p| p.color() == self.color_to_move)
        else {
            debug!("select {square}: no {} piece there", self.color_to_move);
            return false;
        };

        if let Some(logger) = self.logger.as_mut() {
            logger.log_selection(piece);
        }
        self.phase = Phase::Dragging(Drag {
            piece: piece.id(),
            staging: Staging::begin(&self.board),
        });
        true
    }

    /// Probe the held piece against `square` and stage the preview.
    pub fn preview_move_to(&mut self, square: Square) -> Preview {
        let Phase::Dragging(drag) = &mut self.phase else {
            return Preview::default();
        };

        let legal = self.board.check_move(drag.piece, square.column(), square.row());
        drag.staging.stage(&self.board, drag.piece, square, legal.as_ref());

        let preview = Preview {
            legal: legal.is_some(),
            will_capture: legal.and_then(|mv| mv.captured()).is_some(),
        };
        if let Some(logger) = self.logger.as_mut() {
            logger.log_preview(square, preview.legal, preview.will_capture);
        }
        preview
    }

    /// Drop the held piece on `square`: commit if the move is legal on the
    /// committed board right now, otherwise roll back.
    pub fn release_at(&mut self, square: Square) -> ReleaseOutcome {
        let Drag { piece, mut staging } = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => return ReleaseOutcome::rejected(self.color_to_move),
            Phase::Dragging(drag) => drag,
        };

        let Some(mv) = self.board.check_move(piece, square.column(), square.row()) else {
            staging.rollback();
            if let Some(held) = self.board.piece(piece) {
                debug!("rejected {} {}-{square}", held.kind(), held.previous_square());
                if let Some(logger) = self.logger.as_mut() {
                    logger.log_rejection(held, square);
                }
            }
            return ReleaseOutcome::rejected(self.color_to_move);
        };

        let mover = self.board.piece(piece).map(Piece::to_ref);
        staging.stage(&self.board, piece, square, Some(&mv));
        let (board, applied) = staging.commit(&mv);
        self.board = board;
        self.color_to_move = self.color_to_move.opposite();

        let captured = applied.captured.as_ref().map(Piece::to_ref);
        let promoted = applied
            .promoted
            .and_then(|id| self.board.piece(id))
            .map(Piece::to_ref);

        if let Some(mover) = mover {
            info!("{} {} {}-{}", mover.color, mover.kind, mv.from, mv.to);
            if let Some(logger) = self.logger.as_mut() {
                let moved = PieceRef { square: mv.to, ..mover };
                logger.log_commit(&moved, mv.from, captured.as_ref(), applied.is_en_passant());
                if let Some(queen) = &promoted {
                    logger.log_promotion(queen);
                }
                logger.log_turn(self.color_to_move);
            }
        }

        ReleaseOutcome {
            committed: true,
            captured,
            promoted,
            next_color_to_move: self.color_to_move,
        }
    }

    /// Select, preview and release in one go.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<ReleaseOutcome, EngineError> {
        let piece = self.board.piece_at(from).ok_or(EngineError::NoPieceAt(from))?;
        if piece.color() != self.color_to_move {
            return Err(EngineError::NotYourTurn {
                square: from,
                expected: self.color_to_move,
                found: piece.color(),
            });
        }

        self.select_at(from);
        self.preview_move_to(to);
        let outcome = self.release_at(to);
        if !outcome.committed {
            return Err(EngineError::IllegalMove { from, to });
        }
        Ok(outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
