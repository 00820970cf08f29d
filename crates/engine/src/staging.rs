//! Working copy of the board used while a piece is being dragged.
//!
//! The staged view is rebuilt from the committed board on every update, so a
//! discarded preview never leaves anything behind.

use crate::board::{AppliedMove, Board, LegalMove};
use crate::piece::Piece;
use crate::types::{PieceId, Square};

#[derive(Debug, Clone)]
pub struct Staging {
    view: Board,
    /// Piece taken off the staged view by a capture preview.
    held: Option<Piece>,
}

impl Staging {
    pub fn begin(committed: &Board) -> Self {
        Self {
            view: committed.clone(),
            held: None,
        }
    }

    /// What the board looks like with the current preview applied.
    pub fn view(&self) -> &Board {
        &self.view
    }

    pub fn held_capture(&self) -> Option<&Piece> {
        self.held.as_ref()
    }

    /// Re-derive the view: `piece` shown on `target`, and, when `legal`
    /// captures, the victim provisionally removed.
    pub fn stage(&mut self, committed: &Board, piece: PieceId, target: Square, legal: Option<&LegalMove>) {
        self.view.clone_from(committed);
        self.held = None;

        if let Some(moving) = self.view.piece_mut(piece) {
            moving.drag_to(target);
        }
        if let Some(victim) = legal.and_then(LegalMove::captured) {
            self.held = self.view.remove(victim);
        }
    }

    /// Adopt the staged view as the new committed board and finish the move
    /// on it.
    pub fn commit(self, mv: &LegalMove) -> (Board, AppliedMove) {
        let mut board = self.view;
        let mut applied = board.apply_move(mv);
        if applied.captured.is_none() {
            applied.captured = self.held;
        }
        (board, applied)
    }

    /// Throw the preview away. The committed board was never touched.
    pub fn rollback(self) {}
}
